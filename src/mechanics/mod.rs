pub mod control;
pub mod exchange;
pub mod score;
pub mod stoch;

pub use exchange::*;
pub use score::*;

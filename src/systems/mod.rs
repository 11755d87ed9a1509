pub mod sdk;
#[cfg(feature="system-k_tuning")]   pub mod k_tuning;
#[cfg(feature="system-career_sim")] pub mod career_sim;

/// Control mechanics: proportional updates.

/// Proportional against signed error: x' = clamp(x - k * error).
#[inline]
pub fn p_against_error(x: f64, error: f64, k: f64, lo: f64, hi: f64) -> f64 {
    (x - k * error).clamp(lo, hi)
}

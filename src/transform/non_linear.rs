//! Non-linear transform utilities.

#[inline]
/// Clamp scalar value to normalized range `[0, 1]`.
pub fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Triangle wave over one period: `0 -> 1 -> 0` as `phase` goes `0 -> 0.5 -> 1`.
///
/// `phase` is wrapped into `[0, 1)` first, so any real input is accepted.
pub fn ping_pong(phase: f64) -> f64 {
    if !phase.is_finite() {
        return 0.0;
    }
    let p = phase.rem_euclid(1.0);
    if p < 0.5 { p * 2.0 } else { (1.0 - p) * 2.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/non_linear.rs"]
mod tests;

//! Linear transform helpers.

#[inline]
/// Linearly interpolate between `a` and `b`. `t` is not clamped so spring overshoot survives.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[inline]
/// Position of `x` within `[a, b]` as a fraction. A zero-width span maps to `0`.
pub fn inverse_lerp(a: f64, b: f64, x: f64) -> f64 {
    let span = b - a;
    if span == 0.0 {
        return 0.0;
    }
    (x - a) / span
}

#[cfg(test)]
#[path = "../../tests/unit/transform/linear.rs"]
mod tests;

//! Scalar transform helpers shared by the scroll mapper and the entrance sampler.

mod linear;
mod non_linear;

pub use linear::{inverse_lerp, lerp};
pub use non_linear::{clamp01, ping_pong};

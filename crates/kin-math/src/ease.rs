//! Scalar easing and blending helpers for animation parameters.

use crate::Vector3;

/// Smoothstep ease-in-out over `[0, 1]`.
pub fn smoothstep(t: f64) -> f64 {
    let x = t.clamp(0.0, 1.0);
    x * x * (3.0 - 2.0 * x)
}

/// Linear blend between two vectors.
pub fn lerp(a: Vector3, b: Vector3, factor: f64) -> Vector3 {
    a * (1.0 - factor) + b * factor
}

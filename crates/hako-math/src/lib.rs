#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    rust_2018_idioms,
    missing_docs,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
#![doc = r"Core math for Hako: 2D/3D vectors and scalar helpers.

This crate provides:
- 2D vectors (`Vec2`) with dot/cross products, angles, and normalization.
- 3D vectors (`Vec3`) with the same surface plus the 3D cross product.
- Scalar helpers (`clamp`, `deg_to_rad`, `rad_to_deg`) and the shared
  degeneracy threshold `EPSILON`.
- A domain error type (`MathError`) for the few operations that can fail.

Design notes:
- Everything is a `Copy` value type; operations take `self`/`&self` and
  return new values, never mutating shared state.
- Equality is exact `f32` component comparison. There is no epsilon-based
  `PartialEq`; comparisons with tolerance belong in calling code.
- Fallible operations (scalar division, normalization, angles) return
  `Result` instead of silently producing `NaN` or infinities.
"]

use std::f32::consts::TAU;

mod error;
mod vec2;
mod vec3;

pub use error::MathError;
pub use vec2::Vec2;
pub use vec3::Vec3;

/// Degeneracy threshold used by math routines when detecting zero-length
/// vectors. This is a domain policy, not float precision: vectors with
/// length at or below `EPSILON` cannot be normalized or measured against.
pub const EPSILON: f32 = 1e-6;

/// Clamps `value` to the inclusive `[min, max]` range using float32 rounding.
#[must_use]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    debug_assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.max(min).min(max)
}

/// Converts degrees to radians with float32 precision.
#[must_use]
pub fn deg_to_rad(value: f32) -> f32 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees with float32 precision.
#[must_use]
pub fn rad_to_deg(value: f32) -> f32 {
    value * (360.0 / TAU)
}

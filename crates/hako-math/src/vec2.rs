use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{clamp, MathError, EPSILON};

/// 2D vector used throughout the framework for positions, displacements,
/// and sizes.
///
/// * Components are `f32`; copies are independent values.
/// * Equality is exact component comparison (derived `PartialEq`), matching
///   the framework-wide contract for value types.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2 {
    x: f32,
    y: f32,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// The all-ones vector.
    pub const ONE: Self = Self::new(1.0, 1.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Creates a vector from components.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the X component.
    #[must_use]
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Returns the Y component.
    #[must_use]
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Returns the components as an array.
    #[must_use]
    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Adds two vectors.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Subtracts another vector.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    /// Scales the vector by a scalar.
    #[must_use]
    pub fn scale(&self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }

    /// Divides the vector by a scalar.
    ///
    /// A zero scalar is a domain error rather than a silent pair of
    /// infinities.
    pub fn div(&self, scalar: f32) -> Result<Self, MathError> {
        if scalar == 0.0 {
            return Err(MathError::DivisionByZero);
        }
        Ok(Self::new(self.x / scalar, self.y / scalar))
    }

    /// Returns the componentwise negation.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::new(-self.x, -self.y)
    }

    /// Dot product with another vector. Symmetric.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product with another vector.
    ///
    /// Returns the scalar `x·other.y − y·other.x`: the signed area of the
    /// parallelogram the two vectors span. The sign gives the rotational
    /// orientation of `other` relative to `self`; swapping the operands
    /// negates the result.
    #[must_use]
    pub fn cross(&self, other: &Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Vector length (magnitude).
    #[must_use]
    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Squared magnitude of the vector.
    ///
    /// Avoids the square root; prefer this for length comparisons.
    #[must_use]
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Normalizes the vector to unit length.
    ///
    /// A vector with length ≤ [`EPSILON`] has no direction to keep, so the
    /// call fails with [`MathError::DegenerateVector`]; the input value is
    /// untouched. Use [`Vec2::normalize_or_zero`] when a silent zero
    /// fallback is acceptable.
    pub fn try_normalize(&self) -> Result<Self, MathError> {
        let len = self.length();
        if len <= EPSILON {
            return Err(MathError::DegenerateVector);
        }
        Ok(self.scale(1.0 / len))
    }

    /// Normalizes the vector, returning the zero vector for degenerate
    /// input (length ≤ [`EPSILON`]).
    ///
    /// This is the lenient counterpart to [`Vec2::try_normalize`] for
    /// callers that treat "no direction" as "stay put".
    #[must_use]
    pub fn normalize_or_zero(&self) -> Self {
        self.try_normalize().unwrap_or(Self::ZERO)
    }

    /// Unsigned angle between two vectors, in radians in `[0, π]`.
    ///
    /// Computed from the dot product; the cosine is clamped to `[-1, 1]`
    /// before `acos` so float rounding near parallel vectors cannot push
    /// the argument out of domain and produce `NaN`. Either operand being
    /// degenerate (length ≤ [`EPSILON`]) is a domain error: a zero vector
    /// has no angle to anything.
    pub fn angle_to(&self, other: &Self) -> Result<f32, MathError> {
        let len_a = self.length();
        let len_b = other.length();
        if len_a <= EPSILON || len_b <= EPSILON {
            return Err(MathError::DegenerateVector);
        }
        let cos = clamp(self.dot(other) / (len_a * len_b), -1.0, 1.0);
        Ok(cos.acos())
    }
}

/// Converts a 2-element `[f32; 2]` array into a `Vec2` interpreted as `(x, y)`.
impl From<[f32; 2]> for Vec2 {
    fn from(value: [f32; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

/// Stable diagnostic format: `Vec2(x, y)`.
///
/// Intended for logs and debug overlays only; program correctness must
/// never depend on parsing it.
impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec2({}, {})", self.x, self.y)
    }
}

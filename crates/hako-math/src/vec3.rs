use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{clamp, MathError, EPSILON};

/// 3D vector with the same value semantics as [`Vec2`](crate::Vec2).
///
/// Components may represent a point or a direction depending on the calling
/// context; the operations do not distinguish the two.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec3 {
    x: f32,
    y: f32,
    z: f32,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// The all-ones vector.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
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

    /// Returns the Z component.
    #[must_use]
    pub fn z(&self) -> f32 {
        self.z
    }

    /// Returns the components as an array.
    #[must_use]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Adds two vectors.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Subtracts another vector.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Scales the vector by a scalar.
    #[must_use]
    pub fn scale(&self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    /// Divides the vector by a scalar.
    ///
    /// A zero scalar is a domain error rather than silent infinities.
    pub fn div(&self, scalar: f32) -> Result<Self, MathError> {
        if scalar == 0.0 {
            return Err(MathError::DivisionByZero);
        }
        Ok(Self::new(self.x / scalar, self.y / scalar, self.z / scalar))
    }

    /// Returns the componentwise negation.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }

    /// Dot product with another vector. Symmetric.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product with another vector.
    ///
    /// Returns a new vector orthogonal to both operands, oriented by the
    /// right-hand rule; swapping the operands negates the result.
    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
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
    /// Fails with [`MathError::DegenerateVector`] when the length is at or
    /// below [`EPSILON`]; see [`Vec3::normalize_or_zero`] for the lenient
    /// fallback.
    pub fn try_normalize(&self) -> Result<Self, MathError> {
        let len = self.length();
        if len <= EPSILON {
            return Err(MathError::DegenerateVector);
        }
        Ok(self.scale(1.0 / len))
    }

    /// Normalizes the vector, returning the zero vector for degenerate
    /// input (length ≤ [`EPSILON`]).
    #[must_use]
    pub fn normalize_or_zero(&self) -> Self {
        self.try_normalize().unwrap_or(Self::ZERO)
    }

    /// Unsigned angle between two vectors, in radians in `[0, π]`.
    ///
    /// Same contract as [`Vec2::angle_to`](crate::Vec2::angle_to): the
    /// cosine is clamped to `[-1, 1]` before `acos`, and a degenerate
    /// operand is a domain error.
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

/// Converts a 3-element `[f32; 3]` array into a `Vec3` interpreted as
/// `(x, y, z)`.
impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

/// Stable diagnostic format: `Vec3(x, y, z)`. Diagnostic only.
impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec3({}, {}, {})", self.x, self.y, self.z)
    }
}

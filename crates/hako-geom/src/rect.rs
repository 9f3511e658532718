//! Axis-aligned rectangle anchored at an origin with a width and height.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use hako_math::Vec2;

/// Axis-aligned rectangle spanning `(x, y)` to `(x + width, y + height)`.
///
/// Invariants:
/// - `width` and `height` are assumed non-negative; the geometry queries
///   (`contains`, `intersects`, `union`, `intersection`) are only defined
///   for that domain. Flipped rectangles are not a supported input.
/// - Equality is exact component comparison of all four fields.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl Rect {
    /// The canonical zero rectangle: origin at `(0, 0)` with zero extent.
    ///
    /// Also the sentinel returned by [`Rect::intersection`] for disjoint
    /// operands.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Constructs a rectangle from its origin and extents.
    ///
    /// Debug builds assert that the extents are non-negative; release
    /// builds accept the values as given, and the geometry queries are
    /// undefined for negative extents.
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        debug_assert!(
            width >= 0.0 && height >= 0.0,
            "negative Rect extents: {width}x{height}"
        );
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Constructs a rectangle from an origin point and a size vector.
    #[must_use]
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self::new(origin.x(), origin.y(), size.x(), size.y())
    }

    /// Returns the origin X coordinate.
    #[must_use]
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Returns the origin Y coordinate.
    #[must_use]
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Returns the width.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the height.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Smallest X coordinate covered by the rectangle.
    #[must_use]
    pub fn min_x(&self) -> f32 {
        self.x
    }

    /// Largest X coordinate covered by the rectangle.
    #[must_use]
    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    /// Smallest Y coordinate covered by the rectangle.
    #[must_use]
    pub fn min_y(&self) -> f32 {
        self.y
    }

    /// Largest Y coordinate covered by the rectangle.
    #[must_use]
    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// Returns the origin corner (minimum X and Y) as a vector.
    #[must_use]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Returns the extents as a vector.
    #[must_use]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Returns the center point of the rectangle.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Returns `true` if the point lies within the rectangle.
    ///
    /// Bounds are inclusive: points on an edge or corner count as inside.
    #[must_use]
    pub fn contains_point(&self, px: f32, py: f32) -> bool {
        px >= self.min_x() && px <= self.max_x() && py >= self.min_y() && py <= self.max_y()
    }

    /// Returns `true` if the position vector lies within the rectangle.
    #[must_use]
    pub fn contains_pos(&self, pos: &Vec2) -> bool {
        self.contains_point(pos.x(), pos.y())
    }

    /// Returns `true` if `other` lies entirely within this rectangle
    /// (inclusive bounds, so a rectangle contains itself).
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        other.min_x() >= self.min_x()
            && other.max_x() <= self.max_x()
            && other.min_y() >= self.min_y()
            && other.max_y() <= self.max_y()
    }

    /// Returns `true` if this rectangle overlaps another. Symmetric.
    ///
    /// Inclusive on edges: rectangles that merely touch still intersect.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        !(self.max_x() < other.min_x()
            || self.min_x() > other.max_x()
            || self.max_y() < other.min_y()
            || self.min_y() > other.max_y())
    }

    /// Returns the overlapping region of two rectangles.
    ///
    /// Disjoint operands yield [`Rect::ZERO`] as a sentinel rather than an
    /// error; check [`Rect::intersects`] first when "no overlap" must be
    /// distinguished from a genuine zero-area overlap at the origin.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        if !self.intersects(other) {
            return Self::ZERO;
        }
        let min_x = self.min_x().max(other.min_x());
        let min_y = self.min_y().max(other.min_y());
        let max_x = self.max_x().min(other.max_x());
        let max_y = self.max_y().min(other.max_y());
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Returns the minimal rectangle covering both operands.
    ///
    /// Total: always succeeds and always [`Rect::contains`] both inputs.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let min_x = self.min_x().min(other.min_x());
        let min_y = self.min_y().min(other.min_y());
        let max_x = self.max_x().max(other.max_x());
        let max_y = self.max_y().max(other.max_y());
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }
}

/// Stable diagnostic format: `Rect(x, y, width, height)`. Diagnostic only.
impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rect({}, {}, {}, {})",
            self.x, self.y, self.width, self.height
        )
    }
}

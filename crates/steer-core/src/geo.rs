//! Planar geometry for the steering model.
//!
//! The simulation surface uses screen coordinates: `x` grows to the right,
//! `y` grows downward, so an angle measured with `atan2(dy, dx)` reads
//! clockwise.  All angles in this workspace are in degrees.

use std::ops::{Add, Sub};

use rand::Rng;

/// A position or displacement on the simulation surface.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Direction from `self` to `other` in degrees, in `(-180, 180]`.
    #[inline]
    pub fn angle_to(self, other: Point) -> f64 {
        (other.y - self.y).atan2(other.x - self.x).to_degrees()
    }

    /// The point `len` units away from `self` in direction `degrees`.
    #[inline]
    pub fn offset(self, degrees: f64, len: f64) -> Point {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Point::new(self.x + len * cos, self.y + len * sin)
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Map any finite angle into `(-180, 180]` degrees.
///
/// `-180` itself maps to `180` so every direction has exactly one
/// representation.
#[inline]
pub fn normalize_degrees(degrees: f64) -> f64 {
    let mut a = degrees % 360.0;
    if a > 180.0 {
        a -= 360.0;
    } else if a <= -180.0 {
        a += 360.0;
    }
    a
}

// ── Bounds ────────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle delimiting the simulation surface.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Default for Bounds {
    /// A 1000 × 500 surface anchored at the origin.
    fn default() -> Self {
        Self {
            min: Point::ORIGIN,
            max: Point::new(1000.0, 500.0),
        }
    }
}

impl Bounds {
    #[inline]
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// `true` when both extents are strictly positive and finite.
    pub fn is_valid(&self) -> bool {
        self.width().is_finite() && self.height().is_finite()
            && self.width() > 0.0 && self.height() > 0.0
    }

    /// Inclusive containment test.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }

    /// A uniformly distributed point inside the bounds, rounded to whole
    /// units.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        let x = self.min.x + rng.r#gen::<f64>() * self.width();
        let y = self.min.y + rng.r#gen::<f64>() * self.height();
        Point::new(x.round(), y.round())
    }
}

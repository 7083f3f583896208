//! Canvas-space coordinates.
//!
//! All positions live in one continuous 2-D canvas (length units, origin at
//! the top-left corner).  Region rectangles partition part of that canvas;
//! see `ct_spatial::layout`.

/// A point (or displacement) on the simulation canvas.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance.  Contact checks compare this against a
    /// squared radius so no square root is taken per pair.
    #[inline]
    pub fn distance_sq(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        self.distance_sq(other).sqrt()
    }

    /// Move from `self` toward `target` by at most `step` units.
    ///
    /// Never overshoots: when `target` is closer than `step` the result is
    /// exactly `target`.
    pub fn step_toward(self, target: Point, step: f64) -> Point {
        let dist = self.distance(target);
        if dist <= step || dist == 0.0 {
            return target;
        }
        let f = step / dist;
        Point::new(
            self.x + (target.x - self.x) * f,
            self.y + (target.y - self.y) * f,
        )
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

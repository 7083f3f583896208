//! Fixed region geometry.
//!
//! # Layout
//!
//! The canvas is split into a 3×3 grid of equally sized rectangles separated
//! (and framed) by `PADDING`:
//!
//! ```text
//!   ┌───┬───┬───┐
//!   │ 0 │ 1 │ 2 │
//!   ├───┼───┼───┤
//!   │ 3 │ 4 │ 5 │
//!   ├───┼───┼───┤
//!   │ 6 │ 7 │ Q │   Q = region 8, quarantine
//!   └───┴───┴───┘
//! ```
//!
//! Region `i` occupies cell `(row = i / 3, col = i % 3)`.  Everything here is
//! a pure function of the constants below.

use ct_core::{Point, SimRng};

use crate::{RegionId, SpatialResult};

pub const CANVAS_WIDTH:  f64 = 900.0;
pub const CANVAS_HEIGHT: f64 = 900.0;
pub const GRID_SIZE:     usize = 3;
pub const PADDING:       f64 = 20.0;

/// Radius of the "center" disc inside each normal region that agents visit.
pub const CENTER_RADIUS: f64 = 20.0;

/// Width of one region rectangle.
pub const REGION_WIDTH: f64 = (CANVAS_WIDTH - PADDING * (GRID_SIZE as f64 + 1.0)) / GRID_SIZE as f64;

/// Height of one region rectangle.
pub const REGION_HEIGHT: f64 = (CANVAS_HEIGHT - PADDING * (GRID_SIZE as f64 + 1.0)) / GRID_SIZE as f64;

/// Axis-aligned rectangle of one region plus its center point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RegionBounds {
    pub min_x:    f64,
    pub max_x:    f64,
    pub min_y:    f64,
    pub max_y:    f64,
    pub center_x: f64,
    pub center_y: f64,
}

impl RegionBounds {
    /// Geometry of `region`.
    pub fn of(region: RegionId) -> Self {
        let col = (region.index() % GRID_SIZE) as f64;
        let row = (region.index() / GRID_SIZE) as f64;
        let min_x = PADDING + col * (REGION_WIDTH + PADDING);
        let min_y = PADDING + row * (REGION_HEIGHT + PADDING);
        let max_x = min_x + REGION_WIDTH;
        let max_y = min_y + REGION_HEIGHT;
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
            center_x: (min_x + max_x) * 0.5,
            center_y: (min_y + max_y) * 0.5,
        }
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// `true` if `p` lies inside the rectangle (edges included).
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        (self.min_x..=self.max_x).contains(&p.x) && (self.min_y..=self.max_y).contains(&p.y)
    }

    /// Nearest point inside the rectangle.
    #[inline]
    pub fn clamp(&self, p: Point) -> Point {
        Point::new(p.x.clamp(self.min_x, self.max_x), p.y.clamp(self.min_y, self.max_y))
    }

    /// `true` if `p` is within the center disc.
    #[inline]
    pub fn in_center(&self, p: Point) -> bool {
        p.distance_sq(self.center()) <= CENTER_RADIUS * CENTER_RADIUS
    }

    /// Uniform random point at least `margin` away from every edge.
    pub fn random_point(&self, rng: &mut SimRng, margin: f64) -> Point {
        let margin = margin.min(self.width() * 0.5).min(self.height() * 0.5);
        Point::new(
            rng.gen_range(self.min_x + margin..=self.max_x - margin),
            rng.gen_range(self.min_y + margin..=self.max_y - margin),
        )
    }

    /// Uniform random point in the square of half-side `jitter` around the
    /// center, kept inside the rectangle.
    pub fn random_point_near_center(&self, rng: &mut SimRng, jitter: f64) -> Point {
        let p = Point::new(
            self.center_x + rng.gen_range(-jitter..=jitter),
            self.center_y + rng.gen_range(-jitter..=jitter),
        );
        self.clamp(p)
    }

    /// Uniform random point inside the center disc.
    pub fn random_point_in_center(&self, rng: &mut SimRng) -> Point {
        // sqrt keeps the density uniform over the disc area.
        let r = CENTER_RADIUS * rng.random::<f64>().sqrt();
        let theta = rng.angle();
        Point::new(self.center_x + r * theta.cos(), self.center_y + r * theta.sin())
    }
}

/// Bounds of the region with raw index `region_index`.
///
/// # Errors
///
/// [`SpatialError::InvalidRegion`][crate::SpatialError::InvalidRegion] for
/// any index other than 0..=8.  Index 8 is the quarantine region and is valid.
pub fn bounds(region_index: usize) -> SpatialResult<RegionBounds> {
    RegionId::new(region_index).map(RegionBounds::of)
}

/// The region whose rectangle contains `p`, if any (padding belongs to none).
pub fn region_at(p: Point) -> Option<RegionId> {
    RegionId::NORMAL
        .iter()
        .copied()
        .chain(std::iter::once(RegionId::QUARANTINE))
        .find(|&r| RegionBounds::of(r).contains(p))
}

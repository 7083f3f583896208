//! Per-region grid-bucket index for radius-bounded neighbor search.
//!
//! # Design
//!
//! Agents are hashed into square cells of side `cell_size`.  The cell key
//! carries the region as well as the integer cell coordinates, so two agents
//! in different regions never share a bucket even at identical coordinates.
//!
//! A query for radius `r` around `(x, y)` visits every cell overlapping the
//! bounding square `[x-r, x+r] × [y-r, y+r]`.  That is a superset of the true
//! neighbors; callers finish with a squared-distance check.
//!
//! Positions change every tick, so the index is rebuilt from scratch every
//! tick.  Building is O(agents).

use rustc_hash::FxHashMap;

use ct_core::{AgentId, Point};

use crate::RegionId;

/// Anything that can be placed in a [`GridIndex`].
pub trait Locatable {
    fn position(&self) -> Point;

    fn region(&self) -> RegionId;

    /// `false` for items that must never appear in the index (e.g. dead
    /// agents).
    fn is_indexed(&self) -> bool {
        true
    }
}

/// Bucket key: region plus integer cell coordinates.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct CellKey {
    pub region: RegionId,
    pub cx:     i32,
    pub cy:     i32,
}

impl CellKey {
    /// The cell containing `p` within `region`.
    #[inline]
    pub fn of(region: RegionId, p: Point, cell_size: f64) -> Self {
        Self {
            region,
            cx: (p.x / cell_size).floor() as i32,
            cy: (p.y / cell_size).floor() as i32,
        }
    }
}

/// `CellKey → Vec<AgentId>` buckets for one tick.
///
/// Each bucket lists agents in ascending `AgentId` order (the build scan
/// order), which keeps neighbor enumeration deterministic.
pub struct GridIndex {
    cell_size: f64,
    buckets:   FxHashMap<CellKey, Vec<AgentId>>,
    len:       usize,
}

impl GridIndex {
    /// Index `items` (item `i` gets `AgentId(i)`).
    ///
    /// Items with `is_indexed() == false` are skipped, as are items outside
    /// `region_filter` when one is given.
    ///
    /// `cell_size` must be positive.
    pub fn build<T: Locatable>(items: &[T], cell_size: f64, region_filter: Option<RegionId>) -> Self {
        debug_assert!(cell_size > 0.0, "cell size must be positive");

        let mut buckets: FxHashMap<CellKey, Vec<AgentId>> = FxHashMap::default();
        let mut len = 0;
        for (i, item) in items.iter().enumerate() {
            if !item.is_indexed() {
                continue;
            }
            let region = item.region();
            if region_filter.is_some_and(|r| r != region) {
                continue;
            }
            buckets
                .entry(CellKey::of(region, item.position(), cell_size))
                .or_default()
                .push(AgentId(i as u32));
            len += 1;
        }
        Self { cell_size, buckets, len }
    }

    /// Every cell key overlapping the square that bounds the circle of
    /// `radius` around `p`, in row-major order.
    pub fn neighbors(region: RegionId, p: Point, radius: f64, cell_size: f64) -> Vec<CellKey> {
        let lo = CellKey::of(region, Point::new(p.x - radius, p.y - radius), cell_size);
        let hi = CellKey::of(region, Point::new(p.x + radius, p.y + radius), cell_size);
        let mut keys =
            Vec::with_capacity(((hi.cx - lo.cx + 1) * (hi.cy - lo.cy + 1)).max(0) as usize);
        for cy in lo.cy..=hi.cy {
            for cx in lo.cx..=hi.cx {
                keys.push(CellKey { region, cx, cy });
            }
        }
        keys
    }

    /// Agents in the cells around `p` that may lie within `radius`.
    ///
    /// Each indexed agent appears at most once because every agent lives in
    /// exactly one bucket and the visited keys are distinct.
    pub fn candidates(
        &self,
        region: RegionId,
        p:      Point,
        radius: f64,
    ) -> impl Iterator<Item = AgentId> + '_ {
        Self::neighbors(region, p, radius, self.cell_size)
            .into_iter()
            .flat_map(move |key| self.bucket(&key).iter().copied())
    }

    /// Agents in one bucket (empty slice for unoccupied cells).
    #[inline]
    pub fn bucket(&self, key: &CellKey) -> &[AgentId] {
        self.buckets.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    #[inline]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Number of indexed agents.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of occupied cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.buckets.len()
    }
}

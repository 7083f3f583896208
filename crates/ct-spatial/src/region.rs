//! Region identifiers.

use std::fmt;

use crate::{SpatialError, SpatialResult};

/// Total number of regions, quarantine included.
pub const REGION_COUNT: usize = 9;

/// Index of one of the nine fixed regions.
///
/// Regions 0..=7 are "normal" (home-capable, subject to travel and center
/// visits); region 8 is the reserved quarantine region.  A `RegionId` can
/// only be built from a valid index, so every layout lookup on it is total.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionId(u8);

impl RegionId {
    /// The quarantine region (bottom-right grid cell).
    pub const QUARANTINE: RegionId = RegionId(8);

    /// The eight normal regions in index order.
    pub const NORMAL: [RegionId; 8] = [
        RegionId(0),
        RegionId(1),
        RegionId(2),
        RegionId(3),
        RegionId(4),
        RegionId(5),
        RegionId(6),
        RegionId(7),
    ];

    /// Validate a raw index.
    pub fn new(index: usize) -> SpatialResult<Self> {
        if index < REGION_COUNT {
            Ok(RegionId(index as u8))
        } else {
            Err(SpatialError::InvalidRegion(index))
        }
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn is_quarantine(self) -> bool {
        self == Self::QUARANTINE
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_quarantine() {
            write!(f, "Region(quarantine)")
        } else {
            write!(f, "Region({})", self.0)
        }
    }
}

impl TryFrom<usize> for RegionId {
    type Error = SpatialError;
    fn try_from(index: usize) -> SpatialResult<Self> {
        RegionId::new(index)
    }
}

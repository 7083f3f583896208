//! The three orthogonal per-agent state axes.

use ct_core::Point;

/// Epidemiological compartment.  Exactly one at a time.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HealthStatus {
    #[default]
    Healthy,
    Exposed,
    Infected,
    Recovered,
    Dead,
}

impl HealthStatus {
    pub const ALL: [HealthStatus; 5] = [
        HealthStatus::Healthy,
        HealthStatus::Exposed,
        HealthStatus::Infected,
        HealthStatus::Recovered,
        HealthStatus::Dead,
    ];

    /// `true` once an episode has ended, either way.
    #[inline]
    pub fn is_resolved(self) -> bool {
        matches!(self, HealthStatus::Recovered | HealthStatus::Dead)
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HealthStatus::Healthy   => "healthy",
            HealthStatus::Exposed   => "exposed",
            HealthStatus::Infected  => "infected",
            HealthStatus::Recovered => "recovered",
            HealthStatus::Dead      => "dead",
        };
        f.write_str(s)
    }
}

/// How the current infection episode will end.  Drawn once, on the agent's
/// first tick as Infected.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Recovers,
    Dies,
}

/// Which motion rule applies (when the quarantine axis does not override it).
///
/// Countdowns and travel targets live inside the variant that uses them, so
/// they cannot be read in the wrong mode.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MovementMode {
    /// Free Brownian motion within the current region.
    #[default]
    Settled,

    /// Orbiting the center of the current region.
    VisitingCenter { ticks_remaining: u32 },

    /// Heading to another region.  `target` is chosen lazily on the first
    /// travel step.
    TravelingOut { target: Option<Point> },

    /// Free motion inside a region other than home.
    Visiting { ticks_remaining: u32 },

    /// Heading back home.  `target` is chosen lazily on the first travel step.
    TravelingBack { target: Option<Point> },
}

impl MovementMode {
    #[inline]
    pub fn is_traveling(&self) -> bool {
        matches!(self, MovementMode::TravelingOut { .. } | MovementMode::TravelingBack { .. })
    }

    #[inline]
    pub fn is_at_center(&self) -> bool {
        matches!(self, MovementMode::VisitingCenter { .. })
    }
}

/// Quarantine lifecycle.  Independent of `MovementMode`; when it is a transit
/// or confinement variant it overrides every movement rule.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuarantineStatus {
    #[default]
    NotQuarantined,

    /// Eligible for detection; counting down the detection delay.
    PendingDetection,

    /// Straight-line transit to a point inside the quarantine region.
    EnRouteToQuarantine { target: Point },

    /// Confined in the quarantine region; frozen.
    Quarantined,

    /// Straight-line transit from quarantine back to the home region.
    EnRouteHome { target: Point },
}

impl QuarantineStatus {
    /// `true` for the statuses in which the agent belongs to the quarantine
    /// region (transits in either direction included).
    #[inline]
    pub fn in_quarantine_region(&self) -> bool {
        matches!(
            self,
            QuarantineStatus::EnRouteToQuarantine { .. }
                | QuarantineStatus::Quarantined
                | QuarantineStatus::EnRouteHome { .. }
        )
    }

    #[inline]
    pub fn is_in_transit(&self) -> bool {
        matches!(
            self,
            QuarantineStatus::EnRouteToQuarantine { .. } | QuarantineStatus::EnRouteHome { .. }
        )
    }
}

//! Immutable views handed to presentation and output layers.

use ct_agent::{Agent, HealthStatus, StatusCounts};
use ct_core::{AgentId, Point, Tick};
use ct_spatial::RegionId;

/// What a renderer needs to draw one agent.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentView {
    pub id:          AgentId,
    pub position:    Point,
    pub health:      HealthStatus,
    /// In the quarantine region or in transit to or from it.
    pub quarantined: bool,
    /// Assigned region.  Travellers and quarantine transits switch it at the
    /// start of the trip, so it can lead the position.
    pub region:      RegionId,
    pub at_center:   bool,
}

impl From<&Agent> for AgentView {
    fn from(agent: &Agent) -> Self {
        Self {
            id:          agent.id,
            position:    agent.position,
            health:      agent.health,
            quarantined: agent.is_quarantined(),
            region:      agent.current_region,
            at_center:   agent.is_at_center(),
        }
    }
}

/// State of the run after one advance call.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Ticks elapsed since the last restart.
    pub tick: Tick,

    /// Every agent, in id order.
    pub agents: Vec<AgentView>,

    pub counts: StatusCounts,

    /// Current reproduction estimate.
    pub reproduction: f64,

    /// Highest reproduction estimate since the last restart.
    pub max_reproduction: f64,
}

/// One point of the compartment time series.  Appended once per advance call
/// (and once at restart for tick 0).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryRecord {
    pub tick:        Tick,
    pub healthy:     u32,
    pub exposed:     u32,
    pub infected:    u32,
    pub recovered:   u32,
    pub dead:        u32,
    pub quarantined: u32,
}

impl HistoryRecord {
    pub fn new(tick: Tick, counts: &StatusCounts) -> Self {
        Self {
            tick,
            healthy:     counts.get(HealthStatus::Healthy),
            exposed:     counts.get(HealthStatus::Exposed),
            infected:    counts.get(HealthStatus::Infected),
            recovered:   counts.get(HealthStatus::Recovered),
            dead:        counts.get(HealthStatus::Dead),
            quarantined: counts.quarantined,
        }
    }
}

//! Plain data row types written by output backends.

use ct_agent::HealthStatus;
use ct_sim::{AgentView, HistoryRecord, Snapshot};

/// One agent at one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub tick:        u64,
    pub agent_id:    u32,
    pub x:           f64,
    pub y:           f64,
    pub health:      HealthStatus,
    pub quarantined: bool,
    /// Region index, 0..=8 (8 is quarantine).
    pub region:      u8,
    pub at_center:   bool,
}

impl AgentSnapshotRow {
    pub fn new(tick: u64, view: &AgentView) -> Self {
        Self {
            tick,
            agent_id:    view.id.0,
            x:           view.position.x,
            y:           view.position.y,
            health:      view.health,
            quarantined: view.quarantined,
            region:      view.region.index() as u8,
            at_center:   view.at_center,
        }
    }

    /// Rows for every agent of `snapshot`.
    pub fn all(snapshot: &Snapshot) -> Vec<Self> {
        snapshot.agents.iter().map(|v| Self::new(snapshot.tick.0, v)).collect()
    }
}

/// One point of the compartment time series, plus the reproduction estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryRow {
    pub tick:             u64,
    pub healthy:          u32,
    pub exposed:          u32,
    pub infected:         u32,
    pub recovered:        u32,
    pub dead:             u32,
    pub quarantined:      u32,
    pub reproduction:     f64,
    pub max_reproduction: f64,
}

impl HistoryRow {
    pub fn new(snapshot: &Snapshot) -> Self {
        let record = HistoryRecord::new(snapshot.tick, &snapshot.counts);
        Self {
            tick:             record.tick.0,
            healthy:          record.healthy,
            exposed:          record.exposed,
            infected:         record.infected,
            recovered:        record.recovered,
            dead:             record.dead,
            quarantined:      record.quarantined,
            reproduction:     snapshot.reproduction,
            max_reproduction: snapshot.max_reproduction,
        }
    }
}

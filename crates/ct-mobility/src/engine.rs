//! Mobility engine: quarantine lifecycle plus motion for one agent at a time.

use log::{debug, trace};

use ct_agent::Agent;
use ct_core::{SimConfig, SimRng};

use crate::{MotionBranch, QuarantineEvent, step_motion, step_quarantine};

/// Running counters over the lifetime of a run.  Reset on restart.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct MobilityStats {
    /// Agents sent to quarantine.
    pub detections: u64,

    /// Agents released from quarantine.
    pub releases: u64,

    /// Inter-region trips started.
    pub trips: u64,

    /// Center visits started.
    pub center_visits: u64,
}

/// Drives per-agent mobility for the simulation loop.
///
/// Holds no per-agent state of its own; everything lives on [`Agent`].  The
/// driver calls [`step_agent`][Self::step_agent] once per agent per tick in
/// ascending id order.
#[derive(Default, Debug)]
pub struct MobilityEngine {
    stats: MobilityStats,
}

impl MobilityEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the quarantine lifecycle, then motion, for `agent`.
    pub fn step_agent(&mut self, agent: &mut Agent, config: &SimConfig, rng: &mut SimRng) -> MotionBranch {
        match step_quarantine(agent, config, rng) {
            Some(QuarantineEvent::Detected) => self.stats.detections += 1,
            Some(QuarantineEvent::Released) => self.stats.releases += 1,
            None => {}
        }

        let was_traveling = agent.movement.is_traveling();
        let branch = step_motion(agent, rng);
        match branch {
            MotionBranch::CenterEntry => self.stats.center_visits += 1,
            MotionBranch::Free if !was_traveling && agent.movement.is_traveling() => {
                self.stats.trips += 1;
                trace!("{} leaving {} for {}", agent.id, agent.home_region, agent.current_region);
            }
            _ => {}
        }
        branch
    }

    pub fn stats(&self) -> MobilityStats {
        self.stats
    }

    pub fn reset(&mut self) {
        debug!("mobility stats reset after {:?}", self.stats);
        self.stats = MobilityStats::default();
    }
}

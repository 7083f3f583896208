//! The `Agent` record.

use ct_core::{AgentId, Point};
use ct_spatial::{Locatable, RegionId};

use crate::{HealthStatus, MovementMode, Outcome, QuarantineStatus};

/// One simulated individual.
///
/// Agents are stored in a `Vec<Agent>` owned by [`AgentStore`][crate::AgentStore];
/// `id` equals the agent's index in that vector.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub id: AgentId,

    pub position: Point,

    /// Per-tick displacement under free motion.  Zero while confined or at a
    /// region center.
    pub velocity: Point,

    pub health: HealthStatus,

    /// Ticks since entering `health`.  Reset only through [`Agent::set_health`].
    pub time_in_status: u32,

    /// `None` until the first tick of an Infected episode.
    pub outcome: Option<Outcome>,

    /// Region the agent returns to.  Never changes after creation.
    pub home_region: RegionId,

    pub current_region: RegionId,

    pub movement: MovementMode,

    pub quarantine: QuarantineStatus,

    /// `None` until drawn on the first Infected tick with quarantine enabled.
    pub quarantine_eligible: Option<bool>,

    /// Detection-delay counter; meaningful only while quarantine tracking is
    /// active for this agent.
    pub ticks_since_infected: u32,

    /// Secondary infections caused during the current Infected episode.
    pub infection_count: Option<u32>,
}

impl Agent {
    /// A Healthy, Settled agent at `position` in its home region.
    pub fn new(id: AgentId, home_region: RegionId, position: Point, velocity: Point) -> Self {
        Self {
            id,
            position,
            velocity,
            health: HealthStatus::Healthy,
            time_in_status: 0,
            outcome: None,
            home_region,
            current_region: home_region,
            movement: MovementMode::Settled,
            quarantine: QuarantineStatus::NotQuarantined,
            quarantine_eligible: None,
            ticks_since_infected: 0,
            infection_count: None,
        }
    }

    /// Switch health status and restart the status timer.
    ///
    /// Per-episode bookkeeping follows the new status:
    /// - `Exposed` clears the death outcome so the next episode redraws it.
    /// - `Infected` opens a fresh secondary-infection count and clears both
    ///   per-episode draws.
    /// - `Recovered` / `Dead` close the secondary-infection count.
    pub fn set_health(&mut self, health: HealthStatus) {
        self.health = health;
        self.time_in_status = 0;
        match health {
            HealthStatus::Healthy => {}
            HealthStatus::Exposed => {
                self.outcome = None;
            }
            HealthStatus::Infected => {
                self.outcome = None;
                self.infection_count = Some(0);
                self.quarantine_eligible = None;
                self.ticks_since_infected = 0;
            }
            HealthStatus::Recovered | HealthStatus::Dead => {
                self.infection_count = None;
            }
        }
    }

    /// Drop every quarantine, visit, travel, and center flag and return to
    /// free motion bookkeeping (velocity is left to the caller).
    pub fn clear_quarantine_bookkeeping(&mut self) {
        self.quarantine = QuarantineStatus::NotQuarantined;
        self.quarantine_eligible = None;
        self.ticks_since_infected = 0;
        self.movement = MovementMode::Settled;
    }

    /// Can transmit this tick: Infected and not removed by quarantine.
    #[inline]
    pub fn is_contagious(&self) -> bool {
        self.health == HealthStatus::Infected
            && matches!(
                self.quarantine,
                QuarantineStatus::NotQuarantined | QuarantineStatus::PendingDetection
            )
    }

    /// Shown as quarantined: in the quarantine region or in transit to/from it.
    #[inline]
    pub fn is_quarantined(&self) -> bool {
        self.quarantine.in_quarantine_region()
    }

    #[inline]
    pub fn is_at_center(&self) -> bool {
        self.movement.is_at_center()
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.health == HealthStatus::Dead
    }
}

impl Locatable for Agent {
    #[inline]
    fn position(&self) -> Point {
        self.position
    }

    #[inline]
    fn region(&self) -> RegionId {
        self.current_region
    }

    /// Dead agents take no part in contact.
    #[inline]
    fn is_indexed(&self) -> bool {
        !self.is_dead()
    }
}

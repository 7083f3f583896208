//! Quarantine lifecycle: detection, transit start, and release.
//!
//! Runs once per agent per tick, before motion.  It only ever starts a
//! transit; the transit itself and its arrival are motion (see
//! [`crate::motion`]).

use log::debug;

use ct_agent::{Agent, HealthStatus, QuarantineStatus};
use ct_core::{Point, SimConfig, SimRng};
use ct_spatial::{RegionBounds, RegionId};

use crate::params::{DETECTION_DELAY_TICKS, QUARANTINE_TARGET_MARGIN, TRAVEL_TARGET_JITTER};

/// A quarantine transit that started this tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum QuarantineEvent {
    /// Detected; now en route to the quarantine region.
    Detected,
    /// Episode over while confined or inbound; now en route home.
    Released,
}

/// Advance `agent`'s quarantine status by one tick.
///
/// - A confined or inbound agent whose episode has ended (Recovered or Dead)
///   is turned around toward its home region.  Release does not depend on
///   `quarantine_enabled`, so switching quarantine off never strands anyone.
/// - With quarantine enabled, an Infected agent takes its per-episode
///   eligibility draw on its first tick; an eligible agent outside the
///   quarantine region counts up to [`DETECTION_DELAY_TICKS`] and is then
///   sent to quarantine.
/// - A confined Infected agent keeps counting `ticks_since_infected`.
pub fn step_quarantine(
    agent:  &mut Agent,
    config: &SimConfig,
    rng:    &mut SimRng,
) -> Option<QuarantineEvent> {
    if agent.health.is_resolved() {
        match agent.quarantine {
            QuarantineStatus::Quarantined | QuarantineStatus::EnRouteToQuarantine { .. } => {
                begin_release(agent, rng);
                return Some(QuarantineEvent::Released);
            }
            QuarantineStatus::PendingDetection => {
                agent.quarantine = QuarantineStatus::NotQuarantined;
                agent.ticks_since_infected = 0;
            }
            _ => {}
        }
        return None;
    }

    if !config.quarantine_enabled || agent.health != HealthStatus::Infected {
        return None;
    }

    let eligible = *agent
        .quarantine_eligible
        .get_or_insert_with(|| rng.gen_bool(config.detection_probability()));

    match agent.quarantine {
        QuarantineStatus::NotQuarantined | QuarantineStatus::PendingDetection
            if eligible && !agent.current_region.is_quarantine() =>
        {
            agent.quarantine = QuarantineStatus::PendingDetection;
            agent.ticks_since_infected += 1;
            if agent.ticks_since_infected >= DETECTION_DELAY_TICKS {
                begin_detention(agent, rng);
                return Some(QuarantineEvent::Detected);
            }
        }
        QuarantineStatus::Quarantined => {
            agent.ticks_since_infected += 1;
        }
        _ => {}
    }
    None
}

/// Start transit to a random point inside the quarantine region.
///
/// The agent belongs to the quarantine region from this moment on; its
/// physical position catches up during the transit.
fn begin_detention(agent: &mut Agent, rng: &mut SimRng) {
    let target = RegionBounds::of(RegionId::QUARANTINE).random_point(rng, QUARANTINE_TARGET_MARGIN);
    agent.quarantine = QuarantineStatus::EnRouteToQuarantine { target };
    agent.current_region = RegionId::QUARANTINE;
    agent.movement = ct_agent::MovementMode::Settled;
    agent.velocity = Point::ORIGIN;
    debug!("{} detected after {} ticks, heading to quarantine", agent.id, agent.ticks_since_infected);
}

/// Start transit from quarantine to a point near the home region center.
fn begin_release(agent: &mut Agent, rng: &mut SimRng) {
    let target = RegionBounds::of(agent.home_region).random_point_near_center(rng, TRAVEL_TARGET_JITTER);
    agent.quarantine = QuarantineStatus::EnRouteHome { target };
    debug!("{} released from quarantine ({})", agent.id, agent.health);
}

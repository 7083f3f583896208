//! Health-status timers.
//!
//! Two entry points, called from different phases of a tick:
//!
//! - [`step_health`] runs in the per-agent pass before motion.  It ages every
//!   agent that is not Exposed and resolves Infected episodes.
//! - [`step_incubation`] runs after the transmission pass and ages Exposed
//!   agents, promoting them to Infected once incubation is over.
//!
//! Agents exposed during the current tick are skipped by the driver, so an
//! agent's `time_in_status` is 0 at the end of the tick in which it changed
//! status and grows by exactly one per tick afterwards.

use ct_agent::{Agent, HealthStatus, Outcome};
use ct_core::{SimConfig, SimRng};

/// Age `agent` by one tick and resolve its infection if due.
///
/// On the first tick of an Infected episode the outcome is drawn against
/// `config.death_rate`; it is never redrawn during that episode.  An agent
/// destined to die does so once `time_in_status` exceeds half of
/// `recovery_ticks`; otherwise it recovers once `time_in_status` exceeds
/// `recovery_ticks`.
///
/// Returns the new status when a transition happened.  Exposed agents are
/// left untouched.
pub fn step_health(agent: &mut Agent, config: &SimConfig, rng: &mut SimRng) -> Option<HealthStatus> {
    if agent.health == HealthStatus::Exposed {
        return None;
    }
    agent.time_in_status += 1;

    if agent.health != HealthStatus::Infected {
        return None;
    }

    let outcome = *agent.outcome.get_or_insert_with(|| {
        if rng.gen_bool(config.death_rate) { Outcome::Dies } else { Outcome::Recovers }
    });

    let elapsed = agent.time_in_status as f64;
    let next = match outcome {
        Outcome::Dies if elapsed > config.recovery_ticks as f64 * 0.5 => HealthStatus::Dead,
        Outcome::Recovers if elapsed > config.recovery_ticks as f64 => HealthStatus::Recovered,
        _ => return None,
    };
    agent.set_health(next);
    Some(next)
}

/// Age an Exposed agent by one tick; returns `true` if it became Infected.
///
/// Becoming Infected clears the per-episode draws (outcome and quarantine
/// eligibility) so the new episode takes fresh ones.
pub fn step_incubation(agent: &mut Agent, config: &SimConfig) -> bool {
    if agent.health != HealthStatus::Exposed {
        return false;
    }
    agent.time_in_status += 1;
    if agent.time_in_status > config.incubation_ticks {
        agent.set_health(HealthStatus::Infected);
        true
    } else {
        false
    }
}

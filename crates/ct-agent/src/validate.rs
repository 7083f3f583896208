//! The cross-product invariant over health × movement × quarantine.
//!
//! Every legality rule about combined agent state lives in [`check_agent`].
//! The simulation driver calls it after each tick (in debug builds, or when
//! explicitly enabled) and tests call it directly.

use crate::{Agent, AgentError, AgentResult, HealthStatus, MovementMode, QuarantineStatus};

/// Check that `agent` is in a legal combined state.
///
/// | Health              | Allowed quarantine statuses                       |
/// |---------------------|---------------------------------------------------|
/// | Healthy, Exposed    | NotQuarantined                                    |
/// | Infected            | any                                               |
/// | Recovered, Dead     | any except PendingDetection                       |
///
/// Additionally:
/// - `current_region` is the quarantine region iff the quarantine status is
///   EnRouteToQuarantine, Quarantined or EnRouteHome;
/// - the home region is a normal region;
/// - during quarantine transit or confinement the movement mode is Settled;
/// - the secondary-infection count exists only while Infected;
/// - the death outcome is undecided while Healthy or Exposed.
pub fn check_agent(agent: &Agent) -> AgentResult<()> {
    let fail = |reason: &'static str| Err(AgentError::InvariantViolation { agent: agent.id, reason });

    let q = agent.quarantine;
    match agent.health {
        HealthStatus::Healthy | HealthStatus::Exposed => {
            if q != QuarantineStatus::NotQuarantined {
                return fail("healthy or exposed agent has a quarantine status");
            }
        }
        HealthStatus::Infected => {}
        HealthStatus::Recovered | HealthStatus::Dead => {
            if q == QuarantineStatus::PendingDetection {
                return fail("resolved agent is still pending detection");
            }
        }
    }

    if agent.current_region.is_quarantine() != q.in_quarantine_region() {
        return fail("current region disagrees with quarantine status");
    }

    if agent.home_region.is_quarantine() {
        return fail("home region is the quarantine region");
    }

    if q.in_quarantine_region() && agent.movement != MovementMode::Settled {
        return fail("quarantined agent has an active movement mode");
    }

    if agent.infection_count.is_some() && agent.health != HealthStatus::Infected {
        return fail("secondary-infection count outside an Infected episode");
    }

    if agent.outcome.is_some()
        && matches!(agent.health, HealthStatus::Healthy | HealthStatus::Exposed)
    {
        return fail("death outcome decided before infection");
    }

    Ok(())
}

//! The prioritized per-tick motion rules.

use ct_agent::{Agent, MovementMode, QuarantineStatus, random_velocity};
use ct_core::{Point, SimRng};
use ct_spatial::layout::CENTER_RADIUS;
use ct_spatial::{RegionBounds, RegionId};

use crate::params::*;

/// Which motion rule an agent ran this tick.  Exactly one per agent per tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MotionBranch {
    /// Straight-line quarantine transit (either direction).
    Transit,
    /// Confined in quarantine.
    Confined,
    /// Dead outside any transit.
    Frozen,
    /// Straight-line inter-region travel.
    Travel,
    /// Teleported into the region center this tick.
    CenterEntry,
    /// Orbiting the region center.
    CenterOrbit,
    /// Brownian motion (Settled or Visiting).
    Free,
}

/// Move `agent` by one tick according to its current state.
pub fn step_motion(agent: &mut Agent, rng: &mut SimRng) -> MotionBranch {
    match agent.quarantine {
        QuarantineStatus::EnRouteToQuarantine { target } => {
            if transit_toward(agent, target, QUARANTINE_TRANSIT_STEP) {
                agent.quarantine = QuarantineStatus::Quarantined;
                agent.current_region = RegionId::QUARANTINE;
                agent.velocity = Point::ORIGIN;
            }
            return MotionBranch::Transit;
        }
        QuarantineStatus::EnRouteHome { target } => {
            if transit_toward(agent, target, QUARANTINE_TRANSIT_STEP) {
                agent.clear_quarantine_bookkeeping();
                agent.current_region = agent.home_region;
                agent.velocity = if agent.is_dead() { Point::ORIGIN } else { random_velocity(rng) };
            }
            return MotionBranch::Transit;
        }
        QuarantineStatus::Quarantined => return MotionBranch::Confined,
        QuarantineStatus::NotQuarantined | QuarantineStatus::PendingDetection => {}
    }

    if agent.is_dead() {
        if agent.movement.is_traveling() {
            settle_where_fallen(agent);
        }
        return MotionBranch::Frozen;
    }

    if agent.movement.is_traveling() {
        travel(agent, rng);
        return MotionBranch::Travel;
    }

    let bounds = RegionBounds::of(agent.current_region);
    contain(agent, &bounds);

    match agent.movement {
        MovementMode::VisitingCenter { ticks_remaining } => {
            orbit_center(agent, &bounds, ticks_remaining, rng);
            MotionBranch::CenterOrbit
        }
        MovementMode::Settled => {
            if !agent.current_region.is_quarantine() && rng.gen_bool(CENTER_VISIT_PROBABILITY) {
                enter_center(agent, &bounds, rng);
                return MotionBranch::CenterEntry;
            }
            brownian(agent, &bounds, rng);
            maybe_start_travel(agent, rng);
            MotionBranch::Free
        }
        MovementMode::Visiting { ticks_remaining } => {
            brownian(agent, &bounds, rng);
            if ticks_remaining <= 1 {
                agent.movement = MovementMode::TravelingBack { target: None };
                agent.current_region = agent.home_region;
            } else {
                agent.movement = MovementMode::Visiting { ticks_remaining: ticks_remaining - 1 };
            }
            MotionBranch::Free
        }
        // Travelling agents returned above.
        MovementMode::TravelingOut { .. } | MovementMode::TravelingBack { .. } => MotionBranch::Travel,
    }
}

// ── Straight-line movement ────────────────────────────────────────────────────

/// Step toward `target`; returns `true` (and snaps onto it) on arrival.
fn transit_toward(agent: &mut Agent, target: Point, step: f64) -> bool {
    agent.position = agent.position.step_toward(target, step);
    if agent.position.distance_sq(target) < ARRIVAL_EPSILON * ARRIVAL_EPSILON {
        agent.position = target;
        true
    } else {
        false
    }
}

/// One step of inter-region travel.  `current_region` already names the
/// destination in both directions.
fn travel(agent: &mut Agent, rng: &mut SimRng) {
    let destination = RegionBounds::of(agent.current_region);
    let (outbound, target) = match agent.movement {
        MovementMode::TravelingOut { target } => (true, target),
        MovementMode::TravelingBack { target } => (false, target),
        _ => return,
    };
    let target =
        target.unwrap_or_else(|| destination.random_point_near_center(rng, TRAVEL_TARGET_JITTER));

    if transit_toward(agent, target, TRAVEL_STEP) {
        agent.velocity = random_velocity(rng);
        agent.movement = if outbound {
            MovementMode::Visiting { ticks_remaining: rng.gen_range(VISIT_TICKS) }
        } else {
            MovementMode::Settled
        };
    } else {
        agent.movement = if outbound {
            MovementMode::TravelingOut { target: Some(target) }
        } else {
            MovementMode::TravelingBack { target: Some(target) }
        };
    }
}

/// A traveller who dies mid-trip stays where it fell and belongs to the
/// normal region nearest that spot, not to the trip's destination.
fn settle_where_fallen(agent: &mut Agent) {
    let fallen = agent.position;
    if let Some(&nearest) = RegionId::NORMAL.iter().min_by(|a, b| {
        let da = RegionBounds::of(**a).center().distance_sq(fallen);
        let db = RegionBounds::of(**b).center().distance_sq(fallen);
        da.total_cmp(&db)
    }) {
        agent.current_region = nearest;
    }
    agent.movement = MovementMode::Settled;
    agent.velocity = Point::ORIGIN;
}

// ── Region containment ───────────────────────────────────────────────────────

/// Clamp into the region rectangle, reflecting velocity off any crossed edge.
pub(crate) fn contain(agent: &mut Agent, bounds: &RegionBounds) {
    let (p, v) = (&mut agent.position, &mut agent.velocity);
    if p.x < bounds.min_x {
        p.x = bounds.min_x;
        v.x = v.x.abs().max(MIN_BOUNCE_SPEED);
    } else if p.x > bounds.max_x {
        p.x = bounds.max_x;
        v.x = -v.x.abs().max(MIN_BOUNCE_SPEED);
    }
    if p.y < bounds.min_y {
        p.y = bounds.min_y;
        v.y = v.y.abs().max(MIN_BOUNCE_SPEED);
    } else if p.y > bounds.max_y {
        p.y = bounds.max_y;
        v.y = -v.y.abs().max(MIN_BOUNCE_SPEED);
    }
}

// ── Center visits ─────────────────────────────────────────────────────────────

fn enter_center(agent: &mut Agent, bounds: &RegionBounds, rng: &mut SimRng) {
    agent.position = bounds.random_point_in_center(rng);
    agent.velocity = Point::ORIGIN;
    agent.movement = MovementMode::VisitingCenter { ticks_remaining: rng.gen_range(CENTER_VISIT_TICKS) };
}

fn orbit_center(agent: &mut Agent, bounds: &RegionBounds, ticks_remaining: u32, rng: &mut SimRng) {
    let theta = rng.angle();
    let mut p = Point::new(
        agent.position.x + CENTER_ORBIT_STEP * theta.cos(),
        agent.position.y + CENTER_ORBIT_STEP * theta.sin(),
    );
    let center = bounds.center();
    let dist = p.distance(center);
    if dist > CENTER_RADIUS {
        let f = CENTER_RADIUS / dist;
        p = Point::new(center.x + (p.x - center.x) * f, center.y + (p.y - center.y) * f);
    }
    agent.position = p;

    if ticks_remaining <= 1 {
        agent.movement = MovementMode::Settled;
        agent.position = bounds.clamp(agent.position);
        agent.velocity = random_velocity(rng);
    } else {
        agent.movement = MovementMode::VisitingCenter { ticks_remaining: ticks_remaining - 1 };
    }
}

// ── Free motion ───────────────────────────────────────────────────────────────

pub(crate) fn brownian(agent: &mut Agent, bounds: &RegionBounds, rng: &mut SimRng) {
    let v = &mut agent.velocity;
    v.x += rng.gen_range(-BROWNIAN_JITTER..=BROWNIAN_JITTER);
    v.y += rng.gen_range(-BROWNIAN_JITTER..=BROWNIAN_JITTER);
    let speed = (v.x * v.x + v.y * v.y).sqrt();
    if speed > MAX_SPEED {
        v.x *= MAX_SPEED / speed;
        v.y *= MAX_SPEED / speed;
    }

    let p = &mut agent.position;
    p.x += v.x;
    p.y += v.y;

    // Turn outward velocity around near an edge so agents do not pin
    // themselves against the clamp.
    if (p.x < bounds.min_x + EDGE_MARGIN && v.x < 0.0) || (p.x > bounds.max_x - EDGE_MARGIN && v.x > 0.0) {
        v.x = -v.x;
    }
    if (p.y < bounds.min_y + EDGE_MARGIN && v.y < 0.0) || (p.y > bounds.max_y - EDGE_MARGIN && v.y > 0.0) {
        v.y = -v.y;
    }
    *p = bounds.clamp(*p);
}

/// Settled agents at home occasionally leave for a uniformly random other
/// normal region.  The region switch is immediate; the straight-line travel
/// catches the position up over the following ticks.
fn maybe_start_travel(agent: &mut Agent, rng: &mut SimRng) {
    if agent.current_region.is_quarantine()
        || agent.current_region != agent.home_region
        || !rng.gen_bool(TRAVEL_PROBABILITY)
    {
        return;
    }
    let others: Vec<RegionId> =
        RegionId::NORMAL.iter().copied().filter(|&r| r != agent.current_region).collect();
    if let Some(&destination) = rng.choose(&others) {
        agent.current_region = destination;
        agent.movement = MovementMode::TravelingOut { target: None };
    }
}

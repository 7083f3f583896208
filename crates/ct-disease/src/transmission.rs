//! Contact-based transmission.
//!
//! # Algorithm
//!
//! For each of the eight normal regions (the quarantine region never takes
//! part):
//!
//! 1. Build a [`GridIndex`] of the living agents currently assigned to the
//!    region, with cell size `infection_radius + CELL_MARGIN`.
//! 2. For every contagious agent in the region, in ascending id order, walk
//!    the candidate cells around it and consider each Healthy candidate not
//!    already exposed this tick:
//!    - both or neither of the pair must be at the region center;
//!    - the squared distance must be strictly below the squared radius;
//!    - one draw against `infection_probability / INFECTION_DAMPENING`.
//! 3. A successful draw is recorded as an [`Exposure`].
//!
//! The pass only reads agents.  [`apply_exposures`] commits the result.

use log::trace;
use rustc_hash::FxHashSet;

use ct_agent::{Agent, HealthStatus};
use ct_core::{AgentId, SimConfig, SimRng, Tick};
use ct_spatial::{GridIndex, RegionId};

use crate::params::{CELL_MARGIN, INFECTION_DAMPENING};
use crate::InfectionEvent;

/// One successful transmission found by the pass.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Exposure {
    pub source: AgentId,
    pub target: AgentId,
}

/// Running counters over the lifetime of a run.  Reset on restart.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct TransmissionStats {
    /// Pairs that passed the center and distance checks and were drawn.
    pub contacts: u64,

    /// Draws that succeeded.
    pub exposures: u64,
}

/// Per-tick transmission pass.
///
/// Keeps a scratch set of agents exposed during the current pass so that an
/// agent can be infected at most once per tick, plus lifetime counters.
#[derive(Default, Debug)]
pub struct TransmissionEngine {
    exposed: FxHashSet<AgentId>,
    stats:   TransmissionStats,
}

impl TransmissionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find this tick's exposures.  Draw order is fixed (region, then source
    /// id, then bucket order), so a seeded `rng` gives reproducible results.
    pub fn find_exposures(&mut self, agents: &[Agent], config: &SimConfig, rng: &mut SimRng) -> Vec<Exposure> {
        self.exposed.clear();

        let radius = config.infection_radius;
        let radius_sq = radius * radius;
        let cell_size = radius + CELL_MARGIN;
        let p = config.infection_probability / INFECTION_DAMPENING;

        let mut found = Vec::new();
        for region in RegionId::NORMAL {
            let index = GridIndex::build(agents, cell_size, Some(region));
            if index.is_empty() {
                continue;
            }

            let sources = agents.iter().filter(|a| a.current_region == region && a.is_contagious());
            for source in sources {
                for id in index.candidates(region, source.position, radius) {
                    let target = &agents[id.index()];
                    if target.health != HealthStatus::Healthy || self.exposed.contains(&id) {
                        continue;
                    }
                    if source.is_at_center() != target.is_at_center() {
                        continue;
                    }
                    if source.position.distance_sq(target.position) >= radius_sq {
                        continue;
                    }

                    self.stats.contacts += 1;
                    if rng.gen_bool(p) {
                        self.exposed.insert(id);
                        found.push(Exposure { source: source.id, target: id });
                    }
                }
            }
        }

        self.stats.exposures += found.len() as u64;
        if !found.is_empty() {
            trace!("{} new exposures", found.len());
        }
        found
    }

    pub fn stats(&self) -> TransmissionStats {
        self.stats
    }

    pub fn reset(&mut self) {
        self.exposed.clear();
        self.stats = TransmissionStats::default();
    }
}

/// Commit `exposures` found at tick `now`.
///
/// Each target becomes Exposed with its status timer at zero, and each
/// source's secondary-infection count goes up by one.  Returns the matching
/// infection events for the reproduction estimator.
pub fn apply_exposures(agents: &mut [Agent], exposures: &[Exposure], now: Tick) -> Vec<InfectionEvent> {
    exposures
        .iter()
        .map(|e| {
            agents[e.target.index()].set_health(HealthStatus::Exposed);
            let count = agents[e.source.index()].infection_count.get_or_insert(0);
            *count += 1;
            InfectionEvent { source: e.source, target: e.target, tick: now }
        })
        .collect()
}

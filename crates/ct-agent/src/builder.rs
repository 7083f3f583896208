//! Seeded construction of a fresh population from `SimConfig`.
//!
//! # Usage
//!
//! ```rust
//! use ct_agent::PopulationBuilder;
//! use ct_core::{SimConfig, SimRng};
//!
//! let config = SimConfig::default();
//! let mut rng = SimRng::new(config.seed);
//! let store = PopulationBuilder::new(&config).build(&mut rng).unwrap();
//!
//! assert_eq!(store.count(), config.population as usize);
//! assert_eq!(store.tally().infected, config.initial_infected);
//! ```

use log::debug;

use ct_core::{AgentId, Point, SimConfig, SimRng};
use ct_spatial::{RegionBounds, RegionId};

use crate::{Agent, AgentResult, AgentStore, HealthStatus};

/// Speed range (length units per tick) of freshly randomized velocities.
pub const SPEED_RANGE: std::ops::RangeInclusive<f64> = 0.5..=1.5;

/// Minimum distance from the region edge at which agents are spawned.
pub const SPAWN_MARGIN: f64 = 5.0;

/// A velocity with uniformly random heading and speed in [`SPEED_RANGE`].
pub fn random_velocity(rng: &mut SimRng) -> Point {
    let theta = rng.angle();
    let speed = rng.gen_range(SPEED_RANGE);
    Point::new(speed * theta.cos(), speed * theta.sin())
}

/// Builds the initial population of a run.
///
/// Homes are dealt round-robin over the eight normal regions, so every
/// region starts with `population / 8` agents (±1).  Each agent spawns at a
/// random point of its home region with a random velocity.  Then
/// `initial_infected` distinct agents, chosen uniformly, start Infected.
///
/// All randomness comes from the `SimRng` passed to [`build`](Self::build),
/// so the same seed always yields the same population.
pub struct PopulationBuilder<'a> {
    config: &'a SimConfig,
}

impl<'a> PopulationBuilder<'a> {
    pub fn new(config: &'a SimConfig) -> Self {
        Self { config }
    }

    /// Validate the configuration and construct the population.
    pub fn build(self, rng: &mut SimRng) -> AgentResult<AgentStore> {
        self.config.validate()?;

        let count = self.config.population as usize;
        let mut agents: Vec<Agent> = (0..count)
            .map(|i| {
                let home = RegionId::NORMAL[i % RegionId::NORMAL.len()];
                let position = RegionBounds::of(home).random_point(rng, SPAWN_MARGIN);
                let velocity = random_velocity(rng);
                Agent::new(AgentId(i as u32), home, position, velocity)
            })
            .collect();

        let mut ids: Vec<usize> = (0..count).collect();
        rng.shuffle(&mut ids);
        for &i in ids.iter().take(self.config.initial_infected as usize) {
            agents[i].set_health(HealthStatus::Infected);
        }

        debug!(
            "built population of {} agents ({} initially infected)",
            count, self.config.initial_infected
        );
        Ok(AgentStore::from_agents(agents))
    }
}

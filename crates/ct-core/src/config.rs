//! Simulation configuration and its range validation.
//!
//! `SimConfig` is supplied by the caller (control panel, CLI, JSON file) and
//! read by the engine once per tick.  The engine never clamps a bad value:
//! [`SimConfig::validate`] reports it and the driver refuses to run.

use crate::{CoreError, CoreResult};

/// Documented input ranges.  Inclusive on both ends.
pub mod ranges {
    pub const POPULATION:               (u32, u32) = (8, 5_000);
    pub const INITIAL_INFECTED:         (u32, u32) = (1, 20);
    pub const INCUBATION_TICKS:         (u32, u32) = (10, 100);
    pub const INFECTION_RADIUS:         (f64, f64) = (5.0, 40.0);
    pub const INFECTION_PROBABILITY:    (f64, f64) = (0.0, 1.0);
    pub const RECOVERY_TICKS:           (u32, u32) = (100, 300);
    pub const DEATH_RATE:               (f64, f64) = (0.0, 1.0);
    pub const QUARANTINE_EFFECTIVENESS: (f64, f64) = (0.0, 100.0);
    pub const SPEED:                    (u32, u32) = (1, 10);
}

/// Top-level simulation configuration.
///
/// Changing any field between advance calls is legal and takes effect on the
/// next tick.  Per-episode draws already taken (death outcome, quarantine
/// eligibility) are not revisited.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// Number of agents.  Fixed for the lifetime of a run.
    pub population: u32,

    /// Agents that start the run Infected.
    pub initial_infected: u32,

    /// Ticks an Exposed agent waits before becoming Infected.
    pub incubation_ticks: u32,

    /// Contact distance in canvas length units.
    pub infection_radius: f64,

    /// Per-contact infection probability as shown on the control (before
    /// dampening; see `ct_disease::INFECTION_DAMPENING`).
    pub infection_probability: f64,

    /// Ticks an Infected agent takes to recover.  Agents destined to die do
    /// so after half of this.
    pub recovery_ticks: u32,

    /// Probability that an infection episode ends in death.
    pub death_rate: f64,

    /// Whether detected Infected agents are moved to the quarantine region.
    pub quarantine_enabled: bool,

    /// Percentage (0–100) of infection episodes that are ever detected.
    pub quarantine_effectiveness: f64,

    /// Ticks per `Sim::step` call.
    pub speed: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed:                     42,
            population:               400,
            initial_infected:         5,
            incubation_ticks:         30,
            infection_radius:         15.0,
            infection_probability:    0.5,
            recovery_ticks:           200,
            death_rate:               0.05,
            quarantine_enabled:       false,
            quarantine_effectiveness: 80.0,
            speed:                    1,
        }
    }
}

impl SimConfig {
    /// Check every field against its documented range.
    ///
    /// Returns the first offending field.
    pub fn validate(&self) -> CoreResult<()> {
        check_int("population", self.population, ranges::POPULATION)?;
        check_int("initial_infected", self.initial_infected, ranges::INITIAL_INFECTED)?;
        check_int("incubation_ticks", self.incubation_ticks, ranges::INCUBATION_TICKS)?;
        check_float("infection_radius", self.infection_radius, ranges::INFECTION_RADIUS)?;
        check_float(
            "infection_probability",
            self.infection_probability,
            ranges::INFECTION_PROBABILITY,
        )?;
        check_int("recovery_ticks", self.recovery_ticks, ranges::RECOVERY_TICKS)?;
        check_float("death_rate", self.death_rate, ranges::DEATH_RATE)?;
        check_float(
            "quarantine_effectiveness",
            self.quarantine_effectiveness,
            ranges::QUARANTINE_EFFECTIVENESS,
        )?;
        check_int("speed", self.speed, ranges::SPEED)?;

        if self.initial_infected > self.population {
            return Err(CoreError::TooManyInitialInfected {
                initial:    self.initial_infected,
                population: self.population,
            });
        }
        Ok(())
    }

    /// Quarantine effectiveness as a probability in `[0, 1]`.
    #[inline]
    pub fn detection_probability(&self) -> f64 {
        self.quarantine_effectiveness / 100.0
    }
}

fn check_int(field: &'static str, value: u32, (min, max): (u32, u32)) -> CoreResult<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(CoreError::ConfigOutOfRange {
            field,
            value: value as f64,
            min:   min as f64,
            max:   max as f64,
        })
    }
}

fn check_float(field: &'static str, value: f64, (min, max): (f64, f64)) -> CoreResult<()> {
    if value.is_nan() {
        return Err(CoreError::ConfigNotANumber(field));
    }
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(CoreError::ConfigOutOfRange { field, value, min, max })
    }
}

//! `ct-disease` — how the contagion spreads and runs its course.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                  |
//! |------------------|-----------------------------------------------------------|
//! | [`params`]       | Named epidemiological constants                           |
//! | [`progression`]  | Incubation, recovery and death timers (`step_health`, `step_incubation`) |
//! | [`transmission`] | `TransmissionEngine` — per-region contact search, `Exposure` |
//! | [`reproduction`] | `ReproductionEstimator`, `InfectionEvent`                 |
//!
//! # Read / write split
//!
//! The transmission pass only reads the population: it returns a list of
//! [`Exposure`]s which the driver then commits with [`apply_exposures`].  The
//! progression functions take one `&mut Agent` at a time and are called from
//! the driver's sequential per-agent pass.

pub mod params;
pub mod progression;
pub mod reproduction;
pub mod transmission;

#[cfg(test)]
mod tests;

pub use params::{CELL_MARGIN, INFECTION_DAMPENING, REPRODUCTION_WINDOW_TICKS};
pub use progression::{step_health, step_incubation};
pub use reproduction::{InfectionEvent, ReproductionEstimator};
pub use transmission::{Exposure, TransmissionEngine, TransmissionStats, apply_exposures};

//! Simulation observer trait for progress reporting and data collection.

use ct_core::{SimConfig, Tick};

use crate::Snapshot;

/// Callbacks invoked by [`Sim::advance_observed`][crate::Sim::advance_observed]
/// and [`Sim::restart_observed`][crate::Sim::restart_observed].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — exposure counter
///
/// ```rust
/// use ct_core::Tick;
/// use ct_sim::SimObserver;
///
/// #[derive(Default)]
/// struct ExposureCounter { total: usize }
///
/// impl SimObserver for ExposureCounter {
///     fn on_tick_end(&mut self, _tick: Tick, new_exposures: usize) {
///         self.total += new_exposures;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with the number of agents that became
    /// Exposed during it.
    fn on_tick_end(&mut self, _tick: Tick, _new_exposures: usize) {}

    /// Called once per advance call, after its last tick, with the snapshot
    /// the call returns.
    fn on_snapshot(&mut self, _snapshot: &Snapshot) {}

    /// Called after a restart has rebuilt the population.
    fn on_restart(&mut self, _config: &SimConfig) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

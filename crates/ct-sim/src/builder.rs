//! Fluent builder for constructing a [`Sim`].

use ct_core::SimConfig;

use crate::{Sim, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method                     | Default                                   |
/// |----------------------------|-------------------------------------------|
/// | `.observe_invariants(b)`   | on in debug builds, off in release builds |
///
/// # Example
///
/// ```rust
/// use ct_core::SimConfig;
/// use ct_sim::SimBuilder;
///
/// let sim = SimBuilder::new(SimConfig { population: 80, ..SimConfig::default() })
///     .observe_invariants(true)
///     .build()
///     .unwrap();
/// assert_eq!(sim.agents().count(), 80);
/// ```
pub struct SimBuilder {
    config:           SimConfig,
    check_invariants: bool,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, check_invariants: cfg!(debug_assertions) }
    }

    /// Validate every agent's combined state after each tick.  A violation
    /// aborts the advance call with [`SimError::Invariant`][crate::SimError::Invariant].
    pub fn observe_invariants(mut self, enabled: bool) -> Self {
        self.check_invariants = enabled;
        self
    }

    /// Validate the configuration, build the initial population, and return
    /// a sim at tick 0.
    pub fn build(self) -> SimResult<Sim> {
        Sim::new(self.config, self.check_invariants)
    }
}

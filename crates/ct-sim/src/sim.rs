//! The `Sim` struct and its tick loop.

use log::{debug, info, trace};
use rustc_hash::FxHashSet;

use ct_agent::{AgentStore, PopulationBuilder};
use ct_core::{AgentId, SimClock, SimConfig, SimRng, Tick};
use ct_disease::{
    InfectionEvent, ReproductionEstimator, TransmissionEngine, TransmissionStats, apply_exposures,
    step_health, step_incubation,
};
use ct_mobility::{MobilityEngine, MobilityStats};

use crate::{AgentView, HistoryRecord, NoopObserver, SimError, SimObserver, SimResult, Snapshot};

/// The simulation driver.
///
/// `Sim` exclusively owns the population, the random stream, and every piece
/// of engine bookkeeping.  Other components only ever see `&[Agent]`; the
/// population is mutated in one sequential pass per phase.  `&mut self` on
/// [`advance`](Self::advance) guarantees at most one advance in flight.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    config:           SimConfig,
    clock:            SimClock,
    rng:              SimRng,
    agents:           AgentStore,
    mobility:         MobilityEngine,
    transmission:     TransmissionEngine,
    reproduction:     ReproductionEstimator,
    history:          Vec<HistoryRecord>,
    check_invariants: bool,
}

impl Sim {
    pub(crate) fn new(config: SimConfig, check_invariants: bool) -> SimResult<Self> {
        config.validate()?;
        let mut sim = Sim {
            rng: SimRng::new(config.seed),
            config,
            clock: SimClock::new(),
            agents: AgentStore::default(),
            mobility: MobilityEngine::new(),
            transmission: TransmissionEngine::new(),
            reproduction: ReproductionEstimator::new(),
            history: Vec::new(),
            check_invariants,
        };
        sim.reinitialize()?;
        Ok(sim)
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Advance by `ticks` ticks and return the resulting snapshot.
    pub fn advance(&mut self, ticks: u32) -> SimResult<Snapshot> {
        self.advance_observed(ticks, &mut NoopObserver)
    }

    /// Advance by `config.speed` ticks.
    pub fn step(&mut self) -> SimResult<Snapshot> {
        self.advance(self.config.speed)
    }

    /// Advance by `ticks` ticks, calling `observer` at every tick boundary and
    /// once with the final snapshot.
    ///
    /// The configuration is re-validated first; an out-of-range value fails
    /// the call before any tick runs.
    pub fn advance_observed<O: SimObserver>(&mut self, ticks: u32, observer: &mut O) -> SimResult<Snapshot> {
        if ticks == 0 {
            return Err(SimError::ZeroTicks);
        }
        self.config.validate()?;

        for _ in 0..ticks {
            self.clock.advance();
            let now = self.clock.current_tick;
            observer.on_tick_start(now);
            let exposures = self.process_tick(now)?;
            observer.on_tick_end(now, exposures);
        }

        let snapshot = self.snapshot();
        self.history.push(HistoryRecord::new(snapshot.tick, &snapshot.counts));
        observer.on_snapshot(&snapshot);
        Ok(snapshot)
    }

    /// Discard the whole run and rebuild a fresh population from `config`.
    ///
    /// On error the current run is left untouched.
    pub fn restart(&mut self, config: SimConfig) -> SimResult<()> {
        self.restart_observed(config, &mut NoopObserver)
    }

    pub fn restart_observed<O: SimObserver>(&mut self, config: SimConfig, observer: &mut O) -> SimResult<()> {
        config.validate()?;
        self.config = config;
        self.reinitialize()?;
        observer.on_restart(&self.config);
        Ok(())
    }

    /// Replace the configuration for subsequent ticks.
    ///
    /// Rates, durations, radius, quarantine settings and speed apply from the
    /// next tick on.  `seed`, `population` and `initial_infected` only shape
    /// a population and take effect at the next restart.  Draws already taken
    /// for an ongoing episode are kept.
    pub fn set_config(&mut self, config: SimConfig) -> SimResult<()> {
        config.validate()?;
        debug!("configuration updated at {}", self.clock.current_tick);
        self.config = config;
        Ok(())
    }

    // ── Read-only views ───────────────────────────────────────────────────

    /// Build a snapshot of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick:             self.clock.current_tick,
            agents:           self.agents.iter().map(AgentView::from).collect(),
            counts:           self.agents.tally(),
            reproduction:     self.reproduction.current(),
            max_reproduction: self.reproduction.max(),
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn agents(&self) -> &AgentStore {
        &self.agents
    }

    /// Ticks elapsed since the last restart.
    pub fn tick(&self) -> Tick {
        self.clock.current_tick
    }

    /// One record for tick 0 plus one per advance call since the last restart.
    pub fn history(&self) -> &[HistoryRecord] {
        &self.history
    }

    /// Infection events still inside the reproduction window.
    pub fn recent_infections(&self) -> impl Iterator<Item = &InfectionEvent> {
        self.reproduction.events()
    }

    pub fn reproduction(&self) -> f64 {
        self.reproduction.current()
    }

    pub fn max_reproduction(&self) -> f64 {
        self.reproduction.max()
    }

    pub fn mobility_stats(&self) -> MobilityStats {
        self.mobility.stats()
    }

    pub fn transmission_stats(&self) -> TransmissionStats {
        self.transmission.stats()
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Rebuild every piece of run state from `self.config`.
    fn reinitialize(&mut self) -> SimResult<()> {
        let mut rng = SimRng::new(self.config.seed);
        let agents = PopulationBuilder::new(&self.config).build(&mut rng)?;

        self.rng = rng;
        self.agents = agents;
        self.clock.reset();
        self.mobility.reset();
        self.transmission.reset();
        self.reproduction.reset();
        self.reproduction.update(Tick::ZERO, self.agents.as_slice());
        self.history.clear();
        self.history.push(HistoryRecord::new(Tick::ZERO, &self.agents.tally()));

        info!(
            "simulation restarted: {} agents, {} infected, seed {}",
            self.agents.count(),
            self.config.initial_infected,
            self.config.seed
        );
        Ok(())
    }

    /// Run one tick; returns the number of new exposures.
    fn process_tick(&mut self, now: Tick) -> SimResult<usize> {
        let config = &self.config;
        let rng = &mut self.rng;

        // ── Phase 1: per-agent health, quarantine lifecycle, motion ───────
        for agent in self.agents.as_mut_slice() {
            step_health(agent, config, rng);
            self.mobility.step_agent(agent, config, rng);
        }

        // ── Phase 2: transmission (read), then commit (write) ─────────────
        let exposures = self.transmission.find_exposures(self.agents.as_slice(), config, rng);
        let events = apply_exposures(self.agents.as_mut_slice(), &exposures, now);

        // ── Phase 3: incubation, skipping this tick's exposures ───────────
        let fresh: FxHashSet<AgentId> = exposures.iter().map(|e| e.target).collect();
        for agent in self.agents.as_mut_slice() {
            if !fresh.contains(&agent.id) {
                step_incubation(agent, config);
            }
        }

        // ── Phase 4: reproduction estimate ────────────────────────────────
        self.reproduction.record(events);
        let rt = self.reproduction.update(now, self.agents.as_slice());

        if self.check_invariants {
            self.agents
                .validate()
                .map_err(|source| SimError::Invariant { tick: now, source })?;
        }

        trace!("{now}: {} exposures, Rt {rt:.3}", exposures.len());
        Ok(exposures.len())
    }
}

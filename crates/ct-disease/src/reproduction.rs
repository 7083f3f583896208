//! Live effective-reproduction-number (Rt) estimate.
//!
//! The estimator keeps every infection event of the last
//! [`REPRODUCTION_WINDOW_TICKS`] ticks.  The estimate is the mean, over the
//! distinct sources appearing in that window, of each source's *total*
//! secondary-infection count for its current episode (not only the events
//! inside the window).  A source whose episode has ended counts as zero.

use std::collections::VecDeque;

use log::debug;
use rustc_hash::FxHashSet;

use ct_agent::Agent;
use ct_core::{AgentId, Tick};

use crate::params::REPRODUCTION_WINDOW_TICKS;

/// A successful transmission.  Immutable once recorded.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InfectionEvent {
    pub source: AgentId,
    pub target: AgentId,
    pub tick:   Tick,
}

/// Sliding-window Rt estimator with a lifetime maximum.
#[derive(Clone, Debug, Default)]
pub struct ReproductionEstimator {
    /// Events in ascending tick order.
    window:  VecDeque<InfectionEvent>,
    current: f64,
    max:     f64,
}

impl ReproductionEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append events.  They must not be older than any event already held.
    pub fn record(&mut self, events: impl IntoIterator<Item = InfectionEvent>) {
        for event in events {
            debug_assert!(self.window.back().is_none_or(|last| last.tick <= event.tick));
            self.window.push_back(event);
        }
    }

    /// Drop events older than the window and recompute the estimate at `now`.
    pub fn update(&mut self, now: Tick, agents: &[Agent]) -> f64 {
        while self
            .window
            .front()
            .is_some_and(|e| now.since(e.tick) > REPRODUCTION_WINDOW_TICKS)
        {
            self.window.pop_front();
        }

        let sources: FxHashSet<AgentId> = self.window.iter().map(|e| e.source).collect();
        self.current = if sources.is_empty() {
            0.0
        } else {
            let total: u64 = sources
                .iter()
                .map(|s| agents.get(s.index()).and_then(|a| a.infection_count).unwrap_or(0) as u64)
                .sum();
            total as f64 / sources.len() as f64
        };
        if self.current > self.max {
            self.max = self.current;
        }
        self.current
    }

    /// The estimate as of the last [`update`](Self::update).
    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Highest estimate seen since the last reset.
    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Events currently inside the window.
    pub fn events(&self) -> impl Iterator<Item = &InfectionEvent> {
        self.window.iter()
    }

    #[inline]
    pub fn window_len(&self) -> usize {
        self.window.len()
    }

    pub fn reset(&mut self) {
        debug!("reproduction estimator reset (max was {:.3})", self.max);
        *self = Self::default();
    }
}

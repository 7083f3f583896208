//! `ct-sim` — the simulation driver for the rust_contagion engine.
//!
//! # Tick loop
//!
//! ```text
//! advance(n):
//!   validate config
//!   for each of the n ticks (clock advanced first):
//!     ① Agents     — for every agent in ascending id order:
//!                      Infected progression / ageing  (ct_disease::step_health)
//!                      quarantine lifecycle + motion  (ct_mobility::MobilityEngine)
//!     ② Transmit   — per-region grid index + contact draws (read-only),
//!                    then commit exposures
//!     ③ Incubation — Exposed agents age; ones exposed in ② are skipped
//!     ④ Rt         — record infection events, slide the window
//!   emit one Snapshot, append one HistoryRecord
//! ```
//!
//! Everything is single-threaded and driven by one seeded `SimRng`, so a run
//! is fully determined by its `SimConfig`.
//!
//! # Quick-start
//!
//! ```rust
//! use ct_core::SimConfig;
//! use ct_sim::SimBuilder;
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).build().unwrap();
//! let snapshot = sim.advance(10).unwrap();
//! assert_eq!(snapshot.counts.total(), 400);
//! assert_eq!(sim.history().len(), 2); // tick 0 + one advance
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod snapshot;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use snapshot::{AgentView, HistoryRecord, Snapshot};

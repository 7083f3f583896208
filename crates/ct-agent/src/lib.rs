//! `ct-agent` — the simulated individuals and their storage.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`state`]     | `HealthStatus`, `MovementMode`, `QuarantineStatus`, `Outcome` |
//! | [`agent`]     | `Agent` — one individual's full state                      |
//! | [`store`]     | `AgentStore` (owned population), `StatusCounts`            |
//! | [`builder`]   | `PopulationBuilder` (seeded construction from `SimConfig`) |
//! | [`validate`]  | `check_agent` — the single cross-product invariant check   |
//! | [`error`]     | `AgentError`, `AgentResult<T>`                             |
//!
//! # State model
//!
//! Each agent carries three independent closed enums: health, movement mode,
//! and quarantine status.  Together they select exactly one motion rule per
//! tick.  Not every combination is legal (a Healthy agent is never in
//! quarantine, for example); [`validate::check_agent`] is the one place that
//! knows the legal cross-product.

pub mod agent;
pub mod builder;
pub mod error;
pub mod state;
pub mod store;
pub mod validate;


pub use agent::Agent;
pub use builder::{PopulationBuilder, random_velocity};
pub use error::{AgentError, AgentResult};
pub use state::{HealthStatus, MovementMode, Outcome, QuarantineStatus};
pub use store::{AgentStore, StatusCounts};
pub use validate::check_agent;

//! `ct-mobility` — where agents go each tick.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                    |
//! |----------------|-------------------------------------------------------------|
//! | [`params`]     | Named motion and quarantine constants                       |
//! | [`quarantine`] | Detection, transit start, and release (`step_quarantine`)   |
//! | [`motion`]     | The prioritized motion rules (`step_motion`, `MotionBranch`) |
//! | [`engine`]     | `MobilityEngine` — runs both for one agent, keeps counters  |
//!
//! # Motion priority
//!
//! Each agent runs exactly one motion branch per tick, picked in this order:
//!
//! 1. quarantine transit (to quarantine or back home) — straight line
//! 2. confined in quarantine — frozen
//! 3. dead — frozen; a dead traveller is first settled where it fell
//! 4. inter-region travel — straight line toward a point near the
//!    destination center
//! 5. otherwise clamp to the current region, then one of: enter a center
//!    visit, orbit the center, or Brownian motion (followed by travel
//!    initiation for Settled agents and visit expiry for Visiting ones)
//!
//! The quarantine lifecycle runs before motion in the same call.

pub mod engine;
pub mod motion;
pub mod params;
pub mod quarantine;


pub use engine::{MobilityEngine, MobilityStats};
pub use motion::{MotionBranch, step_motion};
pub use params::{DETECTION_DELAY_TICKS, QUARANTINE_TRANSIT_STEP};
pub use quarantine::{QuarantineEvent, step_quarantine};

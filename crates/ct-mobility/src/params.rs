//! Motion and quarantine constants.
//!
//! These are deliberately not part of `SimConfig`: they shape the look of the
//! model rather than its epidemiology.

use std::ops::RangeInclusive;

// ── Quarantine ────────────────────────────────────────────────────────────────

/// Ticks an eligible Infected agent circulates before it is detected.
pub const DETECTION_DELAY_TICKS: u32 = 5;

/// Distance covered per tick during quarantine transit (either direction).
pub const QUARANTINE_TRANSIT_STEP: f64 = 10.0;

/// Minimum distance of a quarantine placement target from the region edge.
pub const QUARANTINE_TARGET_MARGIN: f64 = 15.0;

// ── Straight-line movement ────────────────────────────────────────────────────

/// Distance covered per tick while travelling between regions.
pub const TRAVEL_STEP: f64 = 3.0;

/// Half-side of the square around a region center in which travel and
/// going-home targets are drawn.
pub const TRAVEL_TARGET_JITTER: f64 = 40.0;

/// Remaining distance below which a straight-line move has arrived.
pub const ARRIVAL_EPSILON: f64 = 0.5;

// ── Center visits ─────────────────────────────────────────────────────────────

/// Per-tick chance that a Settled agent heads to its region center.
pub const CENTER_VISIT_PROBABILITY: f64 = 0.002;

/// Length of a center visit, in ticks.
pub const CENTER_VISIT_TICKS: RangeInclusive<u32> = 40..=120;

/// Step length of the random orbit around the center.
pub const CENTER_ORBIT_STEP: f64 = 0.6;

// ── Inter-region travel ───────────────────────────────────────────────────────

/// Per-tick chance that a Settled agent leaves for another region.
pub const TRAVEL_PROBABILITY: f64 = 0.0015;

/// Length of a stay in another region, in ticks.
pub const VISIT_TICKS: RangeInclusive<u32> = 150..=400;

// ── Free motion ───────────────────────────────────────────────────────────────

/// Half-width of the uniform per-axis velocity perturbation.
pub const BROWNIAN_JITTER: f64 = 0.15;

/// Speed cap under free motion.
pub const MAX_SPEED: f64 = 2.0;

/// Smallest per-axis speed after a boundary bounce.
pub const MIN_BOUNCE_SPEED: f64 = 0.2;

/// Distance from an edge at which outward velocity is turned around.
pub const EDGE_MARGIN: f64 = 3.0;

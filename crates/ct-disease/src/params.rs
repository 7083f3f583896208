//! Epidemiological constants that are not exposed through `SimConfig`.

/// The configured infection probability is divided by this before each
/// contact draw.  Changing it changes the observed dynamics substantially.
// TODO: move into `SimConfig` if scenarios need to tune it independently of
// `infection_probability`.
pub const INFECTION_DAMPENING: f64 = 10.0;

/// Added to the infection radius to get the grid cell size of the contact
/// index.
pub const CELL_MARGIN: f64 = 5.0;

/// Trailing window, in ticks, over which infection events feed the
/// reproduction estimate.
pub const REPRODUCTION_WINDOW_TICKS: u64 = 50;

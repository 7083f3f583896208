//! `ct-spatial` — region geometry and neighbor search.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`region`]  | `RegionId` — validated index of one of the 9 regions        |
//! | [`layout`]  | Layout constants, `RegionBounds`, `bounds`, `region_at`     |
//! | [`grid`]    | `GridIndex` (per-region cell buckets), `CellKey`, `Locatable` |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod grid;
pub mod layout;
pub mod region;


pub use error::{SpatialError, SpatialResult};
pub use grid::{CellKey, GridIndex, Locatable};
pub use layout::{RegionBounds, bounds, region_at};
pub use region::RegionId;

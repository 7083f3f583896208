//! Spatial-subsystem error type.

use thiserror::Error;

/// Errors produced by `ct-spatial`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpatialError {
    /// Region indices run 0..=8; anything else is a caller bug.
    #[error("region index {0} is out of range (0..=8)")]
    InvalidRegion(usize),
}

pub type SpatialResult<T> = Result<T, SpatialError>;

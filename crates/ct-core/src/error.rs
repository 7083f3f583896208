//! Engine-wide base error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The error type for `ct-core`.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("configuration field `{field}` = {value} is outside [{min}, {max}]")]
    ConfigOutOfRange {
        field: &'static str,
        value: f64,
        min:   f64,
        max:   f64,
    },

    #[error("configuration field `{0}` is not a number")]
    ConfigNotANumber(&'static str),

    #[error("initial infected count {initial} exceeds population {population}")]
    TooManyInitialInfected { initial: u32, population: u32 },
}

/// Shorthand result type for `ct-core`.
pub type CoreResult<T> = Result<T, CoreError>;

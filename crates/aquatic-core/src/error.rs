//! Error types for the library.

use thiserror::Error;

/// Library-wide error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A coordinate passed to an encode operation is outside its declared range
    #[error("{axis} out of range: {value} (expected {min} to {max})")]
    CoordOutOfRange {
        /// Name of the offending axis or field
        axis: &'static str,
        /// The rejected value
        value: i32,
        /// Lowest permitted value
        min: i32,
        /// Highest permitted value
        max: i32,
    },

    /// A location string could not be parsed
    #[error("invalid location string: {0:?}")]
    InvalidLocation(String),

    /// A balance string could not be parsed
    #[error("invalid balance: {0:?}")]
    InvalidBalance(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

//! Error types
//!
//! The only hard failure in this crate is an invalid configured width range.
//! Parsing never fails: a clause that is not understood degrades to an
//! unrecognized passthrough condition instead of producing an error.

use thiserror::Error;

/// Result type alias for fallible operations in this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Error raised when constructing an evaluator from invalid configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The configured minimum width exceeds the configured maximum width
    #[error("invalid width range: min_value {min} is greater than max_value {max}")]
    InvalidRange {
        /// Configured lower endpoint
        min: f32,
        /// Configured upper endpoint
        max: f32,
    },
}

use calldiff_core::{CallError, ReferenceError};
use thiserror::Error;

/// Error type for fixture construction.
#[derive(Error, Debug)]
pub enum FixtureError {
    /// The reference could not be read; generation is aborted.
    #[error("Failed to read reference: {0}")]
    Reference(#[from] ReferenceError),

    #[error("Invalid call: {0}")]
    Call(#[from] CallError),

    #[error("Invalid generator arguments: {0}")]
    InvalidArguments(String),

    /// The attempt budget ran out before enough distinct calls were drawn,
    /// usually because the contig admits fewer distinct calls than requested.
    #[error("Generated only {distinct} of {requested} distinct calls in {attempts} attempts")]
    Exhausted {
        requested: usize,
        distinct: usize,
        attempts: usize,
    },
}

/// Result type alias for fixture operations.
pub type Result<T> = std::result::Result<T, FixtureError>;

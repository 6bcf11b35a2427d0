//! Error types for fermionic operator construction

use thiserror::Error;

/// Errors that can occur while building fermionic operators
#[derive(Debug, Error)]
pub enum FermionError {
    /// Mode index outside `[0, n_modes)`
    #[error("Mode index {index} out of range: system has {n_modes} modes (valid indices 0..{n_modes})")]
    OutOfRange { index: usize, n_modes: usize },

    /// Invalid system parameter
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Failure reading or writing a configuration file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed configuration file
    #[error("Configuration format error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FermionError {
    /// Create an out-of-range mode index error
    pub fn out_of_range(index: usize, n_modes: usize) -> Self {
        Self::OutOfRange { index, n_modes }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, FermionError>;

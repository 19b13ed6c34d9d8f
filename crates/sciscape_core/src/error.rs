//! Error types shared by every lab crate.

use thiserror::Error;

/// Result alias for lab operations.
pub type LabResult<T> = Result<T, LabError>;

#[derive(Debug, Error)]
pub enum LabError {
    /// A value that would leave the simulation ill-defined (mass, trail cap, walls).
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// A per-call argument outside its contract, e.g. a negative time step.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// No saved experiment under the requested key.
    #[error("experiment not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl LabError {
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

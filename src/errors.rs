use std::io;

use thiserror::Error;

pub type PlannerResult<T> = Result<T, PlannerError>;

/// Error raised when a planner operation receives input it cannot accept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlannerError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl PlannerError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Human-readable reason without the error kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument(message) => message,
        }
    }
}

/// Failures while reading or writing budget settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] PlannerError),
}

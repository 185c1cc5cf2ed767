//! Error types for clawarm.

use thiserror::Error;

/// Primary error type for all bridge operations.
#[derive(Error, Debug)]
pub enum ClawArmError {
    /// Non-2xx response from the bridge server.
    #[error("Bridge {method} {path} failed ({status}): {detail}")]
    Bridge {
        method: String,
        path: String,
        status: u16,
        detail: String,
    },

    /// Non-2xx response whose detail identifies a safety-layer rejection.
    ///
    /// Renders the same message as [`ClawArmError::Bridge`] so callers that
    /// only look at the text see an unchanged contract.
    #[error("Bridge {method} {path} failed ({status}): {detail}")]
    SafetyRejected {
        method: String,
        path: String,
        status: u16,
        detail: String,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// 2xx response body that does not fit the declared result type.
    #[error("Malformed bridge response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ClawArmError {
    /// Whether the bridge's safety layer rejected the command.
    pub fn is_safety_rejection(&self) -> bool {
        matches!(self, Self::SafetyRejected { .. })
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ClawArmError>;

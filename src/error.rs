//! Error handling for eqviz
//!
//! Geometry and parameter problems never surface as errors: out-of-range
//! values are clamped and unmeasured surfaces no-op. What remains are
//! capability failures and file handling.

use thiserror::Error;

/// Result type alias for eqviz operations
pub type Result<T> = std::result::Result<T, EqError>;

/// Main error type for eqviz operations
#[derive(Error, Debug)]
pub enum EqError {
    // Response Errors
    #[error("Magnitude response unavailable: {reason}")]
    ResponseUnavailable { reason: String },

    #[error("Magnitude response length mismatch: expected {expected}, got {actual}")]
    ResponseLengthMismatch { expected: usize, actual: usize },

    // Input Errors
    #[error("Invalid parameter {param}={value} (expected {expected})")]
    InvalidParameter {
        param: String,
        value: String,
        expected: String,
    },

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl EqError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            EqError::ResponseUnavailable { .. } => "RESPONSE_UNAVAILABLE",
            EqError::ResponseLengthMismatch { .. } => "RESPONSE_LENGTH_MISMATCH",
            EqError::InvalidParameter { .. } => "INVALID_PARAMETER",
            EqError::InvalidConfig { .. } => "INVALID_CONFIG",
            EqError::Io(_) => "IO_ERROR",
            EqError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if the caller can keep going without the failed result.
    ///
    /// An unavailable curve only suppresses rendering; dial editing keeps working.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            EqError::ResponseUnavailable { .. } | EqError::ResponseLengthMismatch { .. }
        )
    }
}

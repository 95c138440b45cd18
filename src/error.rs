//! Error types for lorenzviz.
//!
//! All fallible operations return `Result<T, LorenzError>` instead of
//! panicking. Failures here are always precondition violations, never
//! transient: every computation in the crate is pure and deterministic.

use thiserror::Error;

/// Result type alias for lorenzviz operations.
pub type LorenzResult<T> = Result<T, LorenzError>;

/// Unified error type for all lorenzviz operations.
#[derive(Debug, Error)]
pub enum LorenzError {
    // ===== Domain Errors =====
    /// Critical points require rho > 1 (square root of beta * (rho - 1)).
    #[error("domain error: critical points require rho > 1, got rho = {rho}")]
    Domain {
        /// The offending rho value.
        rho: f64,
    },

    /// Two frame sequences handed to the merger differ in length.
    #[error("frame sequences differ in length: {left} vs {right}")]
    FrameLengthMismatch {
        /// Length of the first sequence.
        left: usize,
        /// Length of the second sequence.
        right: usize,
    },

    /// Numerical blow-up: a trajectory point is NaN or infinite.
    #[error("non-finite state at trajectory index {index}")]
    NonFinite {
        /// Index of the first non-finite point.
        index: usize,
    },

    // ===== Configuration Errors =====
    /// Invalid configuration parameter.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    // ===== I/O Errors =====
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LorenzError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this error is a precondition violation in the numerical
    /// domain (as opposed to configuration or I/O).
    #[must_use]
    pub const fn is_domain_error(&self) -> bool {
        matches!(
            self,
            Self::Domain { .. } | Self::FrameLengthMismatch { .. } | Self::NonFinite { .. }
        )
    }
}

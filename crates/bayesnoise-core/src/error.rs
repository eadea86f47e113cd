//! Error types for bayesnoise-core.

use thiserror::Error;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, AnalyticsError>;

/// Every failure the computation engine can surface.
///
/// Variants are distinct so a caller can tell bad input (ask for new data)
/// apart from a numerical anomaly in otherwise valid data.
#[derive(Error, Debug)]
pub enum AnalyticsError {
    /// Input rejected before any computation ran.
    #[error("Invalid input for {context}: {reason}")]
    InvalidInput {
        /// Operation that rejected the input.
        context: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// A normalizing total or a divisor was zero.
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    /// An evidence round has no likelihood for a hypothesis in the prior.
    #[error("Missing likelihood for hypothesis '{hypothesis}' in evidence round {round}")]
    MissingLikelihood {
        /// Zero-based evidence round.
        round: usize,
        /// Hypothesis name absent from that round.
        hypothesis: String,
    },

    /// Configuration rejected at construction time.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Malformed JSON prior or likelihood table.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AnalyticsError {
    pub(crate) fn invalid(context: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            context,
            reason: reason.into(),
        }
    }
}

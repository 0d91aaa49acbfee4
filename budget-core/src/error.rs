/// Error types for the budget report client
use thiserror::Error;

/// Main error type for report operations
#[derive(Error, Debug)]
pub enum ReportError {
    /// Custom range could not be parsed, or start is after end
    #[error("Invalid custom date range.")]
    InvalidDateRange,

    /// Unrecognised date range mode
    #[error("Unknown date range type: {0}")]
    UnknownRangeType(String),

    /// Unrecognised amount flag
    #[error("Unknown amount flag: {0}")]
    UnknownAmountFlag(String),

    /// Backend answered with a non-2xx status
    #[error("API Error: {status} {body}")]
    Api { status: u16, body: String },

    /// Request never produced a response (network failure, browser refusal)
    #[error("Transport failed: {0}")]
    Transport(String),

    /// Response body was not a JSON array of rows
    #[error("Failed to decode report: {0}")]
    Decode(#[from] serde_json::Error),

    /// HTTP request failed
    #[cfg(feature = "api")]
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
}

impl ReportError {
    /// True for errors raised before any request is sent.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ReportError::InvalidDateRange
                | ReportError::UnknownRangeType(_)
                | ReportError::UnknownAmountFlag(_)
        )
    }
}

/// Type alias for Results using ReportError
pub type Result<T> = std::result::Result<T, ReportError>;

//! Unified Error Model
//!
//! Every per-match failure is recoverable: the batch logs it and moves on to
//! the next match id. Only `Config` is fatal, and only at startup.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SummaryError {
    /// Match record is missing innings, entries or a parseable date
    #[error("DATA_SHAPE/{0}")]
    DataShape(String),

    /// Result or toss wording names neither side, or a needed count is missing
    #[error("RESULT/{0}")]
    UnrecognizedResult(String),

    /// Network, render, mail or upload failure reported by a collaborator
    #[error("COLLABORATOR/{0}")]
    Collaborator(String),

    /// Club config or field layout could not be loaded
    #[error("CONFIG/{0}")]
    Config(String),

    #[error("IO/{0}")]
    Io(#[from] std::io::Error),

    #[error("SERIALIZE/{0}")]
    Serialize(#[from] serde_json::Error),
}

impl SummaryError {
    /// Whether the error excludes a single match rather than breaking a step
    pub fn excludes_match(&self) -> bool {
        matches!(self, Self::DataShape(_) | Self::UnrecognizedResult(_))
    }

    /// Whether the process should stop
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefix() {
        let err = SummaryError::DataShape("innings 2 has no bowling entries".to_string());
        assert_eq!(err.to_string(), "DATA_SHAPE/innings 2 has no bowling entries");
    }

    #[test]
    fn test_classification() {
        assert!(SummaryError::UnrecognizedResult("x".into()).excludes_match());
        assert!(!SummaryError::Collaborator("x".into()).excludes_match());
        assert!(SummaryError::Config("x".into()).is_fatal());
        assert!(!SummaryError::DataShape("x".into()).is_fatal());
    }
}

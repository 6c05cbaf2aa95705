//! Errors raised by the session layer while validating raw inputs.
//!
//! The rule engines themselves are total and never fail; these errors
//! describe input that could not be turned into engine data at all.

use thiserror::Error;

/// Input validation and record errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScorecardError {
    #[error("invalid score {0:?}: expected a whole number from 1 to 15")]
    InvalidScore(String),
    #[error("hole {0} is outside 1-18")]
    InvalidHole(u8),
    #[error("unknown player index {0}")]
    UnknownPlayer(u8),
    #[error("a round needs 1 to 4 players, got {0}")]
    InvalidRoster(usize),
    #[error("unknown skins mode {0:?}")]
    InvalidSkinsMode(String),
    #[error("record encode failed: {0}")]
    RecordEncode(String),
    #[error("record decode failed: {0}")]
    RecordDecode(String),
}

impl From<serde_json::Error> for ScorecardError {
    fn from(err: serde_json::Error) -> Self {
        Self::RecordDecode(err.to_string())
    }
}

/// Result alias used by the session layer.
pub type Result<T> = std::result::Result<T, ScorecardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ScorecardError::InvalidScore("abc".into()).to_string(),
            "invalid score \"abc\": expected a whole number from 1 to 15"
        );
        assert_eq!(ScorecardError::InvalidHole(19).to_string(), "hole 19 is outside 1-18");
        assert_eq!(
            ScorecardError::InvalidRoster(5).to_string(),
            "a round needs 1 to 4 players, got 5"
        );
    }
}

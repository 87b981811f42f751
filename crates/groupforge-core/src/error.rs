//! Error types for GroupForge

use thiserror::Error;

use crate::domain::QuestionId;

/// Main error type for GroupForge operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GroupForgeError {
    /// An answer was scored against a question it is not valid for
    #[error("Invalid answer for question {question_id}")]
    InvalidAnswer { question_id: QuestionId },

    /// Roster enrollment would violate a roster invariant
    #[error("Invalid roster: {0}")]
    InvalidRoster(String),

    /// Error in grouper or survey configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A scorer failed for reasons other than an invalid answer
    #[error("Scoring error: {0}")]
    Scoring(String),
}

/// Result type alias for GroupForge operations
pub type Result<T> = std::result::Result<T, GroupForgeError>;

//! Error types for the workflow layer

use thiserror::Error;

/// Result type alias for workflow operations
pub type Result<T> = std::result::Result<T, WorkflowError>;

/// Errors raised while driving a session through its phases
#[derive(Error, Debug)]
pub enum WorkflowError {
    /// The problem statement is empty
    #[error("Problem statement is empty")]
    EmptyProblem,

    /// No source supplied any text for this step
    #[error("No assistant output provided")]
    NoInput,

    /// An answer was addressed to a question that does not exist
    #[error("Question index {index} out of range (session has {len} questions)")]
    QuestionIndex {
        /// Requested index (0-based)
        index: usize,
        /// Number of questions in the session
        len: usize,
    },

    /// A solve prompt needs at least one answered question
    #[error("No question has been answered yet")]
    NoAnswers,

    /// Extractor setup failed
    #[error("Extractor error: {0}")]
    Extractor(#[from] cockpit_extractor::ExtractorError),

    /// Deduplicator setup failed
    #[error("Deduplication error: {0}")]
    Dedup(#[from] cockpit_dedup::DedupError),

    /// Session (de)serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

//! Trait definitions for external collaborators
//!
//! Implementations live outside the core (HTTP clients, test doubles).

use crate::{RemoteQuestion, SourceQuestions, SourceText};

/// An external service that deduplicates questions "intelligently"
///
/// The core never calls out on its own; the workflow layer asks an
/// implementation of this trait first and falls back to local
/// deduplication when it returns an error.
pub trait RemoteDeduplicator {
    /// Error type for remote operations
    type Error;

    /// Deduplicate the per-source question lists into one canonical list
    fn deduplicate(&self, questions: &[SourceQuestions]) -> Result<Vec<RemoteQuestion>, Self::Error>;
}

/// An external service that merges several solution replies into one synthesis
///
/// Same contract as [`RemoteDeduplicator`]: an error, or a blank answer,
/// makes the workflow build a local summary instead.
pub trait RemoteSynthesizer {
    /// Error type for remote operations
    type Error;

    /// Synthesize the solution replies to `problem` into one text
    fn synthesize(&self, problem: &str, solutions: &[SourceText]) -> Result<String, Self::Error>;
}

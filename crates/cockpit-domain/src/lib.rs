//! Cockpit Domain Layer
//!
//! Record types shared by the extraction and deduplication engines.
//!
//! ## Key Concepts
//!
//! - **Candidate question**: one question pulled out of a single AI assistant's
//!   raw reply, before any merging
//! - **Merged question**: the canonical question that one or more near-identical
//!   candidates collapse into, with provenance (`sources`, `variants`)
//! - **Priority**: urgency class P1 (blocking) → P3 (optional)
//! - **Remote question**: the record shape returned by an external
//!   deduplication service, interchangeable with a merged question
//! - **Source text**: one assistant's raw reply, as sent to a remote
//!   synthesizer
//!
//! ## Architecture
//!
//! The extractor produces [`CandidateQuestion`]s and the deduplicator consumes
//! them; neither crate depends on the other, only on the records defined here.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod priority;
pub mod question;
pub mod remote;
pub mod traits;

// Re-exports for convenience
pub use priority::Priority;
pub use question::{CandidateQuestion, MergedQuestion, Variant, DEFAULT_TAG, KNOWN_TAGS};
pub use remote::{RemoteQuestion, SourceQuestions, SourceText};
pub use traits::{RemoteDeduplicator, RemoteSynthesizer};

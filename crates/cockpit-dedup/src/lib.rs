//! Cockpit Deduplicator
//!
//! Merges near-duplicate questions asked by several AI assistants into one
//! canonical list with priority and provenance.
//!
//! The Deduplicator provides:
//! - Text normalization and word-set Jaccard similarity
//! - Greedy seed clustering at a tunable threshold (default 0.6)
//! - Priority resolution (most urgent member wins) and stable priority ordering
//! - An exact-match fallback for plain, untagged question lists
//!
//! # Examples
//!
//! ```
//! use cockpit_dedup::{deduplicate, DEFAULT_THRESHOLD};
//! use cockpit_domain::{CandidateQuestion, Priority};
//!
//! let pooled = vec![
//!     CandidateQuestion::new(1, "What is the deadline?", "chatgpt"),
//!     CandidateQuestion::new(1, "What is the deadline", "claude").with_priority(Priority::P1),
//! ];
//!
//! let merged = deduplicate(&pooled, DEFAULT_THRESHOLD);
//! assert_eq!(merged.len(), 1);
//! assert_eq!(merged[0].priority, Priority::P1);
//! assert_eq!(merged[0].sources, vec!["chatgpt", "claude"]);
//! ```

#![warn(missing_docs)]

mod config;
mod deduplicator;
mod error;
mod local;
mod similarity;

pub use config::{DedupConfig, DEFAULT_THRESHOLD};
pub use deduplicator::{deduplicate, Deduplicator};
pub use error::DedupError;
pub use local::local_deduplicate;
pub use similarity::{jaccard_similarity, normalize_text, TokenSet};

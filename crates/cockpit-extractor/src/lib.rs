//! Cockpit Extractor
//!
//! Turns semi-structured AI assistant output into discrete question records.
//!
//! # Overview
//!
//! Assistants are asked to reply with a `[QUESTIONS]` block of lines like
//! `1. (P1) (TAG:constraints) What is the budget?`, but pasted replies rarely
//! follow the format exactly. The Extractor therefore runs a cascade of
//! progressively more permissive strategies and keeps the result of the first
//! one that finds anything:
//!
//! 1. full format: number, priority, tag, text
//! 2. number and priority only
//! 3. numbered lines ending in `?`
//! 4. any sentence fragment ending in `?` (the true fallback)
//!
//! A separate line-oriented [`extract_questions_from_text`] returns plain
//! strings for remote or exact-match deduplication, and [`extract_solution`]
//! splits solve-phase replies into their sections.
//!
//! # Architecture
//!
//! ```text
//! raw reply → Extractor → CandidateQuestion[] → (pooled) → Deduplicator
//! ```
//!
//! # Example Usage
//!
//! ```
//! use cockpit_extractor::{Extractor, ExtractorConfig};
//! use cockpit_domain::Priority;
//!
//! let extractor = Extractor::new(ExtractorConfig::default()).unwrap();
//! let questions = extractor.extract(
//!     "1. (P1) (TAG:constraints) What is the budget?\n2. (P2) (TAG:timeline) What is the deadline?",
//!     "chatgpt",
//! );
//!
//! assert_eq!(questions.len(), 2);
//! assert_eq!(questions[0].priority, Priority::P1);
//! assert_eq!(questions[1].tag, "timeline");
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod patterns;
mod plain;
mod solution;
mod strategies;
mod types;


pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::{extract, extract_questions_from_text, Extractor};
pub use plain::{classify_line, LineShape};
pub use solution::extract_solution;
pub use strategies::Strategy;
pub use types::{Extraction, Readiness, SolutionReport};

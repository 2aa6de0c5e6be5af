//! Question records produced by extraction and deduplication

use crate::Priority;
use serde::{Deserialize, Serialize};

/// Tag used when the input carries no topic annotation
pub const DEFAULT_TAG: &str = "other";

/// Topic tags the clarifying-questions prompt asks assistants to use
pub const KNOWN_TAGS: &[&str] = &[
    "objective",
    "constraints",
    "timeline",
    "stakeholders",
    "risks",
    "technical",
    "other",
];

/// A single question extracted from one assistant's output
///
/// Candidates are short-lived: created per extraction call and consumed by
/// pooling and deduplication right after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateQuestion {
    /// Position within its source's output
    ///
    /// Numbered formats keep the number as written (`0.` gives 0, a list
    /// starting at `3.` gives 3); the last-resort scan counts from 1.
    pub ordinal: usize,

    /// Urgency (P2 when the input does not say)
    pub priority: Priority,

    /// Lower-cased topic tag
    pub tag: String,

    /// Question text, trimmed, without enumeration markers
    pub text: String,

    /// Identifier of the assistant that produced it (e.g. "chatgpt")
    pub source: String,

    /// The full matched substring, kept for diagnostics
    pub raw_match: String,
}

impl CandidateQuestion {
    /// Create a candidate with default priority and tag
    pub fn new(ordinal: usize, text: impl Into<String>, source: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            ordinal,
            priority: Priority::default(),
            tag: DEFAULT_TAG.to_string(),
            raw_match: text.clone(),
            text,
            source: source.into(),
        }
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the topic tag (stored lower-cased)
    pub fn with_tag(mut self, tag: impl AsRef<str>) -> Self {
        self.tag = tag.as_ref().to_lowercase();
        self
    }

    /// Set the raw matched substring
    pub fn with_raw_match(mut self, raw_match: impl Into<String>) -> Self {
        self.raw_match = raw_match.into();
        self
    }
}

/// One original phrasing merged into a [`MergedQuestion`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Source that produced this phrasing
    pub source: String,

    /// The phrasing itself
    pub text: String,
}

/// Canonical question standing for a group of near-duplicate candidates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedQuestion {
    /// 1-based position in the deduplicated output
    pub id: usize,

    /// Representative text (longest variant, first one on ties)
    pub text: String,

    /// Most urgent priority among the merged candidates
    pub priority: Priority,

    /// Tag of the group's seed candidate
    pub tag: String,

    /// Distinct contributing sources, first-seen order
    pub sources: Vec<String>,

    /// Every merged phrasing, in scan order
    pub variants: Vec<Variant>,

    /// User's answer; empty until the user fills it in
    #[serde(default)]
    pub answer: String,
}

impl MergedQuestion {
    /// Whether the user has given a non-blank answer
    pub fn is_answered(&self) -> bool {
        !self.answer.trim().is_empty()
    }

    /// Whether more than one source asked this question
    pub fn is_shared(&self) -> bool {
        self.sources.len() > 1
    }

    /// Add a source unless already listed
    pub fn add_source(&mut self, source: &str) {
        if !self.sources.iter().any(|s| s == source) {
            self.sources.push(source.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_defaults() {
        let q = CandidateQuestion::new(1, "What is the budget?", "chatgpt");
        assert_eq!(q.priority, Priority::P2);
        assert_eq!(q.tag, "other");
        assert_eq!(q.raw_match, "What is the budget?");
    }

    #[test]
    fn test_candidate_tag_lowercased() {
        let q = CandidateQuestion::new(1, "Who signs off?", "claude").with_tag("Stakeholders");
        assert_eq!(q.tag, "stakeholders");
    }

    #[test]
    fn test_add_source_collapses_duplicates() {
        let mut merged = MergedQuestion {
            id: 1,
            text: "What is the budget?".to_string(),
            priority: Priority::P1,
            tag: "constraints".to_string(),
            sources: vec!["chatgpt".to_string()],
            variants: Vec::new(),
            answer: String::new(),
        };
        merged.add_source("chatgpt");
        merged.add_source("gemini");
        assert_eq!(merged.sources, vec!["chatgpt", "gemini"]);
        assert!(merged.is_shared());
    }

    #[test]
    fn test_is_answered_ignores_whitespace() {
        let mut merged = MergedQuestion {
            id: 1,
            text: "Q?".to_string(),
            priority: Priority::P2,
            tag: "other".to_string(),
            sources: Vec::new(),
            variants: Vec::new(),
            answer: "   ".to_string(),
        };
        assert!(!merged.is_answered());
        merged.answer = "About 10k".to_string();
        assert!(merged.is_answered());
    }
}

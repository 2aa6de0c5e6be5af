//! Result types for extraction

use crate::strategies::Strategy;
use cockpit_domain::CandidateQuestion;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of one structured extraction call
///
/// An empty `questions` list is a valid result meaning "no extractable
/// questions"; it is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    /// Source identifier the caller supplied
    pub source: String,

    /// Cascade step that produced the questions (`None` when nothing matched)
    pub strategy: Option<Strategy>,

    /// Whether processing was restricted to a delimited questions block
    pub used_block: bool,

    /// Extracted questions in document order
    pub questions: Vec<CandidateQuestion>,
}

impl Extraction {
    /// True when no question could be extracted
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Number of extracted questions
    pub fn len(&self) -> usize {
        self.questions.len()
    }
}

/// Readiness an assistant reports in its `[STATUS]` block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Readiness {
    /// The assistant considers the solution complete
    Ready,
    /// The assistant needs more information
    NeedsInfo,
    /// No status block, or an unrecognised value
    #[default]
    Unknown,
}

impl Readiness {
    /// Get the readiness label
    pub fn as_str(&self) -> &'static str {
        match self {
            Readiness::Ready => "READY",
            Readiness::NeedsInfo => "NEEDS_INFO",
            Readiness::Unknown => "UNKNOWN",
        }
    }

    /// Parse a readiness label (case-insensitive)
    pub fn parse(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "READY" => Readiness::Ready,
            "NEEDS_INFO" => Readiness::NeedsInfo,
            _ => Readiness::Unknown,
        }
    }
}

impl fmt::Display for Readiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sections parsed out of a solve-phase reply
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SolutionReport {
    /// Reported readiness
    pub status: Readiness,

    /// Solution body (the whole reply when no `[SOLUTION]` block exists)
    pub solution: String,

    /// Numbered next steps, numbers stripped
    pub next_steps: Vec<String>,

    /// Bulleted risks, bullets stripped
    pub risks: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readiness_parsing() {
        assert_eq!(Readiness::parse("ready"), Readiness::Ready);
        assert_eq!(Readiness::parse("Needs_Info"), Readiness::NeedsInfo);
        assert_eq!(Readiness::parse("maybe"), Readiness::Unknown);
    }

    #[test]
    fn test_readiness_serializes_as_label() {
        let json = serde_json::to_string(&Readiness::NeedsInfo).unwrap();
        assert_eq!(json, "\"NEEDS_INFO\"");
    }
}

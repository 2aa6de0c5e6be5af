//! Record shapes exchanged with external services
//!
//! The remote path and the local deduplicator must be interchangeable to
//! downstream consumers, so both convert into [`MergedQuestion`].

use crate::{MergedQuestion, Priority, Variant, DEFAULT_TAG};
use serde::{Deserialize, Serialize};

/// Raw reply text from one source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceText {
    /// Source identifier
    pub source: String,

    /// Reply text as pasted
    pub text: String,
}

/// Plain-text questions found in one source's reply, sent to the remote service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceQuestions {
    /// Source identifier
    pub source: String,

    /// Questions in document order
    pub questions: Vec<String>,
}

/// A deduplicated question as returned by the remote service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteQuestion {
    /// Canonical question text
    pub question: String,

    /// Urgency, P2 when the service omits it
    #[serde(default)]
    pub priority: Priority,

    /// Sources that asked it
    #[serde(default)]
    pub sources: Vec<String>,

    /// Answer, normally empty
    #[serde(default)]
    pub answer: String,
}

impl RemoteQuestion {
    /// Convert into a merged question with the given id
    ///
    /// The service reports no tag and no per-source phrasing, so the tag is
    /// the default one and each source gets a variant carrying the canonical
    /// text.
    pub fn into_merged(self, id: usize) -> MergedQuestion {
        let mut sources: Vec<String> = Vec::with_capacity(self.sources.len());
        for source in self.sources {
            if !sources.contains(&source) {
                sources.push(source);
            }
        }
        let variants = sources
            .iter()
            .map(|source| Variant {
                source: source.clone(),
                text: self.question.clone(),
            })
            .collect();

        MergedQuestion {
            id,
            text: self.question,
            priority: self.priority,
            tag: DEFAULT_TAG.to_string(),
            sources,
            variants,
            answer: self.answer,
        }
    }
}

impl From<&MergedQuestion> for RemoteQuestion {
    fn from(merged: &MergedQuestion) -> Self {
        Self {
            question: merged.text.clone(),
            priority: merged.priority,
            sources: merged.sources.clone(),
            answer: merged.answer.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_question_parsing_defaults() {
        let json = r#"{"question": "What is the deadline?", "sources": ["claude"]}"#;
        let remote: RemoteQuestion = serde_json::from_str(json).unwrap();
        assert_eq!(remote.priority, Priority::P2);
        assert!(remote.answer.is_empty());
    }

    #[test]
    fn test_into_merged() {
        let remote = RemoteQuestion {
            question: "What is the budget?".to_string(),
            priority: Priority::P1,
            sources: vec!["chatgpt".into(), "gemini".into(), "chatgpt".into()],
            answer: String::new(),
        };
        let merged = remote.into_merged(3);
        assert_eq!(merged.id, 3);
        assert_eq!(merged.tag, "other");
        assert_eq!(merged.sources, vec!["chatgpt", "gemini"]);
        assert_eq!(merged.variants.len(), 2);
        assert_eq!(merged.variants[1].text, "What is the budget?");
    }

    #[test]
    fn test_merged_to_remote_shape() {
        let merged = MergedQuestion {
            id: 1,
            text: "Who approves?".to_string(),
            priority: Priority::P3,
            tag: "stakeholders".to_string(),
            sources: vec!["claude".to_string()],
            variants: vec![Variant {
                source: "claude".to_string(),
                text: "Who approves?".to_string(),
            }],
            answer: "The CFO".to_string(),
        };
        let value = serde_json::to_value(RemoteQuestion::from(&merged)).unwrap();
        assert_eq!(value["question"], "Who approves?");
        assert_eq!(value["priority"], "P3");
        assert_eq!(value["answer"], "The CFO");
    }
}

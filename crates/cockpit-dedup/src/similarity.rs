//! Text normalization and Jaccard similarity over word sets

use std::collections::HashSet;

/// Letters kept besides ASCII word characters
const LOCAL_LETTERS: &[char] = &['ä', 'ö', 'ü', 'ß'];

/// Normalize text for comparison
///
/// Lower-cases, drops everything except ASCII word characters, the local
/// letters ä/ö/ü/ß and whitespace, then collapses whitespace runs and trims.
pub fn normalize_text(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace() || LOCAL_LETTERS.contains(c))
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The set of normalized words in a text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenSet(HashSet<String>);

impl TokenSet {
    /// Tokenize a text
    pub fn new(text: &str) -> Self {
        Self(
            normalize_text(text)
                .split_whitespace()
                .map(str::to_string)
                .collect(),
        )
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the text had no tokens after normalization
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the set holds a token
    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    /// Jaccard similarity |A ∩ B| / |A ∪ B|; 0.0 when both sets are empty
    pub fn jaccard(&self, other: &TokenSet) -> f64 {
        let intersection = self.0.intersection(&other.0).count();
        let union = self.0.len() + other.0.len() - intersection;
        if union == 0 {
            return 0.0;
        }
        intersection as f64 / union as f64
    }
}

/// Jaccard similarity between the word sets of two texts
pub fn jaccard_similarity(a: &str, b: &str) -> f64 {
    TokenSet::new(a).jaccard(&TokenSet::new(b))
}

//! Exact-match fallback grouping for plain question lists

use cockpit_domain::{MergedQuestion, Priority, SourceQuestions, Variant, DEFAULT_TAG};
use std::collections::HashMap;
use tracing::info;

/// Group plain per-source questions by exact text
///
/// Texts are compared after trimming and case-folding; no similarity
/// scoring is involved. Sources are visited in the given order, so the
/// first phrasing seen becomes the group's text. Every group gets the
/// default priority and tag, and ids follow first appearance.
pub fn local_deduplicate(per_source: &[SourceQuestions]) -> Vec<MergedQuestion> {
    let mut merged: Vec<MergedQuestion> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for entry in per_source {
        for question in &entry.questions {
            let text = question.trim();
            if text.is_empty() {
                continue;
            }
            let variant = Variant {
                source: entry.source.clone(),
                text: text.to_string(),
            };

            match index.get(&text.to_lowercase()) {
                Some(&position) => {
                    let existing = &mut merged[position];
                    existing.add_source(&entry.source);
                    existing.variants.push(variant);
                }
                None => {
                    index.insert(text.to_lowercase(), merged.len());
                    merged.push(MergedQuestion {
                        id: merged.len() + 1,
                        text: text.to_string(),
                        priority: Priority::default(),
                        tag: DEFAULT_TAG.to_string(),
                        sources: vec![entry.source.clone()],
                        variants: vec![variant],
                        answer: String::new(),
                    });
                }
            }
        }
    }

    info!("Local fallback grouped questions into {} entries", merged.len());
    merged
}

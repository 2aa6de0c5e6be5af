//! Greedy seed clustering of near-duplicate questions

use crate::similarity::TokenSet;
use crate::{DedupConfig, DedupError};
use cockpit_domain::{CandidateQuestion, MergedQuestion, Priority, Variant};
use tracing::{debug, info};

/// The Deduplicator merges near-identical questions from several sources
///
/// Clustering is greedy and seed-based: each unconsumed candidate seeds a
/// group and pulls in every later unconsumed candidate whose similarity *to
/// the seed* reaches the threshold. Similarity is not transitive here: a
/// candidate close to a non-seed member but not to the seed stays out. The
/// pass is O(n²), which is fine for the tens of questions a session holds.
///
/// The result depends on input order, so callers must pool sources in a
/// fixed order to get reproducible groups.
#[derive(Debug, Clone, Default)]
pub struct Deduplicator {
    config: DedupConfig,
}

impl Deduplicator {
    /// Create a new Deduplicator with the given configuration
    pub fn new(config: DedupConfig) -> Result<Self, DedupError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration
    pub fn config(&self) -> &DedupConfig {
        &self.config
    }

    /// Merge candidates into a canonical, priority-ordered list
    ///
    /// Every candidate ends up in exactly one output `variants` list. Output
    /// is sorted by priority with a stable sort, and ids are assigned after
    /// sorting so they follow output order.
    pub fn deduplicate(&self, candidates: &[CandidateQuestion]) -> Vec<MergedQuestion> {
        let threshold = self.config.threshold;
        info!(
            "Deduplicating {} questions with threshold {}",
            candidates.len(),
            threshold
        );

        let token_sets: Vec<TokenSet> = candidates.iter().map(|c| TokenSet::new(&c.text)).collect();
        let mut consumed = vec![false; candidates.len()];
        let mut merged = Vec::new();

        for i in 0..candidates.len() {
            if consumed[i] {
                continue;
            }
            consumed[i] = true;
            let mut group = Group::seed(&candidates[i]);

            for j in (i + 1)..candidates.len() {
                if consumed[j] {
                    continue;
                }
                let similarity = token_sets[i].jaccard(&token_sets[j]);
                if similarity >= threshold {
                    debug!(
                        "Merging #{} into group of #{} (similarity {:.2})",
                        j, i, similarity
                    );
                    consumed[j] = true;
                    group.add(&candidates[j]);
                }
            }

            merged.push(group.finish());
        }

        merged.sort_by_key(|question| question.priority);
        for (index, question) in merged.iter_mut().enumerate() {
            question.id = index + 1;
        }

        info!("Deduplicated to {} unique questions", merged.len());
        merged
    }
}

/// Deduplicate with an explicit threshold
///
/// Thresholds outside [0.0, 1.0] are not rejected here: anything above 1.0
/// merges nothing and anything at or below 0.0 merges everything into its
/// seed's group.
pub fn deduplicate(candidates: &[CandidateQuestion], threshold: f64) -> Vec<MergedQuestion> {
    Deduplicator {
        config: DedupConfig::with_threshold(threshold),
    }
    .deduplicate(candidates)
}

/// A group under construction
struct Group<'a> {
    members: Vec<&'a CandidateQuestion>,
    priority: Priority,
    tag: String,
}

impl<'a> Group<'a> {
    fn seed(seed: &'a CandidateQuestion) -> Self {
        Self {
            members: vec![seed],
            priority: seed.priority,
            tag: seed.tag.clone(),
        }
    }

    fn add(&mut self, member: &'a CandidateQuestion) {
        self.priority = self.priority.most_urgent(member.priority);
        self.members.push(member);
    }

    fn finish(self) -> MergedQuestion {
        let mut representative = self.members[0];
        let mut longest = representative.text.chars().count();
        for &member in &self.members[1..] {
            let length = member.text.chars().count();
            if length > longest {
                representative = member;
                longest = length;
            }
        }

        let mut sources: Vec<String> = Vec::new();
        for member in &self.members {
            if !sources.contains(&member.source) {
                sources.push(member.source.clone());
            }
        }

        let variants = self
            .members
            .iter()
            .map(|member| Variant {
                source: member.source.clone(),
                text: member.text.clone(),
            })
            .collect();

        MergedQuestion {
            id: 0,
            text: representative.text.clone(),
            priority: self.priority,
            tag: self.tag,
            sources,
            variants,
            answer: String::new(),
        }
    }
}

//! The workflow driver
//!
//! [`Workflow`] owns the configured extractor and deduplicator and moves a
//! [`Session`] from one phase to the next. It never stores the session.
//! Remote collaborators are optional at every step that can use one.

use crate::config::WorkflowConfig;
use crate::error::{Result, WorkflowError};
use crate::prompt::{QuestionsPromptBuilder, SolvePromptBuilder};
use crate::session::{Phase, Session};
use crate::synthesis::{SourceSolution, Synthesis};
use cockpit_dedup::{local_deduplicate, Deduplicator};
use cockpit_domain::{
    CandidateQuestion, MergedQuestion, RemoteDeduplicator, RemoteQuestion, RemoteSynthesizer,
    SourceQuestions, SourceText,
};
use cockpit_extractor::{extract_solution, Extractor};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt::Display;
use tracing::{debug, info, warn};

/// Which path produced the merged question list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DedupPath {
    /// External deduplication service
    Remote,
    /// Local similarity clustering
    Similarity,
    /// Exact-match grouping of plain-extracted lines
    ExactMatch,
}

/// Result of the question-analysis step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisOutcome {
    /// Questions were merged and stored in the session
    Questions {
        /// Number of merged questions
        count: usize,
        /// Path that produced them
        path: DedupPath,
    },
    /// No source contained a recognizable question; the session is unchanged
    NoQuestions,
}

/// Stand-in collaborator for steps run without a remote service
struct NoRemote;

impl RemoteDeduplicator for NoRemote {
    type Error = Infallible;

    fn deduplicate(
        &self,
        _questions: &[SourceQuestions],
    ) -> std::result::Result<Vec<RemoteQuestion>, Infallible> {
        Ok(Vec::new())
    }
}

impl RemoteSynthesizer for NoRemote {
    type Error = Infallible;

    fn synthesize(
        &self,
        _problem: &str,
        _solutions: &[SourceText],
    ) -> std::result::Result<String, Infallible> {
        Ok(String::new())
    }
}

/// Drives a session through its phases
pub struct Workflow {
    extractor: Extractor,
    deduplicator: Deduplicator,
    max_questions: usize,
}

impl Workflow {
    /// Create a workflow from a validated configuration
    pub fn new(config: WorkflowConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            extractor: Extractor::new(config.extractor)?,
            deduplicator: Deduplicator::new(config.dedup)?,
            max_questions: config.max_questions,
        })
    }

    /// The extractor in use
    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    /// The deduplicator in use
    pub fn deduplicator(&self) -> &Deduplicator {
        &self.deduplicator
    }

    /// Build the clarifying-questions prompt and store it in the session
    pub fn generate_questions_prompt(&self, session: &mut Session) -> Result<String> {
        if session.problem.trim().is_empty() {
            return Err(WorkflowError::EmptyProblem);
        }
        let prompt = QuestionsPromptBuilder::new(session.problem.as_str())
            .with_max_questions(self.max_questions)
            .build();
        session.questions_prompt = prompt.clone();
        session.phase = Phase::QuestionsPrompt;
        session.touch();
        Ok(prompt)
    }

    /// Analyze the question replies without a remote service
    pub fn analyze_questions_locally(&self, session: &mut Session) -> Result<AnalysisOutcome> {
        self.analyze_questions(session, None::<&NoRemote>)
    }

    /// Extract, pool and merge the question replies held by the session
    ///
    /// A supplied remote service is tried first with the plain-extracted
    /// questions. Its failure, or an empty answer, falls back to local
    /// similarity clustering. When the structured pool is empty the plain
    /// lines are grouped by exact match instead.
    pub fn analyze_questions<R>(
        &self,
        session: &mut Session,
        remote: Option<&R>,
    ) -> Result<AnalysisOutcome>
    where
        R: RemoteDeduplicator,
        R::Error: Display,
    {
        if !session.has_question_input() {
            return Err(WorkflowError::NoInput);
        }

        if let Some(remote) = remote {
            let plain = self.plain_questions(session);
            if plain.iter().any(|s| !s.questions.is_empty()) {
                match remote.deduplicate(&plain) {
                    Ok(found) if !found.is_empty() => {
                        let merged = found
                            .into_iter()
                            .enumerate()
                            .map(|(i, q)| q.into_merged(i + 1))
                            .collect();
                        return Ok(store(session, merged, DedupPath::Remote));
                    }
                    Ok(_) => warn!("Remote deduplication returned no questions, merging locally"),
                    Err(e) => warn!("Remote deduplication failed, merging locally: {}", e),
                }
            }
        }

        let pooled = self.pooled_candidates(session);
        if !pooled.is_empty() {
            let merged = self.deduplicator.deduplicate(&pooled);
            return Ok(store(session, merged, DedupPath::Similarity));
        }

        let merged = self.exact_match_questions(session);
        if merged.is_empty() {
            info!("No questions found in {} replies", session.ai_questions.len());
            return Ok(AnalysisOutcome::NoQuestions);
        }
        Ok(store(session, merged, DedupPath::ExactMatch))
    }

    /// Build the solve prompt and store it in the session
    ///
    /// Requires at least one answered question.
    pub fn generate_solve_prompt(&self, session: &mut Session) -> Result<String> {
        if session.problem.trim().is_empty() {
            return Err(WorkflowError::EmptyProblem);
        }
        if session.answered_count() == 0 {
            return Err(WorkflowError::NoAnswers);
        }
        let prompt =
            SolvePromptBuilder::new(session.problem.as_str(), session.questions_and_answers())
                .build();
        session.solve_prompt = prompt.clone();
        session.phase = Phase::SolvePrompt;
        session.touch();
        Ok(prompt)
    }

    /// Parse every non-empty solution reply in insertion order
    pub fn collect_solutions(&self, session: &mut Session) -> Result<Vec<SourceSolution>> {
        if !session.has_solution_input() {
            return Err(WorkflowError::NoInput);
        }
        let solutions: Vec<SourceSolution> = session
            .ai_solutions
            .iter()
            .filter(|s| !s.text.trim().is_empty())
            .map(|s| SourceSolution {
                source: s.source.clone(),
                report: extract_solution(&s.text),
            })
            .collect();
        session.phase = Phase::Synthesis;
        session.touch();
        Ok(solutions)
    }

    /// Synthesize the solution replies with a local summary only
    pub fn synthesize_locally(&self, session: &mut Session) -> Result<Synthesis> {
        self.synthesize(session, None::<&NoRemote>)
    }

    /// Parse the solution replies and combine them into one synthesis
    ///
    /// A supplied remote synthesizer is asked first; its failure, or a blank
    /// answer, falls back to [`Synthesis::local`]. The result is stored in
    /// the session.
    pub fn synthesize<R>(&self, session: &mut Session, remote: Option<&R>) -> Result<Synthesis>
    where
        R: RemoteSynthesizer,
        R::Error: Display,
    {
        let solutions = self.collect_solutions(session)?;

        let remote_summary = remote.and_then(|remote| {
            let replies: Vec<SourceText> = session
                .ai_solutions
                .iter()
                .filter(|s| !s.text.trim().is_empty())
                .cloned()
                .collect();
            match remote.synthesize(&session.problem, &replies) {
                Ok(summary) if !summary.trim().is_empty() => Some(summary.trim().to_string()),
                Ok(_) => {
                    warn!("Remote synthesis returned nothing, summarizing locally");
                    None
                }
                Err(e) => {
                    warn!("Remote synthesis failed, summarizing locally: {}", e);
                    None
                }
            }
        });

        let synthesis = match remote_summary {
            Some(summary) => Synthesis::remote(summary, solutions),
            None => Synthesis::local(solutions),
        };
        info!(
            "Synthesized {} solutions ({})",
            synthesis.solutions.len(),
            synthesis.origin
        );

        session.synthesis = Some(synthesis.clone());
        session.touch();
        Ok(synthesis)
    }

    /// Group the plain-extracted lines of every question reply by exact match
    pub fn exact_match_questions(&self, session: &Session) -> Vec<MergedQuestion> {
        local_deduplicate(&self.plain_questions(session))
    }

    /// Plain-extracted questions per non-empty question reply, in insertion order
    pub fn plain_questions(&self, session: &Session) -> Vec<SourceQuestions> {
        session
            .ai_questions
            .iter()
            .filter(|s| !s.text.trim().is_empty())
            .map(|s| SourceQuestions {
                source: s.source.clone(),
                questions: self.extractor.extract_plain(&s.text),
            })
            .collect()
    }

    fn pooled_candidates(&self, session: &Session) -> Vec<CandidateQuestion> {
        let mut pooled = Vec::new();
        for reply in session.ai_questions.iter().filter(|s| !s.text.trim().is_empty()) {
            let found = self.extractor.extract(&reply.text, &reply.source);
            debug!("Pooled {} candidates from {}", found.len(), reply.source);
            pooled.extend(found);
        }
        pooled
    }
}

impl Default for Workflow {
    fn default() -> Self {
        Self {
            extractor: Extractor::default(),
            deduplicator: Deduplicator::default(),
            max_questions: WorkflowConfig::default().max_questions,
        }
    }
}

fn store(session: &mut Session, merged: Vec<MergedQuestion>, path: DedupPath) -> AnalysisOutcome {
    let count = merged.len();
    info!("Stored {} merged questions ({:?})", count, path);
    session.questions = merged;
    session.phase = Phase::AnswerQuestions;
    session.touch();
    AnalysisOutcome::Questions { count, path }
}

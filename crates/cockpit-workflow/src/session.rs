//! Session state for one problem-solving run
//!
//! A session is an explicit value passed to every workflow operation. It
//! serializes to JSON so a run can be saved and resumed.

use crate::error::{Result, WorkflowError};
use crate::prompt::QuestionAnswer;
use crate::synthesis::Synthesis;
use cockpit_domain::{MergedQuestion, SourceText};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Where a session stands in the workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Waiting for a problem statement
    #[default]
    Problem,
    /// Clarifying-questions prompt generated
    QuestionsPrompt,
    /// Questions merged, waiting for answers
    AnswerQuestions,
    /// Solve prompt generated
    SolvePrompt,
    /// Solutions parsed and synthesized
    Synthesis,
}

impl Phase {
    /// Get the phase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Problem => "problem",
            Phase::QuestionsPrompt => "questions_prompt",
            Phase::AnswerQuestions => "answer_questions",
            Phase::SolvePrompt => "solve_prompt",
            Phase::Synthesis => "synthesis",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One problem-solving run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Time-ordered unique id
    pub id: String,

    /// Creation time (Unix seconds)
    pub created_at: u64,

    /// Last modification time (Unix seconds)
    pub updated_at: u64,

    /// Current phase
    #[serde(default)]
    pub phase: Phase,

    /// Problem statement
    #[serde(default)]
    pub problem: String,

    /// Last generated clarifying-questions prompt
    #[serde(default)]
    pub questions_prompt: String,

    /// Question replies in the order sources were added
    #[serde(default)]
    pub ai_questions: Vec<SourceText>,

    /// Merged questions with their answers
    #[serde(default)]
    pub questions: Vec<MergedQuestion>,

    /// Last generated solve prompt
    #[serde(default)]
    pub solve_prompt: String,

    /// Solution replies in the order sources were added
    #[serde(default)]
    pub ai_solutions: Vec<SourceText>,

    /// Result of the last synthesis step
    #[serde(default)]
    pub synthesis: Option<Synthesis>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Start an empty session
    pub fn new() -> Self {
        let now = unix_now();
        Self {
            id: Uuid::now_v7().to_string(),
            created_at: now,
            updated_at: now,
            phase: Phase::Problem,
            problem: String::new(),
            questions_prompt: String::new(),
            ai_questions: Vec::new(),
            questions: Vec::new(),
            solve_prompt: String::new(),
            ai_solutions: Vec::new(),
            synthesis: None,
        }
    }

    /// Set the problem statement
    ///
    /// Blank statements are rejected and leave the session untouched.
    pub fn set_problem(&mut self, problem: impl Into<String>) -> Result<()> {
        let problem = problem.into();
        if problem.trim().is_empty() {
            return Err(WorkflowError::EmptyProblem);
        }
        self.problem = problem.trim().to_string();
        self.touch();
        Ok(())
    }

    /// Store a source's question reply, replacing an earlier one from the same source
    pub fn set_ai_questions(&mut self, source: impl Into<String>, text: impl Into<String>) {
        upsert(&mut self.ai_questions, source.into(), text.into());
        self.touch();
    }

    /// Store a source's solution reply, replacing an earlier one from the same source
    pub fn set_ai_solution(&mut self, source: impl Into<String>, text: impl Into<String>) {
        upsert(&mut self.ai_solutions, source.into(), text.into());
        self.touch();
    }

    /// Record the answer to the question at `index` (0-based)
    pub fn set_answer(&mut self, index: usize, answer: impl Into<String>) -> Result<()> {
        let len = self.questions.len();
        let question = self
            .questions
            .get_mut(index)
            .ok_or(WorkflowError::QuestionIndex { index, len })?;
        question.answer = answer.into().trim().to_string();
        self.touch();
        Ok(())
    }

    /// Number of questions with a non-blank answer
    pub fn answered_count(&self) -> usize {
        self.questions.iter().filter(|q| q.is_answered()).count()
    }

    /// Question/answer pairs in question order, unanswered ones included
    pub fn questions_and_answers(&self) -> Vec<QuestionAnswer> {
        self.questions
            .iter()
            .map(|q| QuestionAnswer {
                question: q.text.clone(),
                answer: q.answer.clone(),
            })
            .collect()
    }

    /// True when at least one source supplied non-blank question text
    pub fn has_question_input(&self) -> bool {
        self.ai_questions.iter().any(|s| !s.text.trim().is_empty())
    }

    /// True when at least one source supplied non-blank solution text
    pub fn has_solution_input(&self) -> bool {
        self.ai_solutions.iter().any(|s| !s.text.trim().is_empty())
    }

    /// Update the modification time
    pub fn touch(&mut self) {
        self.updated_at = unix_now().max(self.created_at);
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Restore from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

fn upsert(entries: &mut Vec<SourceText>, source: String, text: String) {
    match entries.iter_mut().find(|e| e.source == source) {
        Some(entry) => entry.text = text,
        None => entries.push(SourceText { source, text }),
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

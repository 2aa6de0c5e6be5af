//! Cockpit Workflow
//!
//! Drives one problem-solving run: the problem statement becomes a
//! clarifying-questions prompt, the assistants' replies are extracted and
//! merged into one question list, the answered list becomes a solve prompt,
//! and the solution replies are parsed and combined into one synthesis.
//!
//! All state lives in an explicit [`Session`] value owned by the caller.
//!
//! # Example
//!
//! ```
//! use cockpit_workflow::{AnalysisOutcome, Session, Workflow};
//!
//! let workflow = Workflow::default();
//! let mut session = Session::new();
//! session.set_problem("Our nightly build keeps failing.").unwrap();
//! workflow.generate_questions_prompt(&mut session).unwrap();
//!
//! session.set_ai_questions("a", "1. (P1) (TAG:constraints) Which CI runner is used?");
//! session.set_ai_questions("b", "1. (P2) (TAG:constraints) Which CI runner is used here?");
//!
//! let outcome = workflow.analyze_questions_locally(&mut session).unwrap();
//! assert!(matches!(outcome, AnalysisOutcome::Questions { count: 1, .. }));
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod prompt;
mod session;
mod synthesis;
mod workflow;

pub use cockpit_domain::SourceText;
pub use config::WorkflowConfig;
pub use error::{Result, WorkflowError};
pub use prompt::{QuestionAnswer, QuestionsPromptBuilder, SolvePromptBuilder};
pub use session::{Phase, Session};
pub use synthesis::{SourceSolution, Synthesis, SynthesisOrigin, EXCERPT_CHARS};
pub use workflow::{AnalysisOutcome, DedupPath, Workflow};

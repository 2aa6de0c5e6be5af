//! Integration tests for the question-analysis step and the phase flow

use cockpit_domain::{Priority, RemoteDeduplicator, RemoteQuestion, SourceQuestions};
use cockpit_workflow::{
    AnalysisOutcome, DedupPath, Phase, Session, Workflow, WorkflowConfig, WorkflowError,
};
use std::sync::Mutex;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("service unavailable")]
struct Unavailable;

/// Remote service returning a fixed answer and recording what it was sent
struct MockRemote {
    response: Vec<RemoteQuestion>,
    received: Mutex<Vec<SourceQuestions>>,
}

impl MockRemote {
    fn new(response: Vec<RemoteQuestion>) -> Self {
        Self {
            response,
            received: Mutex::new(Vec::new()),
        }
    }
}

impl RemoteDeduplicator for MockRemote {
    type Error = Unavailable;

    fn deduplicate(&self, questions: &[SourceQuestions]) -> Result<Vec<RemoteQuestion>, Unavailable> {
        self.received.lock().unwrap().extend_from_slice(questions);
        Ok(self.response.clone())
    }
}

struct FailingRemote;

impl RemoteDeduplicator for FailingRemote {
    type Error = Unavailable;

    fn deduplicate(&self, _questions: &[SourceQuestions]) -> Result<Vec<RemoteQuestion>, Unavailable> {
        Err(Unavailable)
    }
}

fn session_with_replies() -> Session {
    let mut session = Session::new();
    session.set_problem("Our deploys are slow").unwrap();
    session.set_ai_questions(
        "chatgpt",
        "[QUESTIONS]\n1. (P2) (TAG:timeline) When is the deadline?\n2. (P1) (TAG:constraints) What is the total budget?\n[/QUESTIONS]",
    );
    session.set_ai_questions(
        "claude",
        "[QUESTIONS]\n1. (P1) (TAG:constraints) What is the total budget available?\n[/QUESTIONS]",
    );
    session
}

#[test]
fn test_local_analysis_merges_across_sources() {
    let workflow = Workflow::default();
    let mut session = session_with_replies();

    let outcome = workflow.analyze_questions_locally(&mut session).unwrap();
    assert_eq!(
        outcome,
        AnalysisOutcome::Questions {
            count: 2,
            path: DedupPath::Similarity
        }
    );
    assert_eq!(session.phase, Phase::AnswerQuestions);

    let budget = &session.questions[0];
    assert_eq!(budget.id, 1);
    assert_eq!(budget.priority, Priority::P1);
    assert_eq!(budget.text, "What is the total budget available?");
    assert_eq!(budget.sources, vec!["chatgpt", "claude"]);

    assert_eq!(session.questions[1].text, "When is the deadline?");
    assert_eq!(session.questions[1].id, 2);
}

#[test]
fn test_no_input_is_an_error() {
    let workflow = Workflow::default();
    let mut session = Session::new();
    session.set_ai_questions("chatgpt", "   ");

    let err = workflow.analyze_questions_locally(&mut session).unwrap_err();
    assert!(matches!(err, WorkflowError::NoInput));
}

#[test]
fn test_no_questions_leaves_session_unchanged() {
    let workflow = Workflow::default();
    let mut session = Session::new();
    session.set_ai_questions("chatgpt", "Sounds good. Ship it.");

    let outcome = workflow.analyze_questions_locally(&mut session).unwrap();
    assert_eq!(outcome, AnalysisOutcome::NoQuestions);
    assert!(session.questions.is_empty());
    assert_eq!(session.phase, Phase::Problem);
}

#[test]
fn test_remote_result_is_used() {
    let workflow = Workflow::default();
    let mut session = session_with_replies();
    let remote = MockRemote::new(vec![RemoteQuestion {
        question: "What is the budget?".to_string(),
        priority: Priority::P1,
        sources: vec!["chatgpt".to_string(), "claude".to_string(), "claude".to_string()],
        answer: String::new(),
    }]);

    let outcome = workflow.analyze_questions(&mut session, Some(&remote)).unwrap();
    assert_eq!(
        outcome,
        AnalysisOutcome::Questions {
            count: 1,
            path: DedupPath::Remote
        }
    );

    let merged = &session.questions[0];
    assert_eq!(merged.id, 1);
    assert_eq!(merged.tag, "other");
    assert_eq!(merged.sources, vec!["chatgpt", "claude"]);
    assert_eq!(merged.variants.len(), 2);

    let received = remote.received.lock().unwrap();
    assert_eq!(received.len(), 2);
    assert_eq!(received[0].source, "chatgpt");
    assert_eq!(received[0].questions.len(), 2);
    assert_eq!(received[1].source, "claude");
}

#[test]
fn test_remote_failure_falls_back_to_local() {
    let workflow = Workflow::default();
    let mut session = session_with_replies();

    let outcome = workflow
        .analyze_questions(&mut session, Some(&FailingRemote))
        .unwrap();
    assert_eq!(
        outcome,
        AnalysisOutcome::Questions {
            count: 2,
            path: DedupPath::Similarity
        }
    );
}

#[test]
fn test_empty_remote_answer_falls_back_to_local() {
    let workflow = Workflow::default();
    let mut session = session_with_replies();
    let remote = MockRemote::new(Vec::new());

    let outcome = workflow.analyze_questions(&mut session, Some(&remote)).unwrap();
    assert!(matches!(
        outcome,
        AnalysisOutcome::Questions {
            path: DedupPath::Similarity,
            ..
        }
    ));
}

#[test]
fn test_threshold_comes_from_config() {
    let mut config = WorkflowConfig::default();
    config.dedup.threshold = 1.0;
    let workflow = Workflow::new(config).unwrap();
    let mut session = session_with_replies();

    let outcome = workflow.analyze_questions_locally(&mut session).unwrap();
    assert!(matches!(outcome, AnalysisOutcome::Questions { count: 3, .. }));
}

#[test]
fn test_invalid_config_rejected() {
    let mut config = WorkflowConfig::default();
    config.dedup.threshold = -0.1;
    assert!(Workflow::new(config).is_err());
}

#[test]
fn test_full_phase_flow() {
    let workflow = Workflow::default();
    let mut session = Session::new();

    assert!(matches!(
        workflow.generate_questions_prompt(&mut session),
        Err(WorkflowError::EmptyProblem)
    ));

    session.set_problem("Our deploys are slow").unwrap();
    let prompt = workflow.generate_questions_prompt(&mut session).unwrap();
    assert!(prompt.contains("Our deploys are slow"));
    assert_eq!(session.questions_prompt, prompt);
    assert_eq!(session.phase, Phase::QuestionsPrompt);

    session.set_ai_questions(
        "gemini",
        "1. (P1) (TAG:resources) How many engineers can work on this?",
    );
    workflow.analyze_questions_locally(&mut session).unwrap();

    assert!(matches!(
        workflow.generate_solve_prompt(&mut session),
        Err(WorkflowError::NoAnswers)
    ));
    session.set_answer(0, "Two").unwrap();
    let solve = workflow.generate_solve_prompt(&mut session).unwrap();
    assert!(solve.contains("Q1: How many engineers can work on this?\nA1: Two"));
    assert_eq!(session.phase, Phase::SolvePrompt);

    assert!(matches!(
        workflow.collect_solutions(&mut session),
        Err(WorkflowError::NoInput)
    ));
    session.set_ai_solution(
        "gemini",
        "[STATUS]\nreadiness: ready\n[/STATUS]\n[SOLUTION]\nCache the images.\n[/SOLUTION]",
    );
    session.set_ai_solution("claude", "Use incremental builds.");
    let solutions = workflow.collect_solutions(&mut session).unwrap();
    assert_eq!(solutions.len(), 2);
    assert_eq!(solutions[0].source, "gemini");
    assert_eq!(solutions[0].report.solution, "Cache the images.");
    assert_eq!(solutions[1].report.solution, "Use incremental builds.");
    assert_eq!(session.phase, Phase::Synthesis);
}

#[test]
fn test_unstructured_replies_group_by_exact_match() {
    let workflow = Workflow::default();
    let mut session = Session::new();
    session.set_ai_questions("chatgpt", "- (P1) Budget constraints\n- (P2) Team size");
    session.set_ai_questions("claude", "- (P1) budget constraints");

    let outcome = workflow.analyze_questions_locally(&mut session).unwrap();
    assert_eq!(
        outcome,
        AnalysisOutcome::Questions {
            count: 2,
            path: DedupPath::ExactMatch
        }
    );
    assert_eq!(session.phase, Phase::AnswerQuestions);

    let summary: Vec<_> = session
        .questions
        .iter()
        .map(|q| (q.id, q.priority, q.tag.as_str(), q.text.as_str(), q.sources.clone()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (1, Priority::P2, "other", "Budget constraints", vec!["chatgpt".to_string(), "claude".to_string()]),
            (2, Priority::P2, "other", "Team size", vec!["chatgpt".to_string()]),
        ]
    );
}

#[test]
fn test_plain_questions_follow_insertion_order() {
    let workflow = Workflow::default();
    let mut session = Session::new();
    session.set_ai_questions("gemini", "1. Who decides?\n2. When is the deadline?");
    session.set_ai_questions("chatgpt", "   ");
    session.set_ai_questions("claude", "- Who decides?");

    let plain = workflow.plain_questions(&session);
    let sources: Vec<_> = plain.iter().map(|s| s.source.as_str()).collect();
    assert_eq!(sources, vec!["gemini", "claude"]);
    assert_eq!(plain[0].questions, vec!["Who decides?", "When is the deadline?"]);

    let merged = workflow.exact_match_questions(&session);
    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].sources, vec!["gemini", "claude"]);
}

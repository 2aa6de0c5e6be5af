//! Integration tests for the synthesis step

use cockpit_domain::{RemoteSynthesizer, SourceText};
use cockpit_workflow::{Phase, Session, SynthesisOrigin, Workflow, WorkflowError};
use std::sync::Mutex;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("service unavailable")]
struct Unavailable;

/// Synthesizer returning a fixed answer and recording what it was sent
struct MockSynthesizer {
    response: String,
    received: Mutex<Vec<(String, Vec<SourceText>)>>,
}

impl MockSynthesizer {
    fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            received: Mutex::new(Vec::new()),
        }
    }
}

impl RemoteSynthesizer for MockSynthesizer {
    type Error = Unavailable;

    fn synthesize(&self, problem: &str, solutions: &[SourceText]) -> Result<String, Unavailable> {
        self.received
            .lock()
            .unwrap()
            .push((problem.to_string(), solutions.to_vec()));
        Ok(self.response.clone())
    }
}

struct FailingSynthesizer;

impl RemoteSynthesizer for FailingSynthesizer {
    type Error = Unavailable;

    fn synthesize(&self, _problem: &str, _solutions: &[SourceText]) -> Result<String, Unavailable> {
        Err(Unavailable)
    }
}

fn session_with_solutions() -> Session {
    let mut session = Session::new();
    session.set_problem("Deploys take an hour").unwrap();
    session.set_ai_solution(
        "chatgpt",
        "[STATUS]\nreadiness: READY\n[/STATUS]\n[SOLUTION]\nCache the images.\n[/SOLUTION]\n\
         [NEXT_STEPS]\n1. Enable layer caching\n[/NEXT_STEPS]\n[RISKS]\n- Stale layers\n[/RISKS]",
    );
    session.set_ai_solution("claude", "");
    session.set_ai_solution("gemini", "Run the test stages in parallel.");
    session
}

#[test]
fn test_remote_synthesis_is_stored() {
    let workflow = Workflow::default();
    let mut session = session_with_solutions();
    let remote = MockSynthesizer::new("  Cache images and parallelize tests.  ");

    let synthesis = workflow.synthesize(&mut session, Some(&remote)).unwrap();
    assert_eq!(synthesis.origin, SynthesisOrigin::Remote);
    assert_eq!(synthesis.summary, "Cache images and parallelize tests.");
    assert_eq!(synthesis.solutions.len(), 2);
    assert_eq!(session.synthesis, Some(synthesis));
    assert_eq!(session.phase, Phase::Synthesis);

    let received = remote.received.lock().unwrap();
    assert_eq!(received.len(), 1);
    let (problem, replies) = &received[0];
    assert_eq!(problem, "Deploys take an hour");
    let sources: Vec<_> = replies.iter().map(|r| r.source.as_str()).collect();
    assert_eq!(sources, vec!["chatgpt", "gemini"]);
}

#[test]
fn test_remote_failure_falls_back_to_local_summary() {
    let workflow = Workflow::default();
    let mut session = session_with_solutions();

    let synthesis = workflow
        .synthesize(&mut session, Some(&FailingSynthesizer))
        .unwrap();
    assert_eq!(synthesis.origin, SynthesisOrigin::Local);
    assert!(synthesis.summary.contains("== chatgpt (READY) ==\nCache the images.\n"));
    assert!(synthesis.summary.contains("1. Enable layer caching"));
    assert!(synthesis.summary.contains("- Stale layers"));
    assert!(synthesis.summary.contains("== gemini (UNKNOWN) ==\nRun the test stages in parallel.\n"));
    assert!(!synthesis.summary.contains("claude"));
    assert_eq!(session.synthesis.as_ref().map(|s| s.origin), Some(SynthesisOrigin::Local));
}

#[test]
fn test_blank_remote_answer_falls_back_to_local_summary() {
    let workflow = Workflow::default();
    let mut session = session_with_solutions();
    let remote = MockSynthesizer::new("   ");

    let synthesis = workflow.synthesize(&mut session, Some(&remote)).unwrap();
    assert_eq!(synthesis.origin, SynthesisOrigin::Local);
}

#[test]
fn test_local_synthesis() {
    let workflow = Workflow::default();
    let mut session = session_with_solutions();

    let synthesis = workflow.synthesize_locally(&mut session).unwrap();
    assert_eq!(synthesis.origin, SynthesisOrigin::Local);
    assert!(synthesis.summary.starts_with("Summary of 2 solution(s)"));
}

#[test]
fn test_synthesis_requires_a_solution() {
    let workflow = Workflow::default();
    let mut session = Session::new();
    session.set_ai_solution("chatgpt", "  \n");

    let err = workflow.synthesize_locally(&mut session).unwrap_err();
    assert!(matches!(err, WorkflowError::NoInput));
    assert!(session.synthesis.is_none());
}

#[test]
fn test_synthesis_survives_session_round_trip() {
    let workflow = Workflow::default();
    let mut session = session_with_solutions();
    workflow.synthesize_locally(&mut session).unwrap();

    let restored = Session::from_json(&session.to_json().unwrap()).unwrap();
    assert_eq!(restored.synthesis, session.synthesis);
}

//! Prompt construction for the two assistant rounds

use cockpit_domain::{Priority, KNOWN_TAGS};
use serde::{Deserialize, Serialize};

/// A question with the user's answer, as fed into the solve prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionAnswer {
    /// Question text
    pub question: String,

    /// Answer text, empty if unanswered
    #[serde(default)]
    pub answer: String,
}

const QUESTIONS_INSTRUCTIONS: &str = r#"You are a precise problem analyst.
Do NOT propose a solution yet. Ask only the clarifying questions you need
before a solution can be given."#;

/// Builds the clarifying-questions prompt
pub struct QuestionsPromptBuilder {
    problem: String,
    max_questions: usize,
}

impl QuestionsPromptBuilder {
    /// Create a new prompt builder
    pub fn new(problem: impl Into<String>) -> Self {
        Self {
            problem: problem.into(),
            max_questions: 10,
        }
    }

    /// Limit the number of questions requested
    pub fn with_max_questions(mut self, max_questions: usize) -> Self {
        self.max_questions = max_questions.max(1);
        self
    }

    /// Build the complete prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str(QUESTIONS_INSTRUCTIONS);
        prompt.push_str(&format!(
            "\nAsk at most {} questions, most important first.\n\n",
            self.max_questions
        ));

        prompt.push_str("[PROBLEM]\n");
        prompt.push_str(self.problem.trim());
        prompt.push_str("\n[/PROBLEM]\n\n");

        prompt.push_str("Reply EXACTLY in this format and nothing else:\n");
        prompt.push_str("[QUESTIONS]\n");
        prompt.push_str("1. (P1) (TAG:constraints) Your most important question?\n");
        prompt.push_str("2. (P2) (TAG:objective) Your next question?\n");
        prompt.push_str("[/QUESTIONS]\n\n");

        prompt.push_str(&format!("Tags: {}\n", KNOWN_TAGS.join(" | ")));
        let priorities: Vec<String> = [Priority::P1, Priority::P2, Priority::P3]
            .iter()
            .map(|p| format!("{}={}", p, p.description()))
            .collect();
        prompt.push_str(&format!("Priorities: {}\n", priorities.join(", ")));

        prompt
    }
}

const SOLVE_FORMAT: &str = r#"Reply EXACTLY in this format:
[STATUS]
readiness: READY or NEEDS_INFO
[/STATUS]
[SOLUTION]
Your solution
[/SOLUTION]
[NEXT_STEPS]
1. First step
2. Second step
[/NEXT_STEPS]
[RISKS]
- A risk
[/RISKS]"#;

/// Builds the solve prompt from the problem and the answered questions
pub struct SolvePromptBuilder {
    problem: String,
    qa: Vec<QuestionAnswer>,
}

impl SolvePromptBuilder {
    /// Create a new prompt builder
    pub fn new(problem: impl Into<String>, qa: Vec<QuestionAnswer>) -> Self {
        Self {
            problem: problem.into(),
            qa,
        }
    }

    /// Build the complete prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str("You are a precise problem solver.\n");
        prompt.push_str("Solve the problem below using the clarifications provided.\n");
        prompt.push_str("If essential information is still missing, say so in the status.\n\n");

        prompt.push_str("[PROBLEM]\n");
        prompt.push_str(self.problem.trim());
        prompt.push_str("\n[/PROBLEM]\n\n");

        prompt.push_str("[QUESTIONS_AND_ANSWERS]\n");
        prompt.push_str(&self.format_qa());
        prompt.push_str("[/QUESTIONS_AND_ANSWERS]\n\n");

        prompt.push_str(SOLVE_FORMAT);
        prompt.push('\n');

        prompt
    }

    fn format_qa(&self) -> String {
        let mut block = String::new();
        for (i, qa) in self.qa.iter().enumerate() {
            let n = i + 1;
            let answer = match qa.answer.trim() {
                "" => "(not answered)",
                answer => answer,
            };
            block.push_str(&format!("Q{}: {}\nA{}: {}\n", n, qa.question.trim(), n, answer));
        }
        block
    }
}

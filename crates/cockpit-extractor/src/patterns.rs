//! Compiled patterns shared by the extraction strategies
//!
//! A pattern that fails to compile is held as `None` and simply matches
//! nothing, so extraction stays infallible.

use regex::Regex;
use std::sync::LazyLock;

macro_rules! pattern {
    ($name:ident, $regex_str:expr) => {
        pub(crate) static $name: LazyLock<Option<Regex>> =
            LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Structured cascade ─────────────────────────────────────────────────────
// Numbered patterns separate their parts with `[ \t]*` so a match never
// spans two lines.

// `1. (P1) (TAG:constraints) What is the budget?`
pattern!(
    RE_FULL_FORMAT,
    r"(?i)([0-9]+)\.[ \t]*\(P([1-3])\)[ \t]*\(TAG:(\w+)\)[ \t]*(.+)"
);

// `1. (P1) What is the budget?` (text stops at the next '(')
pattern!(RE_PRIORITY_ONLY, r"(?i)([0-9]+)\.[ \t]*\(P([1-3])\)[ \t]*([^(\n]+)");

// `1. What is the budget?`
pattern!(RE_SIMPLE_NUMBERED, r"([0-9]+)\.[ \t]*([^?\n]+\?)");

// Any run of text ending in '?' that does not cross a sentence boundary
pattern!(RE_ANY_QUESTION, r"[^.!?\n]+\?");

// Enumeration debris left at the start of a question: numbers, bullets,
// priority and tag annotations
pattern!(
    RE_LEADING_MARKERS,
    r"(?i)^(?:(?:[0-9]+[.)]|[-*•])\s+|\(P[1-3]\)\s*|\(TAG:\w+\)\s*)+"
);

// ── Plain line shapes ──────────────────────────────────────────────────────
pattern!(
    RE_LINE_NUMBERED_TAGGED,
    r"(?i)^[0-9]+[.)]\s*\(P[1-3]\)\s*\(TAG:\w+\)\s*(.+)$"
);
pattern!(RE_LINE_NUMBERED_PRIORITY, r"(?i)^[0-9]+[.)]\s*\(P[1-3]\)\s*(.+)$");
pattern!(RE_LINE_BULLET_PRIORITY, r"(?i)^[-*•]\s*\(P[1-3]\)\s*(.+)$");
pattern!(RE_LINE_NUMBERED_QUESTION, r"^[0-9]+[.)]\s*(.+\?)(?:\*\*)?$");
pattern!(RE_LINE_BULLET_QUESTION, r"^[-*•]\s+(.+\?)(?:\*\*)?$");
pattern!(RE_LINE_BOLD_LABEL, r"^\*\*(.+?)\*\*\s*:?\s*(.*)$");

// ── Solution sections ──────────────────────────────────────────────────────
pattern!(RE_STATUS_BLOCK, r"(?is)\[STATUS\](.*?)\[/STATUS\]");
pattern!(RE_READINESS, r"(?i)readiness:\s*(READY|NEEDS_INFO)");
pattern!(RE_SOLUTION_BLOCK, r"(?is)\[SOLUTION\](.*?)\[/SOLUTION\]");
pattern!(RE_NEXT_STEPS_BLOCK, r"(?is)\[NEXT_STEPS\](.*?)\[/NEXT_STEPS\]");
pattern!(RE_RISKS_BLOCK, r"(?is)\[RISKS\](.*?)\[/RISKS\]");
pattern!(RE_STEP_LINE, r"[0-9]+\.\s*(.+)");
pattern!(RE_RISK_LINE, r"[-•]\s*(.+)");

/// Build the pattern for a delimited `[TAG]...[/TAG]` block
pub(crate) fn block_pattern(tag: &str) -> Result<Regex, regex::Error> {
    let tag = regex::escape(tag);
    Regex::new(&format!(r"(?is)\[{tag}\](.*?)\[/{tag}\]"))
}

/// Interior of the first block matched by `pattern`, if any
pub(crate) fn block_interior<'t>(pattern: &LazyLock<Option<Regex>>, text: &'t str) -> Option<&'t str> {
    let re = pattern.as_ref()?;
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Strip leading enumeration markers and surrounding whitespace
pub(crate) fn clean_question(text: &str) -> String {
    let trimmed = text.trim();
    match RE_LEADING_MARKERS.as_ref() {
        Some(re) => re.replace(trimmed, "").trim().to_string(),
        None => trimmed.to_string(),
    }
}

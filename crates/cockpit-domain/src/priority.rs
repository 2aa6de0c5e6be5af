//! Priority module - urgency classes for questions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Urgency of a question
///
/// Variants are declared most-urgent first, so the derived ordering sorts
/// P1 before P2 before P3.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum Priority {
    /// Blocking: nothing sensible can be proposed without an answer
    P1,

    /// Important (the default when the input carries no priority)
    #[default]
    P2,

    /// Optional, nice to know
    P3,
}

impl Priority {
    /// Get the priority label ("P1", "P2", "P3")
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::P1 => "P1",
            Priority::P2 => "P2",
            Priority::P3 => "P3",
        }
    }

    /// Numeric rank, 1 being the most urgent
    pub fn rank(&self) -> u8 {
        match self {
            Priority::P1 => 1,
            Priority::P2 => 2,
            Priority::P3 => 3,
        }
    }

    /// Build a priority from its digit (1-3)
    pub fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            1 => Some(Priority::P1),
            2 => Some(Priority::P2),
            3 => Some(Priority::P3),
            _ => None,
        }
    }

    /// Parse "P1", "p2", "3", ...
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let digits = s
            .strip_prefix('P')
            .or_else(|| s.strip_prefix('p'))
            .unwrap_or(s);
        digits.parse::<u8>().ok().and_then(Self::from_rank)
    }

    /// Human description used in prompts and tables
    pub fn description(&self) -> &'static str {
        match self {
            Priority::P1 => "blocking",
            Priority::P2 => "important",
            Priority::P3 => "optional",
        }
    }

    /// The more urgent of two priorities
    pub fn most_urgent(self, other: Self) -> Self {
        self.min(other)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid priority: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::P1 < Priority::P2);
        assert!(Priority::P2 < Priority::P3);
        assert_eq!(Priority::default(), Priority::P2);
    }

    #[test]
    fn test_priority_parsing() {
        assert_eq!(Priority::parse("P1"), Some(Priority::P1));
        assert_eq!(Priority::parse("p3"), Some(Priority::P3));
        assert_eq!(Priority::parse(" 2 "), Some(Priority::P2));
        assert_eq!(Priority::parse("P4"), None);
        assert_eq!(Priority::parse("urgent"), None);
        assert!("P0".parse::<Priority>().is_err());
    }

    #[test]
    fn test_most_urgent() {
        assert_eq!(Priority::P3.most_urgent(Priority::P1), Priority::P1);
        assert_eq!(Priority::P2.most_urgent(Priority::P3), Priority::P2);
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier for a question: its 0-based position within one session's
/// sequence. Only unique within a single fetch result, never globally.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(usize);

impl QuestionId {
    /// Creates a new `QuestionId`
    #[must_use]
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    /// Returns the underlying position value
    #[must_use]
    pub fn value(&self) -> usize {
        self.0
    }
}

impl fmt::Debug for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionId({})", self.0)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for parsing an ID from a string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: &'static str,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from string", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for QuestionId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<usize>()
            .map(QuestionId::new)
            .map_err(|_| ParseIdError {
                kind: "QuestionId",
            })
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_id_display() {
        let id = QuestionId::new(7);
        assert_eq!(id.to_string(), "7");
    }

    #[test]
    fn question_id_from_str() {
        let id: QuestionId = "3".parse().unwrap();
        assert_eq!(id, QuestionId::new(3));
    }

    #[test]
    fn question_id_from_str_invalid() {
        let result = "not-a-number".parse::<QuestionId>();
        assert!(result.is_err());
    }

    #[test]
    fn question_id_roundtrip() {
        let original = QuestionId::new(42);
        let deserialized: QuestionId = original.to_string().parse().unwrap();
        assert_eq!(original, deserialized);
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Errors raised while building a question.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuestionError {
    #[error("question has no answer options")]
    NoOptions,

    #[error("correct answer {answer:?} is not among the options")]
    CorrectAnswerMissing { answer: String },

    #[error("question text is empty")]
    EmptyText,
}

/// Error type for parsing a difficulty tier from a string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown difficulty: {raw:?}")]
pub struct ParseDifficultyError {
    pub raw: String,
}

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

/// Difficulty tier of a trivia question.
///
/// The wire form (trivia API query parameter and response field, fallback
/// JSON) is the lowercase name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// All supported tiers, in ascending order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// The lowercase wire name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Capitalized label for display.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError { raw: s.to_string() }),
        }
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A display-ready multiple-choice question.
///
/// Text fields are HTML-entity-decoded and the options are already shuffled
/// by whoever built the question. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    text: String,
    options: Vec<String>,
    correct_answer: String,
    category: String,
    difficulty: Difficulty,
}

impl Question {
    /// Build a question, enforcing that the correct answer appears verbatim
    /// among the options.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyText` for blank question text,
    /// `QuestionError::NoOptions` for an empty option list, and
    /// `QuestionError::CorrectAnswerMissing` when the correct answer is not
    /// one of the options.
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
        category: impl Into<String>,
        difficulty: Difficulty,
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        let correct_answer = correct_answer.into();

        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        if options.is_empty() {
            return Err(QuestionError::NoOptions);
        }
        if !options.iter().any(|option| *option == correct_answer) {
            return Err(QuestionError::CorrectAnswerMissing {
                answer: correct_answer,
            });
        }

        Ok(Self {
            id,
            text,
            options,
            correct_answer,
            category: category.into(),
            difficulty,
        })
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn options(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn question_holds_correct_answer_in_options() {
        let question = Question::new(
            QuestionId::new(0),
            "What is the capital of France?",
            options(&["Berlin", "Paris", "Madrid", "Rome"]),
            "Paris",
            "Geography",
            Difficulty::Easy,
        )
        .unwrap();

        assert!(question.options().contains(&"Paris".to_string()));
        assert_eq!(question.correct_answer(), "Paris");
    }

    #[test]
    fn missing_correct_answer_is_rejected() {
        let err = Question::new(
            QuestionId::new(0),
            "What is the capital of France?",
            options(&["Berlin", "Madrid"]),
            "Paris",
            "Geography",
            Difficulty::Easy,
        )
        .unwrap_err();

        assert!(matches!(err, QuestionError::CorrectAnswerMissing { .. }));
    }

    #[test]
    fn empty_options_are_rejected() {
        let err = Question::new(
            QuestionId::new(0),
            "Anything?",
            Vec::new(),
            "Yes",
            "Misc",
            Difficulty::Medium,
        )
        .unwrap_err();

        assert!(matches!(err, QuestionError::NoOptions));
    }

    #[test]
    fn blank_text_is_rejected() {
        let err = Question::new(
            QuestionId::new(0),
            "   ",
            options(&["Yes"]),
            "Yes",
            "Misc",
            Difficulty::Medium,
        )
        .unwrap_err();

        assert!(matches!(err, QuestionError::EmptyText));
    }

    #[test]
    fn difficulty_roundtrips_through_strings() {
        for tier in Difficulty::ALL {
            let parsed: Difficulty = tier.as_str().parse().unwrap();
            assert_eq!(parsed, tier);
        }
    }

    #[test]
    fn unknown_difficulty_fails_to_parse() {
        let err = "impossible".parse::<Difficulty>().unwrap_err();
        assert_eq!(err.raw, "impossible");
    }

    #[test]
    fn difficulty_defaults_to_medium() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }
}

use serde::Deserialize;

use quiz_core::model::{Difficulty, Question, QuestionId};

use crate::error::FallbackError;

// Shipped inside the binary so the quiz works with no network at all.
// Records are already in normalized shape (decoded text, fixed option
// order, 0-based ids) and are used verbatim.
const BUNDLED_QUESTIONS: &str = include_str!("../data/questions.json");

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FallbackRecord {
    id: usize,
    question: String,
    options: Vec<String>,
    correct_answer: String,
    category: String,
    difficulty: Difficulty,
}

/// Load the bundled static question set.
///
/// # Errors
///
/// Returns `FallbackError` when the bundled JSON is malformed, violates the
/// question invariants, or is empty. All of these are fatal: there is
/// nothing left to fall back to.
pub fn fallback_questions() -> Result<Vec<Question>, FallbackError> {
    parse_questions(BUNDLED_QUESTIONS)
}

fn parse_questions(json: &str) -> Result<Vec<Question>, FallbackError> {
    let records: Vec<FallbackRecord> = serde_json::from_str(json)?;
    if records.is_empty() {
        return Err(FallbackError::Empty);
    }

    records
        .into_iter()
        .map(|record| {
            Question::new(
                QuestionId::new(record.id),
                record.question,
                record.options,
                record.correct_answer,
                record.category,
                record.difficulty,
            )
            .map_err(FallbackError::from)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_set_is_valid_and_nonempty() {
        let questions = fallback_questions().unwrap();
        assert!(!questions.is_empty());

        for (index, question) in questions.iter().enumerate() {
            assert_eq!(question.id(), QuestionId::new(index));
            assert!(
                question
                    .options()
                    .contains(&question.correct_answer().to_string()),
                "question {index} is missing its correct answer"
            );
        }
    }

    #[test]
    fn empty_document_is_rejected() {
        let err = parse_questions("[]").unwrap_err();
        assert!(matches!(err, FallbackError::Empty));
    }

    #[test]
    fn malformed_document_is_rejected() {
        let err = parse_questions("{ not json ").unwrap_err();
        assert!(matches!(err, FallbackError::Parse(_)));
    }

    #[test]
    fn record_missing_its_correct_answer_is_rejected() {
        let json = r#"[{
            "id": 0,
            "question": "Q?",
            "options": ["A", "B"],
            "correctAnswer": "C",
            "category": "Misc",
            "difficulty": "easy"
        }]"#;
        let err = parse_questions(json).unwrap_err();
        assert!(matches!(err, FallbackError::Question(_)));
    }
}

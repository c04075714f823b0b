use crate::model::ids::QuestionId;

/// Record of the user's answer to a single question.
///
/// Finalized at the moment the session advances past the question, not at
/// selection time. An empty `selected` string is the explicit "no answer
/// given" outcome and always scores as incorrect. The correct answer is
/// copied in so the record can be reviewed without the question list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAnswer {
    pub question_id: QuestionId,
    pub selected: String,
    pub correct_answer: String,
    pub is_correct: bool,
}

impl UserAnswer {
    #[must_use]
    pub fn new(
        question_id: QuestionId,
        selected: impl Into<String>,
        correct_answer: impl Into<String>,
    ) -> Self {
        let selected = selected.into();
        let correct_answer = correct_answer.into();
        let is_correct = selected == correct_answer;

        Self {
            question_id,
            selected,
            correct_answer,
            is_correct,
        }
    }

    /// True when no answer was selected before the question was committed.
    #[must_use]
    pub fn is_unanswered(&self) -> bool {
        self.selected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_answer_is_correct() {
        let answer = UserAnswer::new(QuestionId::new(0), "Paris", "Paris");
        assert!(answer.is_correct);
        assert!(!answer.is_unanswered());
    }

    #[test]
    fn mismatched_answer_is_incorrect() {
        let answer = UserAnswer::new(QuestionId::new(1), "7", "42");
        assert!(!answer.is_correct);
        assert_eq!(answer.correct_answer, "42");
    }

    #[test]
    fn empty_selection_is_unanswered_and_incorrect() {
        let answer = UserAnswer::new(QuestionId::new(2), "", "42");
        assert!(answer.is_unanswered());
        assert!(!answer.is_correct);
    }
}

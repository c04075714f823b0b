use quiz_core::model::QuizSummary;

use crate::vm::time_fmt::format_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerRowVm {
    /// 1-based question number for display.
    pub number: usize,
    pub selected_display: String,
    pub correct_answer: String,
    pub is_correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub score: usize,
    pub total: usize,
    pub incorrect: usize,
    pub percentage: u32,
    pub message: &'static str,
    pub completed_at_str: String,
    pub rows: Vec<AnswerRowVm>,
}

#[must_use]
pub fn map_results(summary: &QuizSummary) -> ResultsVm {
    let rows = summary
        .answers()
        .iter()
        .enumerate()
        .map(|(index, answer)| AnswerRowVm {
            number: index + 1,
            selected_display: if answer.is_unanswered() {
                "No answer selected".to_string()
            } else {
                answer.selected.clone()
            },
            correct_answer: answer.correct_answer.clone(),
            is_correct: answer.is_correct,
        })
        .collect();

    let percentage = summary.percentage();
    ResultsVm {
        score: summary.score(),
        total: summary.total_questions(),
        incorrect: summary.total_questions() - summary.score(),
        percentage,
        message: score_message(percentage),
        completed_at_str: format_datetime(summary.completed_at()),
        rows,
    }
}

fn score_message(percentage: u32) -> &'static str {
    if percentage >= 90 {
        "Outstanding!"
    } else if percentage >= 80 {
        "Excellent work!"
    } else if percentage >= 70 {
        "Good job!"
    } else if percentage >= 60 {
        "Not bad!"
    } else {
        "Keep practicing!"
    }
}

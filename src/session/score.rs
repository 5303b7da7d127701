use std::collections::HashMap;

use crate::models::{Question, QuestionId, Quiz};

/// Final result of an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl Score {
    /// Count questions whose recorded answer equals the correct option.
    /// Unanswered questions simply do not match.
    pub fn tally(quiz: &Quiz, answers: &HashMap<QuestionId, usize>) -> Self {
        let correct = quiz
            .questions
            .iter()
            .filter(|q| answers.get(&q.id).is_some_and(|&a| q.is_correct(a)))
            .count();

        Self {
            correct,
            total: quiz.questions.len(),
        }
    }

    /// Percentage of correct answers, rounded to the nearest whole number.
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.correct as f64 / self.total as f64) * 100.0).round() as u32
    }
}

/// Per-question status shown by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionStatus {
    Unanswered,
    /// Answered, correctness hidden until submission.
    Answered,
    Correct,
    Incorrect,
}

/// One row of the post-submission review.
#[derive(Debug, Clone, Copy)]
pub struct ReviewRow<'a> {
    pub number: usize,
    pub question: &'a Question,
    pub chosen: Option<usize>,
    pub status: QuestionStatus,
}

impl ReviewRow<'_> {
    pub fn is_correct(&self) -> bool {
        self.status == QuestionStatus::Correct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_rounds() {
        assert_eq!(Score { correct: 2, total: 3 }.percentage(), 67);
        assert_eq!(Score { correct: 1, total: 3 }.percentage(), 33);
        assert_eq!(Score { correct: 3, total: 3 }.percentage(), 100);
        assert_eq!(Score { correct: 0, total: 0 }.percentage(), 0);
    }
}

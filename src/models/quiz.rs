use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::question::{Question, QuestionId};

/// Difficulty tag attached to every quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown difficulty `{0}` (expected beginner, intermediate or advanced)")]
pub struct UnknownDifficulty(pub String);

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str() == wanted)
            .ok_or_else(|| UnknownDifficulty(s.to_string()))
    }
}

/// Structural problems that make a quiz unusable for a session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MalformedQuiz {
    #[error("quiz has no questions")]
    NoQuestions,

    #[error("quiz time limit must be at least one second")]
    ZeroTimeLimit,

    #[error("question {question} has {count} option(s), at least 2 are required")]
    TooFewOptions { question: QuestionId, count: usize },

    #[error("question {question} marks option {index} as correct but only has {options} options")]
    CorrectAnswerOutOfRange {
        question: QuestionId,
        index: usize,
        options: usize,
    },

    #[error("question id {0} is used more than once")]
    DuplicateQuestion(QuestionId),
}

/// A published quiz. Immutable for the lifetime of any session over it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub topic: String,
    pub difficulty: Difficulty,
    /// Time limit in whole seconds.
    #[serde(alias = "time_limit")]
    pub time_limit: u32,
    pub questions: Vec<Question>,
}

impl Quiz {
    /// Check the invariants a session relies on.
    ///
    /// # Errors
    ///
    /// Returns the first `MalformedQuiz` problem found, in question order.
    pub fn validate(&self) -> Result<(), MalformedQuiz> {
        if self.questions.is_empty() {
            return Err(MalformedQuiz::NoQuestions);
        }
        if self.time_limit == 0 {
            return Err(MalformedQuiz::ZeroTimeLimit);
        }

        let mut seen = HashSet::with_capacity(self.questions.len());
        for question in &self.questions {
            if !seen.insert(question.id) {
                return Err(MalformedQuiz::DuplicateQuestion(question.id));
            }
            if question.options.len() < 2 {
                return Err(MalformedQuiz::TooFewOptions {
                    question: question.id,
                    count: question.options.len(),
                });
            }
            if !question.has_option(question.correct_answer) {
                return Err(MalformedQuiz::CorrectAnswerOutOfRange {
                    question: question.id,
                    index: question.correct_answer,
                    options: question.options.len(),
                });
            }
        }

        Ok(())
    }

    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Whole minutes of the time limit, as shown on the intro card.
    pub fn time_limit_minutes(&self) -> u32 {
        self.time_limit / 60
    }
}

use std::fmt;

use thiserror::Error;

use super::state::Phase;
use crate::models::QuestionId;

/// A session operation, named in precondition errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Start,
    SelectAnswer,
    Advance,
    Retreat,
    Submit,
    Tick,
    Score,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Start => "start",
            Operation::SelectAnswer => "select an answer",
            Operation::Advance => "advance",
            Operation::Retreat => "go back",
            Operation::Submit => "submit",
            Operation::Tick => "tick",
            Operation::Score => "score",
        };
        f.write_str(name)
    }
}

/// Precondition violations. The session state is left untouched whenever
/// one of these is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("cannot {operation} while the session is {phase}")]
    WrongPhase { operation: Operation, phase: Phase },

    #[error("question {0} is not part of this quiz")]
    UnknownQuestion(QuestionId),

    #[error("option {index} is out of range for question {question} ({options} options)")]
    OptionOutOfRange {
        question: QuestionId,
        index: usize,
        options: usize,
    },
}

//! Quiz session state machine.
//!
//! A [`QuizSession`] owns one attempt at one quiz: it moves through
//! `NotStarted → Running → Submitted`, records answers per question,
//! counts down the time limit one tick at a time and scores the attempt.

mod error;
mod score;
mod sink;
mod state;

pub use error::{Operation, SessionError};
pub use score::{QuestionStatus, ReviewRow, Score};
pub use sink::CompletionSink;
pub use state::{Phase, QuizSession};

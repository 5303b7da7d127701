use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use uuid::Uuid;

use super::error::{Operation, SessionError};
use super::score::{QuestionStatus, ReviewRow, Score};
use super::sink::CompletionSink;
use crate::models::{MalformedQuiz, Question, QuestionId, Quiz};

/// Lifecycle position of a session. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Running,
    Submitted,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::NotStarted => "not started",
            Phase::Running => "running",
            Phase::Submitted => "submitted",
        };
        f.write_str(name)
    }
}

/// One learner's attempt at one quiz.
pub struct QuizSession {
    id: Uuid,
    quiz: Arc<Quiz>,
    phase: Phase,
    current_index: usize,
    /// Absent key means the question is unanswered.
    answers: HashMap<QuestionId, usize>,
    remaining: u32,
    final_score: Option<Score>,
    sink: Option<Box<dyn CompletionSink + Send>>,
}

impl QuizSession {
    /// Create a session over a quiz that has passed validation.
    ///
    /// # Errors
    ///
    /// Returns `MalformedQuiz` if the quiz breaks a structural invariant;
    /// such a session would never reach `Running`.
    pub fn new(quiz: impl Into<Arc<Quiz>>) -> Result<Self, MalformedQuiz> {
        let quiz = quiz.into();
        quiz.validate()?;

        Ok(Self {
            id: Uuid::new_v4(),
            remaining: quiz.time_limit,
            quiz,
            phase: Phase::NotStarted,
            current_index: 0,
            answers: HashMap::new(),
            final_score: None,
            sink: None,
        })
    }

    /// Attach the sink notified when the attempt is submitted.
    pub fn with_sink(mut self, sink: impl CompletionSink + Send + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn start(&mut self) -> Result<(), SessionError> {
        if self.phase != Phase::NotStarted {
            return Err(self.wrong_phase(Operation::Start));
        }

        self.phase = Phase::Running;
        self.remaining = self.quiz.time_limit;
        log::info!(
            "session {} started quiz {} ({} questions, {}s)",
            self.id,
            self.quiz.id,
            self.quiz.len(),
            self.remaining
        );
        Ok(())
    }

    /// Record or overwrite the answer for a question. Does not move on.
    pub fn select_answer(&mut self, question: QuestionId, option: usize) -> Result<(), SessionError> {
        self.ensure_running(Operation::SelectAnswer)?;

        let target = self
            .quiz
            .question(question)
            .ok_or(SessionError::UnknownQuestion(question))?;
        if !target.has_option(option) {
            return Err(SessionError::OptionOutOfRange {
                question,
                index: option,
                options: target.options.len(),
            });
        }

        log::debug!("session {}: question {} -> option {}", self.id, question, option);
        self.answers.insert(question, option);
        Ok(())
    }

    /// Answer the question currently shown.
    pub fn select_option(&mut self, option: usize) -> Result<(), SessionError> {
        let question = self.current_question().id;
        self.select_answer(question, option)
    }

    /// Move to the next question, or submit from the last one.
    pub fn advance(&mut self) -> Result<(), SessionError> {
        self.ensure_running(Operation::Advance)?;

        if self.is_last_question() {
            self.finish();
        } else {
            self.current_index += 1;
        }
        Ok(())
    }

    /// Move to the previous question. No-op on the first one.
    pub fn retreat(&mut self) -> Result<(), SessionError> {
        self.ensure_running(Operation::Retreat)?;

        self.current_index = self.current_index.saturating_sub(1);
        Ok(())
    }

    /// Submit the attempt. Repeated calls after submission do nothing.
    pub fn submit(&mut self) -> Result<(), SessionError> {
        match self.phase {
            Phase::Running => {
                self.finish();
                Ok(())
            }
            Phase::Submitted => Ok(()),
            Phase::NotStarted => Err(self.wrong_phase(Operation::Submit)),
        }
    }

    /// One elapsed second. Submits when the clock reaches zero.
    pub fn tick(&mut self) -> Result<(), SessionError> {
        self.ensure_running(Operation::Tick)?;

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            log::info!("session {}: time is up", self.id);
            self.finish();
        }
        Ok(())
    }

    /// Score of a submitted attempt.
    pub fn score(&self) -> Result<Score, SessionError> {
        if self.phase != Phase::Submitted {
            return Err(self.wrong_phase(Operation::Score));
        }
        Ok(Score::tally(&self.quiz, &self.answers))
    }

    /// Score frozen at the moment of submission.
    pub fn final_score(&self) -> Option<Score> {
        self.final_score
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> &Question {
        &self.quiz.questions[self.current_index]
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 == self.quiz.len()
    }

    /// Remaining time in whole seconds.
    pub fn remaining_seconds(&self) -> u32 {
        self.remaining
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.quiz.time_limit - self.remaining
    }

    /// Fraction of the quiz reached, counting the current question.
    pub fn progress(&self) -> f64 {
        (self.current_index + 1) as f64 / self.quiz.len() as f64
    }

    pub fn answer_for(&self, question: QuestionId) -> Option<usize> {
        self.answers.get(&question).copied()
    }

    pub fn current_answer(&self) -> Option<usize> {
        self.answer_for(self.current_question().id)
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Correctness is only revealed once the attempt is submitted.
    pub fn question_status(&self, question: QuestionId) -> Option<QuestionStatus> {
        let target = self.quiz.question(question)?;
        Some(self.status_of(target))
    }

    /// Per-question review, available once submitted.
    pub fn review(&self) -> Option<Vec<ReviewRow<'_>>> {
        if self.phase != Phase::Submitted {
            return None;
        }

        let rows = self
            .quiz
            .questions
            .iter()
            .enumerate()
            .map(|(index, question)| ReviewRow {
                number: index + 1,
                question,
                chosen: self.answer_for(question.id),
                status: self.status_of(question),
            })
            .collect();
        Some(rows)
    }

    fn status_of(&self, question: &Question) -> QuestionStatus {
        match (self.answer_for(question.id), self.phase) {
            (None, _) => QuestionStatus::Unanswered,
            (Some(answer), Phase::Submitted) if question.is_correct(answer) => {
                QuestionStatus::Correct
            }
            (Some(_), Phase::Submitted) => QuestionStatus::Incorrect,
            (Some(_), _) => QuestionStatus::Answered,
        }
    }

    fn finish(&mut self) {
        self.phase = Phase::Submitted;
        let score = Score::tally(&self.quiz, &self.answers);
        self.final_score = Some(score);

        log::info!(
            "session {} submitted quiz {}: {}/{} after {}s",
            self.id,
            self.quiz.id,
            score.correct,
            score.total,
            self.elapsed_seconds()
        );

        if let Some(mut sink) = self.sink.take() {
            sink.completed(score);
        }
    }

    fn ensure_running(&self, operation: Operation) -> Result<(), SessionError> {
        if self.phase == Phase::Running {
            Ok(())
        } else {
            Err(self.wrong_phase(operation))
        }
    }

    fn wrong_phase(&self, operation: Operation) -> SessionError {
        SessionError::WrongPhase {
            operation,
            phase: self.phase,
        }
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("id", &self.id)
            .field("quiz", &self.quiz.id)
            .field("phase", &self.phase)
            .field("current_index", &self.current_index)
            .field("answers", &self.answers)
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

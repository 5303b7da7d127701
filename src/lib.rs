//! # quiz-session
//!
//! A timed multiple-choice quiz session with a terminal front-end.
//!
//! The core is [`QuizSession`], a state machine for one attempt at one
//! [`Quiz`]: it is started, answers are recorded per question, the clock is
//! ticked down once per second and the attempt is scored on submission.
//! [`QuizRunner`] drives a session from a [`Catalog`] in the terminal.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_session::{AppError, Catalog, QuizRunner};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let catalog = Catalog::from_json("quizzes.json")?;
//!     QuizRunner::new(catalog).run().await
//! }
//! ```
//!
//! The session can also be driven directly:
//!
//! ```rust
//! use quiz_session::{Catalog, QuizSession};
//!
//! let catalog = Catalog::builtin().unwrap();
//! let quiz = catalog.find("1").unwrap().clone();
//!
//! let mut session = QuizSession::new(quiz).unwrap();
//! session.start().unwrap();
//! session.select_option(0).unwrap();
//! session.submit().unwrap();
//!
//! let score = session.score().unwrap();
//! assert_eq!((score.correct, score.total), (1, 3));
//! ```

mod app;
pub mod countdown;
mod data;
pub mod logging;
mod models;
pub mod session;
pub mod terminal;
mod ui;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;

pub use app::App;
pub use countdown::{Countdown, Tick};
pub use data::{
    Catalog, CatalogError, DRAWN_TIME_LIMIT, LoadError, load_quizzes_from_json, parse_quizzes,
};
pub use models::{
    AppState, Difficulty, MalformedQuiz, Question, QuestionId, Quiz, UnknownDifficulty,
};
pub use session::{
    CompletionSink, Phase, QuestionStatus, QuizSession, ReviewRow, Score, SessionError,
};
pub use ui::format_clock;

/// How long the event loop waits for a key before redrawing.
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Top-level error for running the quiz application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to load quizzes: {0}")]
    Load(#[from] LoadError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Quiz cannot be played: {0}")]
    Malformed(#[from] MalformedQuiz),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to set up logging: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// Runs quizzes from a catalog in the terminal.
pub struct QuizRunner {
    app: App,
}

impl QuizRunner {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            app: App::new(catalog),
        }
    }

    /// Skip the catalog and open a quiz on its intro screen.
    pub fn open(&mut self, quiz: Arc<Quiz>) -> Result<(), AppError> {
        self.app.open_quiz(quiz)?;
        Ok(())
    }

    /// Take over the terminal until the user quits.
    ///
    /// Must be called from within a tokio runtime; the countdown runs as a
    /// spawned task.
    pub async fn run(mut self) -> Result<(), AppError> {
        let mut guard = terminal::TerminalGuard::enter()?;
        let result = run_event_loop(guard.terminal_mut(), &mut self.app).await;
        drop(guard);
        result
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

async fn run_event_loop(terminal: &mut terminal::QuizTerminal, app: &mut App) -> Result<(), AppError> {
    loop {
        app.poll_ticks();
        terminal.draw(|frame| ui::render(frame, app))?;

        if app.should_quit() {
            break;
        }

        if event::poll(INPUT_POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_input(app, key.code);
                }
            }
        } else {
            tokio::task::yield_now().await;
        }
    }

    Ok(())
}

fn handle_input(app: &mut App, key: KeyCode) {
    match app.state {
        AppState::Catalog => handle_catalog_input(app, key),
        AppState::Intro => handle_intro_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Result => handle_result_input(app, key),
    }
}

fn handle_catalog_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.catalog_next(),
        KeyCode::Up | KeyCode::Char('k') => app.catalog_previous(),
        KeyCode::Enter => {
            if let Err(e) = app.open_selected() {
                log::error!("cannot open quiz: {}", e);
            }
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
}

fn handle_intro_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Enter => app.start_quiz(),
        KeyCode::Esc => app.exit_to_catalog(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => app.choose_option(),
        KeyCode::Right | KeyCode::Char('n') => app.next_question(),
        KeyCode::Left | KeyCode::Char('p') => app.previous_question(),
        KeyCode::Char('s') | KeyCode::Char('S') => app.submit_quiz(),
        KeyCode::Esc => app.exit_to_catalog(),
        _ => {}
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Esc => app.continue_learning(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, keys: &[KeyCode]) {
        for &key in keys {
            handle_input(app, key);
        }
    }

    #[tokio::test]
    async fn test_keyboard_walkthrough() {
        let mut app = App::new(Catalog::builtin().unwrap());

        // open "React Basics": correct answers are 1 and 1
        press(&mut app, &[KeyCode::Char('j'), KeyCode::Enter]);
        assert_eq!(app.state, AppState::Intro);

        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.state, AppState::Quiz);

        press(
            &mut app,
            &[
                KeyCode::Char('j'),
                KeyCode::Enter,
                KeyCode::Char('n'),
                KeyCode::Char('j'),
                KeyCode::Char(' '),
                KeyCode::Right,
            ],
        );
        assert_eq!(app.state, AppState::Result);
        assert_eq!(
            app.session().and_then(QuizSession::final_score),
            Some(Score { correct: 2, total: 2 })
        );

        press(&mut app, &[KeyCode::Char('c')]);
        assert_eq!(app.state, AppState::Catalog);

        press(&mut app, &[KeyCode::Char('q')]);
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_escape_from_quiz_returns_to_catalog() {
        let mut app = App::new(Catalog::builtin().unwrap());
        press(&mut app, &[KeyCode::Enter, KeyCode::Enter, KeyCode::Esc]);
        assert_eq!(app.state, AppState::Catalog);
        assert!(!app.is_countdown_running());
    }

    #[tokio::test]
    async fn test_submit_key_ends_attempt() {
        let mut app = App::new(Catalog::builtin().unwrap());
        press(&mut app, &[KeyCode::Enter, KeyCode::Enter, KeyCode::Char('s')]);
        assert_eq!(app.state, AppState::Result);
        assert_eq!(app.notice(), Some("Quiz completed! You scored 0 out of 3"));
    }
}

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::countdown::{Countdown, Tick};
use crate::data::Catalog;
use crate::models::{AppState, MalformedQuiz, Quiz};
use crate::session::{QuizSession, Score, SessionError};

/// Front-end state: catalog cursor, the active session and its countdown.
pub struct App {
    pub state: AppState,
    catalog: Catalog,
    catalog_cursor: usize,
    session: Option<QuizSession>,
    countdown: Option<Countdown>,
    ticks: Option<mpsc::UnboundedReceiver<Tick>>,
    completions_tx: mpsc::UnboundedSender<Score>,
    completions: mpsc::UnboundedReceiver<Score>,
    selected_option: usize,
    result_scroll: usize,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        let (completions_tx, completions) = mpsc::unbounded_channel();

        Self {
            state: AppState::Catalog,
            catalog,
            catalog_cursor: 0,
            session: None,
            countdown: None,
            ticks: None,
            completions_tx,
            completions,
            selected_option: 0,
            result_scroll: 0,
            notice: None,
            should_quit: false,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_cursor(&self) -> usize {
        self.catalog_cursor
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn is_countdown_running(&self) -> bool {
        self.countdown.is_some()
    }

    pub fn catalog_next(&mut self) {
        if !self.catalog.is_empty() {
            self.catalog_cursor = (self.catalog_cursor + 1) % self.catalog.len();
        }
    }

    pub fn catalog_previous(&mut self) {
        if !self.catalog.is_empty() {
            let len = self.catalog.len();
            self.catalog_cursor = (self.catalog_cursor + len - 1) % len;
        }
    }

    /// Open the quiz under the catalog cursor on its intro screen.
    pub fn open_selected(&mut self) -> Result<(), MalformedQuiz> {
        match self.catalog.get(self.catalog_cursor).cloned() {
            Some(quiz) => self.open_quiz(quiz),
            None => Ok(()),
        }
    }

    pub fn open_quiz(&mut self, quiz: Arc<Quiz>) -> Result<(), MalformedQuiz> {
        self.stop_countdown();

        let tx = self.completions_tx.clone();
        let session = QuizSession::new(quiz)?.with_sink(move |score: Score| {
            let _ = tx.send(score);
        });
        log::debug!("opened session {} for quiz {}", session.id(), session.quiz().id);

        self.session = Some(session);
        self.state = AppState::Intro;
        self.selected_option = 0;
        self.result_scroll = 0;
        self.notice = None;
        Ok(())
    }

    /// Start the opened session and its countdown.
    pub fn start_quiz(&mut self) {
        let started = self.apply(QuizSession::start);
        if started && self.session.as_ref().is_some_and(QuizSession::is_running) {
            let (countdown, ticks) = Countdown::every_second();
            self.countdown = Some(countdown);
            self.ticks = Some(ticks);
            self.state = AppState::Quiz;
            self.sync_cursor();
        }
    }

    pub fn select_next_option(&mut self) {
        if let Some(count) = self.option_count() {
            self.selected_option = (self.selected_option + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        if let Some(count) = self.option_count() {
            self.selected_option = (self.selected_option + count - 1) % count;
        }
    }

    /// Record the highlighted option for the current question.
    pub fn choose_option(&mut self) {
        let option = self.selected_option;
        self.apply(|session| session.select_option(option));
    }

    /// Next question, or submit on the last one. Does nothing while the
    /// current question is unanswered.
    pub fn next_question(&mut self) {
        let answered = self
            .session
            .as_ref()
            .is_some_and(|s| s.current_answer().is_some());
        if answered {
            self.apply(QuizSession::advance);
            self.sync_cursor();
        }
    }

    pub fn previous_question(&mut self) {
        self.apply(QuizSession::retreat);
        self.sync_cursor();
    }

    pub fn submit_quiz(&mut self) {
        self.apply(QuizSession::submit);
    }

    /// Apply ticks delivered by the countdown since the last call.
    pub fn poll_ticks(&mut self) {
        let mut pending = 0;
        if let Some(ticks) = self.ticks.as_mut() {
            while ticks.try_recv().is_ok() {
                pending += 1;
            }
        }
        for _ in 0..pending {
            self.on_tick();
        }
    }

    pub fn on_tick(&mut self) {
        if self.session.as_ref().is_some_and(QuizSession::is_running) {
            self.apply(QuizSession::tick);
        }
    }

    pub fn scroll_results_down(&mut self) {
        let rows = self.session.as_ref().map_or(0, |s| s.quiz().len());
        if self.result_scroll + 1 < rows {
            self.result_scroll += 1;
        }
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    /// Leave the current quiz without a result and return to the catalog.
    pub fn exit_to_catalog(&mut self) {
        self.stop_countdown();
        if let Some(session) = self.session.take() {
            log::info!("session {} discarded in phase {}", session.id(), session.phase());
        }
        self.state = AppState::Catalog;
        self.selected_option = 0;
        self.result_scroll = 0;
    }

    /// Hand control back to the catalog after reviewing a result.
    pub fn continue_learning(&mut self) {
        if let Some(score) = self.session.as_ref().and_then(QuizSession::final_score) {
            log::info!("quiz completed: {}/{}", score.correct, score.total);
        }
        self.exit_to_catalog();
    }

    /// Run a session operation, then bring the countdown and screen in
    /// line with the session phase. Returns false if the operation was
    /// rejected.
    fn apply<F>(&mut self, op: F) -> bool
    where
        F: FnOnce(&mut QuizSession) -> Result<(), SessionError>,
    {
        let Some(session) = self.session.as_mut() else {
            return false;
        };

        let outcome = op(session);
        if let Err(e) = &outcome {
            log::warn!("session {}: {}", session.id(), e);
        }
        self.sync();
        outcome.is_ok()
    }

    fn sync(&mut self) {
        let phase_left_running = self
            .session
            .as_ref()
            .is_some_and(|s| !s.is_running() && self.countdown.is_some());
        if phase_left_running {
            self.stop_countdown();
        }

        while let Ok(score) = self.completions.try_recv() {
            self.notice = Some(format!(
                "Quiz completed! You scored {} out of {}",
                score.correct, score.total
            ));
            if self.state == AppState::Quiz {
                self.state = AppState::Result;
                self.result_scroll = 0;
            }
        }
    }

    fn stop_countdown(&mut self) {
        if let Some(countdown) = self.countdown.take() {
            countdown.stop();
        }
        self.ticks = None;
    }

    fn option_count(&self) -> Option<usize> {
        let session = self.session.as_ref().filter(|s| s.is_running())?;
        Some(session.current_question().options.len())
    }

    /// Put the option cursor on the recorded answer, or the first option.
    fn sync_cursor(&mut self) {
        self.selected_option = self
            .session
            .as_ref()
            .filter(|s| s.is_running())
            .and_then(QuizSession::current_answer)
            .unwrap_or(0);
    }
}

/// Which screen the terminal front-end is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Picking a quiz from the catalog.
    #[default]
    Catalog,
    /// Quiz intro card, session not started yet.
    Intro,
    /// Answering questions while the countdown runs.
    Quiz,
    /// Reviewing the scored attempt.
    Result,
}

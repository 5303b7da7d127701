mod question;
mod quiz;
mod state;

pub use question::{Question, QuestionId};
pub use quiz::{Difficulty, MalformedQuiz, Quiz, UnknownDifficulty};
pub use state::AppState;

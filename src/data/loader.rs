use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::{MalformedQuiz, Quiz};

/// Errors raised while reading a quiz catalog file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("quiz {quiz} in {} is malformed: {source}", path.display())]
    Malformed {
        path: PathBuf,
        quiz: String,
        #[source]
        source: MalformedQuiz,
    },

    #[error("quiz id {quiz} appears more than once in {}", path.display())]
    DuplicateQuiz { path: PathBuf, quiz: String },

    #[error("{} must contain at least one quiz", path.display())]
    Empty { path: PathBuf },
}

/// Read and validate a JSON array of quizzes.
pub fn load_quizzes_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Quiz>, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let quizzes = parse_quizzes(&json_content, path)?;
    log::info!("loaded {} quizzes from {}", quizzes.len(), path.display());
    Ok(quizzes)
}

/// Parse and validate quiz JSON. `origin` is only used in error messages.
pub fn parse_quizzes(json: &str, origin: &Path) -> Result<Vec<Quiz>, LoadError> {
    let quizzes: Vec<Quiz> = serde_json::from_str(json).map_err(|source| LoadError::Parse {
        path: origin.to_path_buf(),
        source,
    })?;

    if quizzes.is_empty() {
        return Err(LoadError::Empty {
            path: origin.to_path_buf(),
        });
    }

    let mut ids = HashSet::with_capacity(quizzes.len());
    for quiz in &quizzes {
        quiz.validate().map_err(|source| LoadError::Malformed {
            path: origin.to_path_buf(),
            quiz: quiz.id.clone(),
            source,
        })?;
        if !ids.insert(quiz.id.as_str()) {
            return Err(LoadError::DuplicateQuiz {
                path: origin.to_path_buf(),
                quiz: quiz.id.clone(),
            });
        }
    }

    Ok(quizzes)
}

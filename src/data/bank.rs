use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use super::loader::LoadError;
use crate::models::{Difficulty, Question, Quiz};

/// Question pools keyed by topic and difficulty, the source for drawn quizzes.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    pools: HashMap<String, HashMap<Difficulty, Vec<Question>>>,
}

impl QuestionBank {
    /// Parse a `{ topic: { difficulty: [question, ...] } }` table.
    pub fn parse(json: &str, origin: &Path) -> Result<Self, LoadError> {
        let raw: HashMap<String, HashMap<Difficulty, Vec<Question>>> = serde_json::from_str(json)
            .map_err(|source| LoadError::Parse {
                path: origin.to_path_buf(),
                source,
            })?;

        let pools = raw
            .into_iter()
            .map(|(topic, levels)| (topic.to_ascii_lowercase(), levels))
            .collect();
        Ok(Self { pools })
    }

    /// Pool every quiz's questions under its topic and difficulty. The
    /// first question seen with a given id wins.
    pub fn from_quizzes(quizzes: &[Arc<Quiz>]) -> Self {
        let mut bank = Self::default();
        for quiz in quizzes {
            let pool = bank
                .pools
                .entry(quiz.topic.to_ascii_lowercase())
                .or_default()
                .entry(quiz.difficulty)
                .or_default();
            for question in &quiz.questions {
                if !pool.iter().any(|q| q.id == question.id) {
                    pool.push(question.clone());
                }
            }
        }
        bank
    }

    /// Questions for a topic (case-insensitive) and difficulty.
    pub fn pool(&self, topic: &str, difficulty: Difficulty) -> Option<&[Question]> {
        self.pools
            .get(&topic.to_ascii_lowercase())?
            .get(&difficulty)
            .map(Vec::as_slice)
            .filter(|questions| !questions.is_empty())
    }
}

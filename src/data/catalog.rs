use std::path::Path;
use std::sync::Arc;

use rand::Rng;
use thiserror::Error;

use super::bank::QuestionBank;
use super::loader::{LoadError, load_quizzes_from_json, parse_quizzes};
use crate::models::{Difficulty, Quiz};

const BUILTIN_CATALOG: &str = include_str!("builtin.json");
const BUILTIN_BANK: &str = include_str!("question_bank.json");

/// Time limit given to quizzes assembled by [`Catalog::draw`].
pub const DRAWN_TIME_LIMIT: u32 = 300;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("no quiz with id `{0}`")]
    UnknownQuiz(String),

    #[error("no {difficulty} quiz available for topic `{topic}`")]
    NotFound {
        topic: String,
        difficulty: Difficulty,
    },
}

/// The set of quizzes a learner can pick from, plus the question pools
/// that [`Catalog::draw`] samples.
#[derive(Debug, Clone)]
pub struct Catalog {
    quizzes: Vec<Arc<Quiz>>,
    bank: QuestionBank,
}

impl Catalog {
    /// The quizzes and question bank shipped with the binary.
    pub fn builtin() -> Result<Self, LoadError> {
        let quizzes = parse_quizzes(BUILTIN_CATALOG, Path::new("<builtin>"))?;
        let bank = QuestionBank::parse(BUILTIN_BANK, Path::new("<builtin bank>"))?;
        Ok(Self {
            quizzes: quizzes.into_iter().map(Arc::new).collect(),
            bank,
        })
    }

    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        load_quizzes_from_json(path).map(Self::from_quizzes)
    }

    /// A catalog whose draw pools are built from the quizzes' own questions.
    pub fn from_quizzes(quizzes: Vec<Quiz>) -> Self {
        let quizzes: Vec<Arc<Quiz>> = quizzes.into_iter().map(Arc::new).collect();
        let bank = QuestionBank::from_quizzes(&quizzes);
        Self { quizzes, bank }
    }

    pub fn quizzes(&self) -> &[Arc<Quiz>] {
        &self.quizzes
    }

    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Arc<Quiz>> {
        self.quizzes.get(index)
    }

    pub fn find(&self, id: &str) -> Result<&Arc<Quiz>, CatalogError> {
        self.quizzes
            .iter()
            .find(|q| q.id == id)
            .ok_or_else(|| CatalogError::UnknownQuiz(id.to_string()))
    }

    fn exact(&self, topic: &str, difficulty: Difficulty) -> Option<&Arc<Quiz>> {
        self.quizzes
            .iter()
            .find(|q| q.topic.eq_ignore_ascii_case(topic) && q.difficulty == difficulty)
    }

    /// Quiz for a topic and difficulty, or the first quiz when none matches.
    pub fn matching(&self, topic: &str, difficulty: Difficulty) -> Option<&Arc<Quiz>> {
        self.exact(topic, difficulty).or_else(|| self.quizzes.first())
    }

    /// Distinct topics in catalog order.
    pub fn topics(&self) -> Vec<&str> {
        let mut topics: Vec<&str> = Vec::new();
        for quiz in &self.quizzes {
            if !topics.contains(&quiz.topic.as_str()) {
                topics.push(quiz.topic.as_str());
            }
        }
        topics
    }

    /// Assemble a fresh quiz from a random sample of up to `count`
    /// questions of the topic's pool, keeping their pool order.
    /// At least one question is always drawn.
    pub fn draw<R: Rng + ?Sized>(
        &self,
        topic: &str,
        difficulty: Difficulty,
        count: usize,
        rng: &mut R,
    ) -> Result<Quiz, CatalogError> {
        let pool = self
            .bank
            .pool(topic, difficulty)
            .ok_or_else(|| CatalogError::NotFound {
                topic: topic.to_string(),
                difficulty,
            })?;

        let amount = count.clamp(1, pool.len());
        let mut picked = rand::seq::index::sample(rng, pool.len(), amount).into_vec();
        picked.sort_unstable();

        let topic = topic.to_ascii_lowercase();
        Ok(Quiz {
            id: format!("{}_{}_{}", topic, difficulty, rng.gen_range(1000..=9999)),
            title: format!("{} - {} Level", capitalize(&topic), capitalize(difficulty.as_str())),
            topic,
            difficulty,
            time_limit: DRAWN_TIME_LIMIT,
            questions: picked.into_iter().map(|i| pool[i].clone()).collect(),
        })
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::models::QuestionId;

    fn drawn_ids(quiz: &Quiz) -> Vec<QuestionId> {
        quiz.questions.iter().map(|q| q.id).collect()
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.quizzes().iter().all(|q| q.validate().is_ok()));

        let first = catalog.find("1").unwrap();
        assert_eq!(first.title, "JavaScript Fundamentals");
        assert_eq!(first.time_limit, 300);
        assert_eq!(catalog.find("2").unwrap().time_limit, 450);
    }

    #[test]
    fn test_unknown_quiz_id() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(
            catalog.find("404").unwrap_err(),
            CatalogError::UnknownQuiz("404".to_string())
        );
    }

    #[test]
    fn test_matching_falls_back_to_first() {
        let catalog = Catalog::builtin().unwrap();

        let react = catalog.matching("React", Difficulty::Intermediate).unwrap();
        assert_eq!(react.id, "2");

        let fallback = catalog.matching("python", Difficulty::Advanced).unwrap();
        assert_eq!(fallback.id, "1");
    }

    #[test]
    fn test_topics_are_distinct() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.topics(), vec!["javascript", "react"]);
    }

    #[test]
    fn test_draw_samples_in_order() {
        let catalog = Catalog::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let quiz = catalog
            .draw("javascript", Difficulty::Beginner, 2, &mut rng)
            .unwrap();
        assert_eq!(quiz.len(), 2);
        assert!(quiz.questions.windows(2).all(|w| w[0].id < w[1].id));
        assert_eq!(quiz.title, "Javascript - Beginner Level");
        assert!(quiz.id.starts_with("javascript_beginner_"));
        assert_eq!(quiz.time_limit, DRAWN_TIME_LIMIT);
        assert!(quiz.validate().is_ok());

        let everything = catalog
            .draw("javascript", Difficulty::Beginner, 50, &mut rng)
            .unwrap();
        assert_eq!(everything.len(), 3);

        let single = catalog
            .draw("javascript", Difficulty::Beginner, 0, &mut rng)
            .unwrap();
        assert_eq!(single.len(), 1);
        assert!(single.validate().is_ok());
    }

    #[test]
    fn test_draw_uses_question_bank_pools() {
        let catalog = Catalog::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        let beginner = catalog
            .draw("React", Difficulty::Beginner, 5, &mut rng)
            .unwrap();
        assert_eq!(drawn_ids(&beginner), vec![QuestionId(6)]);
        assert_eq!(beginner.questions[0].prompt, "What is JSX?");
        assert_eq!(beginner.title, "React - Beginner Level");

        let intermediate = catalog
            .draw("react", Difficulty::Intermediate, 5, &mut rng)
            .unwrap();
        assert_eq!(drawn_ids(&intermediate), vec![QuestionId(7)]);

        let closures = catalog
            .draw("javascript", Difficulty::Intermediate, 5, &mut rng)
            .unwrap();
        assert_eq!(drawn_ids(&closures), vec![QuestionId(4), QuestionId(5)]);
    }

    #[test]
    fn test_draw_from_loaded_quizzes() {
        let builtin = Catalog::builtin().unwrap();
        let react = (**builtin.find("2").unwrap()).clone();
        let catalog = Catalog::from_quizzes(vec![react.clone(), react]);
        let mut rng = StdRng::seed_from_u64(5);

        let quiz = catalog
            .draw("react", Difficulty::Intermediate, 10, &mut rng)
            .unwrap();
        assert_eq!(drawn_ids(&quiz), vec![QuestionId(1), QuestionId(2)]);
        assert!(
            catalog
                .draw("react", Difficulty::Beginner, 1, &mut rng)
                .is_err()
        );
    }

    #[test]
    fn test_draw_unknown_topic() {
        let catalog = Catalog::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let err = catalog
            .draw("python", Difficulty::Beginner, 5, &mut rng)
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::NotFound {
                topic: "python".to_string(),
                difficulty: Difficulty::Beginner,
            }
        );
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a question, unique within its quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub u32);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    #[serde(rename = "question", alias = "text")]
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(alias = "correct_answer")]
    pub correct_answer: usize,
    #[serde(default)]
    pub explanation: String,
}

impl Question {
    pub fn is_correct(&self, answer: usize) -> bool {
        answer == self.correct_answer
    }

    pub fn has_option(&self, index: usize) -> bool {
        index < self.options.len()
    }

    /// Text of the correct option.
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_answer).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_and_snake_case() {
        let camel = r#"{"id":1,"question":"Q?","options":["a","b"],"correctAnswer":1,"explanation":"because"}"#;
        let snake = r#"{"id":1,"question":"Q?","options":["a","b"],"correct_answer":1,"explanation":"because"}"#;

        let a: Question = serde_json::from_str(camel).unwrap();
        let b: Question = serde_json::from_str(snake).unwrap();

        assert_eq!(a, b);
        assert_eq!(a.id, QuestionId(1));
        assert_eq!(a.prompt, "Q?");
        assert_eq!(a.correct_option(), Some("b"));
    }

    #[test]
    fn test_missing_explanation_defaults_to_empty() {
        let json = r#"{"id":7,"question":"Q?","options":["a","b"],"correctAnswer":0}"#;
        let question: Question = serde_json::from_str(json).unwrap();
        assert!(question.explanation.is_empty());
        assert!(question.is_correct(0));
        assert!(!question.is_correct(1));
    }
}

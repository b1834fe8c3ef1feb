//! Exam questions and the question bank

use std::{collections::HashSet, fmt, path::Path};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// One of the four answer options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    #[serde(alias = "A")]
    A,
    #[serde(alias = "B")]
    B,
    #[serde(alias = "C")]
    C,
    #[serde(alias = "D")]
    D,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Choice::A => "a",
            Choice::B => "b",
            Choice::C => "c",
            Choice::D => "d",
        };
        write!(f, "{}", letter)
    }
}

/// Answer options of a multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    pub a: String,
    pub b: String,
    pub c: String,
    pub d: String,
}

/// A multiple-choice question including its correct answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub options: Options,
    pub correct: Choice,
}

/// What a candidate gets to see of a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionView {
    pub id: u32,
    pub text: String,
    pub options: Options,
}

impl From<&Question> for QuestionView {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id,
            text: question.text.clone(),
            options: question.options.clone(),
        }
    }
}

/// Ordered set of questions with unique ids
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id) {
                bail!("duplicate question id {}", question.id);
            }
        }
        Ok(Self { questions })
    }

    /// Load a JSON array of questions
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read question bank {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("invalid question bank {}", path.display()))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let questions: Vec<Question> = serde_json::from_str(content)?;
        Self::new(questions)
    }

    /// Small built-in bank used when none is configured
    pub fn sample() -> Self {
        let question = |id: u32, text: &str, options: [&str; 4], correct: Choice| Question {
            id,
            text: text.to_string(),
            options: Options {
                a: options[0].to_string(),
                b: options[1].to_string(),
                c: options[2].to_string(),
                d: options[3].to_string(),
            },
            correct,
        };

        Self {
            questions: vec![
                question(1, "What is 7 x 8?", ["54", "56", "58", "64"], Choice::B),
                question(2, "Which planet is closest to the sun?", ["Venus", "Earth", "Mercury", "Mars"], Choice::C),
                question(3, "How many seconds are in 20 minutes?", ["1200", "2000", "600", "1020"], Choice::A),
                question(4, "What is the boiling point of water at sea level in Celsius?", ["90", "110", "120", "100"], Choice::D),
            ],
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    pub fn views(&self) -> Vec<QuestionView> {
        self.questions.iter().map(QuestionView::from).collect()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_bank() {
        let bank = QuestionBank::from_json(
            r#"[{"id": 3, "text": "2+2?", "options": {"a": "3", "b": "4", "c": "5", "d": "6"}, "correct": "B"}]"#,
        )
        .unwrap();
        assert_eq!(bank.len(), 1);
        assert_eq!(bank.get(3).map(|q| q.correct), Some(Choice::B));
        assert!(!bank.contains(4));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut questions = QuestionBank::sample().questions().to_vec();
        questions.push(questions[0].clone());
        assert!(QuestionBank::new(questions).is_err());
    }

    #[test]
    fn views_hide_answers() {
        let json = serde_json::to_value(QuestionBank::sample().views()).unwrap();
        assert!(json[0].get("correct").is_none());
        assert_eq!(json[0]["id"], 1);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = QuestionBank::load(Path::new("/nonexistent/questions.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/questions.json"));
    }
}

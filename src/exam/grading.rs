//! Scoring submitted answers

use std::{collections::HashMap, fmt};
use serde::{Deserialize, Serialize};

use super::question::{Choice, QuestionBank};

/// Performance band derived from the raw score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    #[serde(rename = "Excellent")]
    Excellent,
    #[serde(rename = "Very Good")]
    VeryGood,
    #[serde(rename = "Good")]
    Good,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl Rating {
    pub fn from_score(score: u32) -> Self {
        match score {
            18.. => Rating::Excellent,
            15..=17 => Rating::VeryGood,
            10..=14 => Rating::Good,
            _ => Rating::NeedsImprovement,
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Rating::Excellent => "Excellent",
            Rating::VeryGood => "Very Good",
            Rating::Good => "Good",
            Rating::NeedsImprovement => "Needs Improvement",
        };
        write!(f, "{}", label)
    }
}

/// Outcome of a graded exam
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamResult {
    pub score: u32,
    pub total: u32,
    pub rating: Rating,
}

/// Count correct answers; unanswered questions score nothing
pub fn grade(bank: &QuestionBank, answers: &HashMap<u32, Choice>) -> ExamResult {
    let score = bank
        .questions()
        .iter()
        .filter(|q| answers.get(&q.id) == Some(&q.correct))
        .count() as u32;

    ExamResult {
        score,
        total: bank.len() as u32,
        rating: Rating::from_score(score),
    }
}

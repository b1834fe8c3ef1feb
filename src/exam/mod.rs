//! Exam content module
//!
//! Question bank loading and grading of submitted answers.

pub mod grading;
pub mod question;

// Re-export main types
pub use grading::{grade, ExamResult, Rating};
pub use question::{Choice, Options, Question, QuestionBank, QuestionView};

//! Error types shared by the countdown core and the exam server

use std::fmt;

/// Kind of page resource a countdown depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    DisplaySurface,
    SubmissionTarget,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::DisplaySurface => write!(f, "display surface"),
            ResourceKind::SubmissionTarget => write!(f, "submission target"),
        }
    }
}

/// Errors raised while setting up or running a countdown
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TimerError {
    #[error("{kind} '{id}' not found on the page")]
    MissingResource { kind: ResourceKind, id: String },
    #[error("submission failed: {0}")]
    Submission(String),
    #[error("a countdown is already running or has finished")]
    AlreadyStarted,
    #[error("countdown task failed: {0}")]
    Task(String),
}

/// Errors raised by the exam session
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ExamError {
    #[error("exam has not been started")]
    NotStarted,
    #[error("exam has already been started")]
    AlreadyStarted,
    #[error("exam has already been submitted")]
    AlreadySubmitted,
    #[error("unknown question id: {0}")]
    UnknownQuestion(u32),
    #[error("state lock poisoned: {0}")]
    Lock(String),
}

impl From<ExamError> for TimerError {
    fn from(e: ExamError) -> Self {
        TimerError::Submission(e.to_string())
    }
}

/// Any failure surfaced by the exam server
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error(transparent)]
    Timer(#[from] TimerError),
    #[error(transparent)]
    Exam(#[from] ExamError),
}

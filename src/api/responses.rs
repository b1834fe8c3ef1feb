//! API request and response structures

use std::collections::HashMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    exam::{Choice, ExamResult, QuestionView},
    services::Notice,
    state::{ExamState, ExamStatus, SubmissionTrigger, TimerState},
};

/// API response structure for state change endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub exam: ExamState,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, exam: ExamState) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            exam,
        }
    }

    pub fn ok(message: String, exam: ExamState) -> Self {
        Self::new("ok".to_string(), message, exam)
    }
}

/// Body returned for failed requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(message: String) -> Self {
        Self {
            status: "error".to_string(),
            message,
            timestamp: Utc::now(),
        }
    }
}

/// Draft answers keyed by question id
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswersRequest {
    #[serde(default)]
    pub answers: HashMap<u32, Choice>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionsResponse {
    pub questions: Vec<QuestionView>,
}

/// Countdown as seen by the candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerResponse {
    pub display: Option<String>,
    pub timer: TimerState,
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultResponse {
    pub result: ExamResult,
    pub submitted_by: Option<SubmissionTrigger>,
    pub submitted_at: Option<DateTime<Utc>>,
}

/// Status response with exam and timer information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub exam_status: ExamStatus,
    pub question_count: usize,
    pub timer: TimerState,
    pub display: Option<String>,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

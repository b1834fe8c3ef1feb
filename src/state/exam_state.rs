//! Exam session state structure and management

use std::collections::HashMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    error::ExamError,
    exam::{grade, Choice, ExamResult, QuestionBank},
};

/// Where the exam is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExamStatus {
    NotStarted,
    InProgress,
    Submitted,
}

/// Who caused the submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionTrigger {
    Candidate,
    TimeExpired,
}

/// Session of a single candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamState {
    pub status: ExamStatus,
    pub answers: HashMap<u32, Choice>,
    pub result: Option<ExamResult>,
    pub started_at: Option<DateTime<Utc>>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub submitted_by: Option<SubmissionTrigger>,
}

impl ExamState {
    pub fn new() -> Self {
        Self {
            status: ExamStatus::NotStarted,
            answers: HashMap::new(),
            result: None,
            started_at: None,
            submitted_at: None,
            submitted_by: None,
        }
    }

    pub fn start(&mut self) -> Result<(), ExamError> {
        match self.status {
            ExamStatus::NotStarted => {
                self.status = ExamStatus::InProgress;
                self.started_at = Some(Utc::now());
                Ok(())
            }
            ExamStatus::InProgress => Err(ExamError::AlreadyStarted),
            ExamStatus::Submitted => Err(ExamError::AlreadySubmitted),
        }
    }

    /// Merge answers into the draft
    pub fn record_answers(
        &mut self,
        bank: &QuestionBank,
        answers: &HashMap<u32, Choice>,
    ) -> Result<(), ExamError> {
        self.ensure_in_progress()?;
        if let Some(id) = answers.keys().find(|id| !bank.contains(**id)) {
            return Err(ExamError::UnknownQuestion(*id));
        }
        self.answers.extend(answers.iter().map(|(id, choice)| (*id, *choice)));
        Ok(())
    }

    /// Grade the draft and close the session
    pub fn submit(
        &mut self,
        bank: &QuestionBank,
        trigger: SubmissionTrigger,
    ) -> Result<ExamResult, ExamError> {
        self.ensure_in_progress()?;

        let result = grade(bank, &self.answers);
        self.status = ExamStatus::Submitted;
        self.result = Some(result);
        self.submitted_at = Some(Utc::now());
        self.submitted_by = Some(trigger);
        Ok(result)
    }

    pub fn is_submitted(&self) -> bool {
        self.status == ExamStatus::Submitted
    }

    fn ensure_in_progress(&self) -> Result<(), ExamError> {
        match self.status {
            ExamStatus::InProgress => Ok(()),
            ExamStatus::NotStarted => Err(ExamError::NotStarted),
            ExamStatus::Submitted => Err(ExamError::AlreadySubmitted),
        }
    }
}

impl Default for ExamState {
    fn default() -> Self {
        Self::new()
    }
}

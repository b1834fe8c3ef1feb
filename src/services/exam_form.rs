//! Exam form submitted when the countdown expires

use std::sync::{Arc, Mutex};
use tracing::{error, info};

use crate::{
    error::{ExamError, TimerError},
    exam::QuestionBank,
    state::{ExamState, SubmissionTrigger},
    timer::SubmissionTarget,
};

/// Submits the saved draft answers of the running exam
#[derive(Debug, Clone)]
pub struct ExamForm {
    bank: Arc<QuestionBank>,
    exam_state: Arc<Mutex<ExamState>>,
}

impl ExamForm {
    pub fn new(bank: Arc<QuestionBank>, exam_state: Arc<Mutex<ExamState>>) -> Self {
        Self { bank, exam_state }
    }
}

impl SubmissionTarget for ExamForm {
    fn submit(&self) -> Result<(), TimerError> {
        let mut exam = self.exam_state.lock()
            .map_err(|e| ExamError::Lock(e.to_string()))?;

        match exam.submit(&self.bank, SubmissionTrigger::TimeExpired) {
            Ok(result) => {
                info!("Exam submitted on expiry: score {}/{} ({})",
                      result.score, result.total, result.rating);
                Ok(())
            }
            // The candidate won the race against the final tick
            Err(ExamError::AlreadySubmitted) => {
                info!("Exam already submitted by the candidate, skipping expiry submission");
                Ok(())
            }
            Err(e) => {
                error!("Exam could not be submitted on expiry: {}", e);
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use crate::exam::Choice;

    #[test]
    fn submits_draft_answers() {
        let bank = Arc::new(QuestionBank::sample());
        let exam_state = Arc::new(Mutex::new(ExamState::new()));
        {
            let mut exam = exam_state.lock().unwrap();
            exam.start().unwrap();
            exam.record_answers(&bank, &HashMap::from([(1, Choice::B)])).unwrap();
        }

        let form = ExamForm::new(bank, Arc::clone(&exam_state));
        form.submit().unwrap();

        let exam = exam_state.lock().unwrap();
        assert_eq!(exam.result.map(|r| r.score), Some(1));
        assert_eq!(exam.submitted_by, Some(SubmissionTrigger::TimeExpired));
    }

    #[test]
    fn expiry_after_candidate_submission_keeps_result() {
        let bank = Arc::new(QuestionBank::sample());
        let exam_state = Arc::new(Mutex::new(ExamState::new()));
        {
            let mut exam = exam_state.lock().unwrap();
            exam.start().unwrap();
            exam.record_answers(&bank, &HashMap::from([(2, Choice::C)])).unwrap();
            exam.submit(&bank, SubmissionTrigger::Candidate).unwrap();
        }

        let form = ExamForm::new(bank, Arc::clone(&exam_state));
        assert_eq!(form.submit(), Ok(()));

        let exam = exam_state.lock().unwrap();
        assert_eq!(exam.submitted_by, Some(SubmissionTrigger::Candidate));
        assert_eq!(exam.result.map(|r| r.score), Some(1));
    }

    #[test]
    fn expiry_before_start_is_an_error() {
        let form = ExamForm::new(
            Arc::new(QuestionBank::sample()),
            Arc::new(Mutex::new(ExamState::new())),
        );
        assert_eq!(
            form.submit(),
            Err(TimerError::Submission("exam has not been started".to_string()))
        );
    }
}

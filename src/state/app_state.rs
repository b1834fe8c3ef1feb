//! Main application state management

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tracing::info;

use crate::{
    config::TimerConfig,
    error::{AppError, ExamError, TimerError},
    exam::{Choice, ExamResult, QuestionBank},
    services::{AlertNotifier, ExamForm, Notice, TimerDisplay},
    tasks::{spawn_countdown, TimerHandle},
    timer::{CountdownTimer, Page},
};
use super::{ExamState, SubmissionTrigger, TimerState};

/// Main application state holding the exam session and its countdown
#[derive(Debug)]
pub struct AppState {
    /// Questions of the exam
    pub bank: Arc<QuestionBank>,
    /// Candidate session
    pub exam_state: Arc<Mutex<ExamState>>,
    /// Countdown configuration and running task
    pub timer_config: TimerConfig,
    pub timer: Mutex<Option<TimerHandle>>,
    /// Page resources driven by the countdown
    pub display: TimerDisplay,
    pub notifier: AlertNotifier,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
}

impl AppState {
    /// Create a new AppState with no exam started
    pub fn new(port: u16, host: String, timer_config: TimerConfig, bank: QuestionBank) -> Self {
        Self {
            bank: Arc::new(bank),
            exam_state: Arc::new(Mutex::new(ExamState::new())),
            timer_config,
            timer: Mutex::new(None),
            display: TimerDisplay::new(),
            notifier: AlertNotifier::new(),
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
        }
    }

    /// Page exposing the display under "timer" and the exam form under "examForm"
    pub fn page(&self) -> Page {
        Page::new(Arc::new(self.notifier.clone()))
            .with_display("timer", Arc::new(self.display.clone()))
            .with_form(
                "examForm",
                Arc::new(ExamForm::new(Arc::clone(&self.bank), Arc::clone(&self.exam_state))),
            )
    }

    /// Verify the configured ids resolve on the page
    pub fn check_page(&self) -> Result<(), TimerError> {
        let page = self.page();
        page.display(&self.timer_config.display_id)?;
        page.form(&self.timer_config.form_id)?;
        Ok(())
    }

    /// Start the exam and its countdown
    pub fn start_exam(&self) -> Result<ExamState, AppError> {
        let mut timer = self.timer.lock()
            .map_err(|e| ExamError::Lock(e.to_string()))?;
        if timer.is_some() {
            return Err(TimerError::AlreadyStarted.into());
        }

        let countdown = CountdownTimer::initialize(&self.timer_config, &self.page())?;

        let exam = {
            let mut exam = self.lock_exam()?;
            exam.start()?;
            exam.clone()
        };

        info!("Exam started with {} questions, {}s on the clock",
              self.bank.len(), self.timer_config.duration_seconds);
        *timer = Some(spawn_countdown(countdown, self.timer_config.tick_interval));
        drop(timer);

        self.record_action("start");
        Ok(exam)
    }

    /// Save draft answers
    pub fn record_answers(&self, answers: &HashMap<u32, Choice>) -> Result<ExamState, AppError> {
        let exam = {
            let mut exam = self.lock_exam()?;
            exam.record_answers(&self.bank, answers)?;
            exam.clone()
        };

        self.record_action("answers");
        Ok(exam)
    }

    /// Submit on behalf of the candidate and stop the countdown
    pub fn submit_exam(&self, answers: Option<&HashMap<u32, Choice>>) -> Result<ExamResult, AppError> {
        let mut timer = self.timer.lock()
            .map_err(|e| ExamError::Lock(e.to_string()))?;

        let result = {
            let mut exam = self.lock_exam()?;
            if let Some(answers) = answers {
                exam.record_answers(&self.bank, answers)?;
            }
            exam.submit(&self.bank, SubmissionTrigger::Candidate)?
        };

        if let Some(handle) = timer.as_mut() {
            handle.dispose();
        }
        drop(timer);

        info!("Exam submitted by candidate: score {}/{} ({})",
              result.score, result.total, result.rating);
        self.record_action("submit");
        Ok(result)
    }

    /// Get current exam state
    pub fn get_exam_state(&self) -> Result<ExamState, AppError> {
        Ok(self.lock_exam()?.clone())
    }

    /// Result of the submitted exam, if any
    pub fn get_result(&self) -> Result<Option<ExamResult>, AppError> {
        Ok(self.lock_exam()?.result)
    }

    /// Get current timer state
    pub fn get_timer_state(&self) -> Result<TimerState, AppError> {
        let timer = self.timer.lock()
            .map_err(|e| ExamError::Lock(e.to_string()))?;
        Ok(timer.as_ref().map(TimerHandle::snapshot).unwrap_or_default())
    }

    /// Text currently rendered on the timer display
    pub fn get_display(&self) -> Option<String> {
        self.display.text()
    }

    /// Latest notification shown to the candidate
    pub fn get_notice(&self) -> Option<Notice> {
        self.notifier.last()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }

    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    fn lock_exam(&self) -> Result<std::sync::MutexGuard<'_, ExamState>, ExamError> {
        self.exam_state.lock()
            .map_err(|e| ExamError::Lock(e.to_string()))
    }
}

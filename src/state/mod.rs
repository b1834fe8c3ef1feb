//! State management module
//!
//! This module contains the exam session, the timer snapshot and the shared
//! application state tying them together.

pub mod app_state;
pub mod exam_state;
pub mod timer_state;

// Re-export main types
pub use app_state::AppState;
pub use exam_state::{ExamState, ExamStatus, SubmissionTrigger};
pub use timer_state::TimerState;

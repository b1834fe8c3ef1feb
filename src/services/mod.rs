//! Page resources module
//!
//! This module contains the server-side display, notifier and form the
//! countdown drives.

pub mod display;
pub mod exam_form;
pub mod notice;

// Re-export main types
pub use display::TimerDisplay;
pub use exam_form::ExamForm;
pub use notice::{AlertNotifier, Notice};

//! Exam Timer - A state-managed HTTP exam server with a self-submitting countdown
//!
//! The countdown core renders the remaining time once per second and, when
//! the time runs out, notifies the candidate and submits the exam exactly once.
//! The server hosts one exam session whose form is that submission target.

pub mod config;
pub mod error;
pub mod timer;
pub mod tasks;
pub mod exam;
pub mod state;
pub mod services;
pub mod api;
pub mod utils;

// Re-export commonly used types
pub use config::{Config, TimerConfig};
pub use error::{AppError, ExamError, TimerError};
pub use timer::{CountdownTimer, Page};
pub use tasks::{spawn_countdown, TimerHandle, TimerOutcome};
pub use state::AppState;
pub use api::create_router;
pub use utils::signals::shutdown_signal;

//! Background tasks module
//!
//! This module contains the countdown task that runs alongside the HTTP server.

pub mod countdown_task;

// Re-export main types
pub use countdown_task::{spawn_countdown, TimerHandle, TimerOutcome};

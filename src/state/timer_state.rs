//! Timer state structure and management

use serde::{Deserialize, Serialize};

/// Snapshot of the countdown published after every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub active: bool,
    pub expired: bool,
    pub remaining_seconds: Option<u64>,
}

impl TimerState {
    /// Create a new inactive timer state
    pub fn new() -> Self {
        Self {
            active: false,
            expired: false,
            remaining_seconds: None,
        }
    }

    /// Create an active timer state with remaining seconds
    pub fn active(remaining_seconds: u64) -> Self {
        Self {
            active: true,
            expired: false,
            remaining_seconds: Some(remaining_seconds),
        }
    }

    /// Terminal state after the countdown ran out
    pub fn expired() -> Self {
        Self {
            active: false,
            expired: true,
            remaining_seconds: Some(0),
        }
    }

    /// Stopped before running out
    pub fn disposed(remaining_seconds: u64) -> Self {
        Self {
            active: false,
            expired: false,
            remaining_seconds: Some(remaining_seconds),
        }
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

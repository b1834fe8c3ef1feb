//! Pure decrementing counter behind the countdown timer

use serde::{Deserialize, Serialize};

/// Lifecycle phase of a countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Running,
    Expired,
}

/// What a single tick asks the caller to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    /// Render the text, the countdown keeps running
    Display(String),
    /// Render the text, then run the terminal action
    Expire(String),
    /// Already expired, nothing to do
    Idle,
}

/// Format seconds as `m:ss`
pub fn format_remaining(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Seconds remaining plus the phase
///
/// The counter is signed because it drops to -1 on the tick that expires.
#[derive(Debug, Clone)]
pub struct Countdown {
    remaining: i64,
    phase: Phase,
}

impl Countdown {
    pub fn new(duration_seconds: u64) -> Self {
        Self {
            remaining: i64::try_from(duration_seconds).unwrap_or(i64::MAX),
            phase: Phase::Running,
        }
    }

    /// Advance by one second
    pub fn tick(&mut self) -> Tick {
        if self.phase == Phase::Expired {
            return Tick::Idle;
        }

        let text = format_remaining(self.remaining);
        self.remaining -= 1;

        if self.remaining < 0 {
            self.phase = Phase::Expired;
            Tick::Expire(text)
        } else {
            Tick::Display(text)
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_expired(&self) -> bool {
        self.phase == Phase::Expired
    }

    /// Remaining seconds, clamped at zero
    pub fn remaining_seconds(&self) -> u64 {
        u64::try_from(self.remaining).unwrap_or(0)
    }
}

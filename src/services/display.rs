//! Timer display surface backed by shared state

use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

use crate::timer::DisplaySurface;

/// Holds the text last rendered by the countdown
#[derive(Debug, Clone, Default)]
pub struct TimerDisplay {
    text: Arc<Mutex<Option<String>>>,
}

impl TimerDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text currently shown, if anything was rendered yet
    pub fn text(&self) -> Option<String> {
        self.text.lock().ok().and_then(|text| text.clone())
    }
}

impl DisplaySurface for TimerDisplay {
    fn render(&self, text: &str) {
        match self.text.lock() {
            Ok(mut current) => {
                debug!("Timer display: {}", text);
                *current = Some(text.to_string());
            }
            Err(e) => warn!("Failed to lock timer display: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_latest_render() {
        let display = TimerDisplay::new();
        assert_eq!(display.text(), None);

        display.render("0:02");
        display.render("0:01");
        assert_eq!(display.text().as_deref(), Some("0:01"));
    }
}

//! User notifications raised by the countdown

use std::sync::{Arc, Mutex};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::timer::Notifier;

/// A notification shown to the candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Logs the alert and keeps it for clients polling the server
#[derive(Debug, Clone, Default)]
pub struct AlertNotifier {
    last: Arc<Mutex<Option<Notice>>>,
}

impl AlertNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<Notice> {
        self.last.lock().ok().and_then(|notice| notice.clone())
    }
}

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        warn!("{}", message);
        if let Ok(mut last) = self.last.lock() {
            *last = Some(Notice {
                message: message.to_string(),
                timestamp: Utc::now(),
            });
        }
    }
}

//! Capabilities a countdown needs from its host page

use std::{collections::HashMap, fmt, sync::Arc};

use crate::error::{ResourceKind, TimerError};

/// Text sink the countdown renders into
pub trait DisplaySurface: Send + Sync {
    fn render(&self, text: &str);
}

/// Blocking user notification shown right before submission
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Form-like resource triggered once on expiry
pub trait SubmissionTarget: Send + Sync {
    fn submit(&self) -> Result<(), TimerError>;
}

/// Named resources of a host page
#[derive(Clone)]
pub struct Page {
    displays: HashMap<String, Arc<dyn DisplaySurface>>,
    forms: HashMap<String, Arc<dyn SubmissionTarget>>,
    notifier: Arc<dyn Notifier>,
}

impl Page {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            displays: HashMap::new(),
            forms: HashMap::new(),
            notifier,
        }
    }

    pub fn with_display(mut self, id: impl Into<String>, display: Arc<dyn DisplaySurface>) -> Self {
        self.displays.insert(id.into(), display);
        self
    }

    pub fn with_form(mut self, id: impl Into<String>, form: Arc<dyn SubmissionTarget>) -> Self {
        self.forms.insert(id.into(), form);
        self
    }

    pub fn display(&self, id: &str) -> Result<Arc<dyn DisplaySurface>, TimerError> {
        self.displays
            .get(id)
            .cloned()
            .ok_or_else(|| TimerError::MissingResource {
                kind: ResourceKind::DisplaySurface,
                id: id.to_string(),
            })
    }

    pub fn form(&self, id: &str) -> Result<Arc<dyn SubmissionTarget>, TimerError> {
        self.forms
            .get(id)
            .cloned()
            .ok_or_else(|| TimerError::MissingResource {
                kind: ResourceKind::SubmissionTarget,
                id: id.to_string(),
            })
    }

    pub fn notifier(&self) -> Arc<dyn Notifier> {
        Arc::clone(&self.notifier)
    }
}

impl fmt::Debug for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("displays", &self.displays.keys().collect::<Vec<_>>())
            .field("forms", &self.forms.keys().collect::<Vec<_>>())
            .finish()
    }
}

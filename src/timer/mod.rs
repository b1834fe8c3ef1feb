//! Countdown timer module
//!
//! A pure countdown, the capabilities it drives on the host page, and the
//! owned timer instance combining the two.

pub mod countdown;
pub mod countdown_timer;
pub mod page;

// Re-export main types
pub use countdown::{format_remaining, Countdown, Phase, Tick};
pub use countdown_timer::CountdownTimer;
pub use page::{DisplaySurface, Notifier, Page, SubmissionTarget};

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::{Arc, Mutex};

    use super::{DisplaySurface, Notifier, Page, SubmissionTarget};
    use crate::error::TimerError;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Event {
        Render(String),
        Notify(String),
        Submit,
    }

    /// Fake page recording every call in order
    pub struct Recorder {
        events: Mutex<Vec<Event>>,
        fail_submit: bool,
    }

    impl Recorder {
        pub fn new() -> Arc<Self> {
            Arc::new(Self { events: Mutex::new(Vec::new()), fail_submit: false })
        }

        pub fn failing() -> Arc<Self> {
            Arc::new(Self { events: Mutex::new(Vec::new()), fail_submit: true })
        }

        pub fn page(self: &Arc<Self>) -> Page {
            Page::new(self.clone())
                .with_display("timer", self.clone())
                .with_form("examForm", self.clone())
        }

        pub fn events(&self) -> Vec<Event> {
            self.events.lock().unwrap().clone()
        }

        pub fn renders(&self) -> Vec<String> {
            self.events()
                .into_iter()
                .filter_map(|e| match e {
                    Event::Render(text) => Some(text),
                    _ => None,
                })
                .collect()
        }

        pub fn submissions(&self) -> usize {
            self.events().iter().filter(|e| **e == Event::Submit).count()
        }

        fn push(&self, event: Event) {
            self.events.lock().unwrap().push(event);
        }
    }

    impl DisplaySurface for Recorder {
        fn render(&self, text: &str) {
            self.push(Event::Render(text.to_string()));
        }
    }

    impl Notifier for Recorder {
        fn notify(&self, message: &str) {
            self.push(Event::Notify(message.to_string()));
        }
    }

    impl SubmissionTarget for Recorder {
        fn submit(&self) -> Result<(), TimerError> {
            self.push(Event::Submit);
            if self.fail_submit {
                Err(TimerError::Submission("form rejected".to_string()))
            } else {
                Ok(())
            }
        }
    }
}

//! Owned countdown instance wired to its page resources

use std::sync::Arc;
use tracing::{debug, error, info};

use crate::{config::TimerConfig, error::TimerError};
use super::{
    countdown::{Countdown, Phase, Tick},
    page::{DisplaySurface, Notifier, Page, SubmissionTarget},
};

/// Countdown bound to a display, a notifier and a submission target
pub struct CountdownTimer {
    countdown: Countdown,
    display: Arc<dyn DisplaySurface>,
    form: Arc<dyn SubmissionTarget>,
    notifier: Arc<dyn Notifier>,
    expiry_message: String,
}

impl CountdownTimer {
    /// Resolve every page resource up front so a broken page fails here
    /// instead of on the first tick
    pub fn initialize(config: &TimerConfig, page: &Page) -> Result<Self, TimerError> {
        let display = page.display(&config.display_id)?;
        let form = page.form(&config.form_id)?;

        info!(
            "Countdown initialized: {}s, display='{}', form='{}'",
            config.duration_seconds, config.display_id, config.form_id
        );

        Ok(Self {
            countdown: Countdown::new(config.duration_seconds),
            display,
            form,
            notifier: page.notifier(),
            expiry_message: config.expiry_message.clone(),
        })
    }

    /// One periodic update; a no-op once expired
    pub fn on_tick(&mut self) -> Phase {
        match self.countdown.tick() {
            Tick::Display(text) => {
                debug!("Countdown tick: {}", text);
                self.display.render(&text);
            }
            Tick::Expire(text) => {
                self.display.render(&text);
                info!("Countdown expired, notifying and submitting");
                self.notifier.notify(&self.expiry_message);
                if let Err(e) = self.form.submit() {
                    error!("Expiry submission failed: {}", e);
                }
            }
            Tick::Idle => {}
        }
        self.countdown.phase()
    }

    pub fn phase(&self) -> Phase {
        self.countdown.phase()
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.countdown.remaining_seconds()
    }
}

//! Countdown background task

use std::time::Duration;
use tokio::{
    sync::{oneshot, watch},
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::{debug, info, warn};

use crate::{
    error::TimerError,
    state::TimerState,
    timer::{CountdownTimer, Phase},
};

/// How a countdown task ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerOutcome {
    Expired,
    Disposed,
}

/// Owner of a running countdown task
///
/// Dropping the handle disposes the countdown.
#[derive(Debug)]
pub struct TimerHandle {
    cancel_tx: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<TimerOutcome>>,
    state_rx: watch::Receiver<TimerState>,
}

impl TimerHandle {
    /// Latest published timer state
    pub fn snapshot(&self) -> TimerState {
        *self.state_rx.borrow()
    }

    /// Receiver notified after every tick
    pub fn subscribe(&self) -> watch::Receiver<TimerState> {
        self.state_rx.clone()
    }

    /// Stop the countdown without running the expiry action
    pub fn dispose(&mut self) {
        if let Some(cancel_tx) = self.cancel_tx.take() {
            debug!("Disposing countdown");
            // The task may already be gone after expiry
            let _ = cancel_tx.send(());
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, |task| task.is_finished())
    }

    /// Wait for the task to end
    pub async fn join(mut self) -> Result<TimerOutcome, TimerError> {
        match self.task.take() {
            Some(task) => task.await.map_err(|e| TimerError::Task(e.to_string())),
            None => Ok(TimerOutcome::Disposed),
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Drive `timer` on a fixed cadence until it expires or is disposed
pub fn spawn_countdown(timer: CountdownTimer, period: Duration) -> TimerHandle {
    let (cancel_tx, cancel_rx) = oneshot::channel();
    let (state_tx, state_rx) = watch::channel(TimerState::active(timer.remaining_seconds()));

    let task = tokio::spawn(countdown_task(timer, period, cancel_rx, state_tx));

    TimerHandle {
        cancel_tx: Some(cancel_tx),
        task: Some(task),
        state_rx,
    }
}

async fn countdown_task(
    mut timer: CountdownTimer,
    period: Duration,
    mut cancel_rx: oneshot::Receiver<()>,
    state_tx: watch::Sender<TimerState>,
) -> TimerOutcome {
    info!("Starting countdown task ({}s remaining)", timer.remaining_seconds());

    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if timer.on_tick() == Phase::Expired {
                    state_tx.send_replace(TimerState::expired());
                    info!("Countdown task finished: expired");
                    return TimerOutcome::Expired;
                }
                state_tx.send_replace(TimerState::active(timer.remaining_seconds()));
            }

            result = &mut cancel_rx => {
                if result.is_err() {
                    warn!("Countdown handle dropped without dispose");
                }
                state_tx.send_replace(TimerState::disposed(timer.remaining_seconds()));
                info!("Countdown task finished: disposed");
                return TimerOutcome::Disposed;
            }
        }
    }
}

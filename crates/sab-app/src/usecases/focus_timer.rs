use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use sab_core::{FocusTimer, TickOutcome};

use super::settings::SettingsStore;

const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Countdown reached zero.
    Finished,
    /// Shutdown arrived first; the timer is paused with its remaining time.
    Interrupted,
}

/// Drives a [`FocusTimer`] from a one-second ticker and keeps the persisted
/// timer state in step.
pub struct FocusTimerSession {
    store: Arc<SettingsStore>,
    timer: FocusTimer,
}

impl FocusTimerSession {
    pub fn new(store: Arc<SettingsStore>) -> Self {
        let timer = FocusTimer::from_settings(&store.current().timer);
        Self { store, timer }
    }

    pub fn timer(&self) -> &FocusTimer {
        &self.timer
    }

    pub async fn set_duration(&mut self, minutes: u32) -> Result<()> {
        self.timer.set_duration(minutes);
        self.persist().await
    }

    pub async fn reset(&mut self) -> Result<()> {
        self.timer.reset();
        self.persist().await
    }

    /// Start (or resume) the countdown and run it until it finishes or
    /// `shutdown` resolves.
    pub async fn run_until<F>(&mut self, shutdown: F) -> Result<SessionEnd>
    where
        F: Future<Output = ()>,
    {
        self.timer.start();
        self.persist().await?;
        info!(
            duration_minutes = self.timer.duration_minutes(),
            remaining_seconds = self.timer.remaining_seconds(),
            "Focus session started"
        );

        let mut ticker = interval_at(Instant::now() + TICK, TICK);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    self.timer.pause();
                    self.persist().await?;
                    info!(
                        remaining_seconds = self.timer.remaining_seconds(),
                        "Focus session paused"
                    );
                    return Ok(SessionEnd::Interrupted);
                }
                _ = ticker.tick() => match self.timer.tick() {
                    TickOutcome::Running { remaining_seconds } => {
                        if remaining_seconds % 60 == 0 {
                            info!(minutes_left = remaining_seconds / 60, "Focus session running");
                        }
                    }
                    TickOutcome::Finished => {
                        self.persist().await?;
                        info!(
                            play_end_sound = self.timer.play_end_sound(),
                            "Focus session finished"
                        );
                        return Ok(SessionEnd::Finished);
                    }
                    TickOutcome::Idle => {
                        debug!("Focus timer idle, ending session");
                        return Ok(SessionEnd::Finished);
                    }
                },
            }
        }
    }

    async fn persist(&self) -> Result<()> {
        self.store.save_timer(self.timer.to_settings()).await?;
        Ok(())
    }
}

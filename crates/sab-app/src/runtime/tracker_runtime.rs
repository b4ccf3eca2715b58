use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::{Interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use sab_core::ClipboardSettings;

use super::command::TrackerCommand;
use super::handle::TrackerHandle;
use crate::usecases::clipboard::ClipboardHistoryTracker;

/// Poll period used when the config does not set one.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(600);

const COMMAND_CHANNEL_CAPACITY: usize = 32;

pub struct TrackerRuntime {
    tracker: ClipboardHistoryTracker,
    command_rx: mpsc::Receiver<TrackerCommand>,
    settings_rx: watch::Receiver<ClipboardSettings>,
    settings_open: bool,
    poll_interval: Duration,
    ticker: Option<Interval>,
    shutting_down: bool,
}

impl TrackerRuntime {
    /// Build the runtime and the handle consumers use to talk to it.
    ///
    /// The tracker adopts the settings currently held by `settings_rx`.
    /// Polling does not begin until [`TrackerHandle::start`].
    pub fn new(
        mut tracker: ClipboardHistoryTracker,
        mut settings_rx: watch::Receiver<ClipboardSettings>,
        poll_interval: Duration,
    ) -> (Self, TrackerHandle) {
        tracker.apply_settings(settings_rx.borrow_and_update().clone());

        let (command_tx, command_rx) = mpsc::channel(COMMAND_CHANNEL_CAPACITY);
        let handle = TrackerHandle::new(command_tx, tracker.subscribe());

        let runtime = Self {
            tracker,
            command_rx,
            settings_rx,
            settings_open: true,
            poll_interval,
            ticker: None,
            shutting_down: false,
        };
        (runtime, handle)
    }

    pub async fn run(mut self) {
        info!(
            poll_interval_ms = self.poll_interval.as_millis() as u64,
            "Clipboard tracker runtime started"
        );

        while !self.shutting_down {
            tokio::select! {
                command = self.command_rx.recv() => match command {
                    Some(command) => self.handle_command(command),
                    None => {
                        debug!("All tracker handles dropped");
                        self.shutting_down = true;
                    }
                },
                _ = next_tick(&mut self.ticker) => {
                    self.tracker.capture_step();
                }
                changed = self.settings_rx.changed(), if self.settings_open => match changed {
                    Ok(()) => {
                        let settings = self.settings_rx.borrow_and_update().clone();
                        debug!(
                            history_limit = settings.history_limit,
                            blocked_sources = settings.blocked_source_ids.len(),
                            "Clipboard settings changed"
                        );
                        self.tracker.apply_settings(settings);
                    }
                    Err(_) => {
                        warn!("Settings channel closed, keeping last clipboard settings");
                        self.settings_open = false;
                    }
                },
            }
        }

        info!("Clipboard tracker runtime stopped");
    }

    fn handle_command(&mut self, command: TrackerCommand) {
        debug!(?command, "Tracker command received");
        match command {
            TrackerCommand::Start => {
                if self.ticker.is_some() {
                    debug!("Clipboard polling already running, skipping start");
                    return;
                }
                let mut ticker = tokio::time::interval(self.poll_interval);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
                self.ticker = Some(ticker);
                info!("Clipboard polling started");
            }
            TrackerCommand::Stop => {
                if self.ticker.take().is_some() {
                    info!("Clipboard polling stopped");
                } else {
                    debug!("Clipboard polling already stopped");
                }
            }
            TrackerCommand::Remove(id) => {
                self.tracker.remove(&id);
            }
            TrackerCommand::Clear => self.tracker.clear(),
            TrackerCommand::SelectForCopy { id, reply } => {
                let copied = self.tracker.select_for_copy(&id);
                if reply.send(copied).is_err() {
                    debug!(entry_id = %id, "Copy requester went away before reply");
                }
            }
            TrackerCommand::Shutdown => {
                self.ticker = None;
                self.shutting_down = true;
            }
        }
    }
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(ticker) => {
            ticker.tick().await;
        }
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeFrontmostApp, FakePasteboard, FixedClock};
    use sab_core::ClipboardEntry;
    use std::sync::Arc;
    use tokio::time::{sleep, timeout};

    struct Fixture {
        pasteboard: FakePasteboard,
        settings_tx: watch::Sender<ClipboardSettings>,
        handle: TrackerHandle,
        task: tokio::task::JoinHandle<()>,
    }

    fn spawn_runtime(settings: ClipboardSettings) -> Fixture {
        let pasteboard = FakePasteboard::new();
        let tracker = ClipboardHistoryTracker::new(
            Arc::new(pasteboard.clone()),
            Arc::new(FakeFrontmostApp::default()),
            Arc::new(FixedClock(0)),
            ClipboardSettings::default(),
        );
        let (settings_tx, settings_rx) = watch::channel(settings);
        let (runtime, handle) = TrackerRuntime::new(tracker, settings_rx, DEFAULT_POLL_INTERVAL);
        let task = tokio::spawn(runtime.run());
        Fixture {
            pasteboard,
            settings_tx,
            handle,
            task,
        }
    }

    fn titles(entries: &[ClipboardEntry]) -> Vec<String> {
        entries
            .iter()
            .map(|e| e.display_title().to_string())
            .collect()
    }

    async fn wait_for_len(
        rx: &mut watch::Receiver<Vec<ClipboardEntry>>,
        len: usize,
    ) -> Vec<ClipboardEntry> {
        timeout(Duration::from_secs(5), rx.wait_for(|entries| entries.len() == len))
            .await
            .expect("history update timeout")
            .expect("history channel open")
            .clone()
    }

    #[tokio::test(start_paused = true)]
    async fn polls_only_while_started() {
        let f = spawn_runtime(ClipboardSettings::default());

        f.pasteboard.set_text("ignored while stopped");
        sleep(DEFAULT_POLL_INTERVAL * 3).await;
        assert!(f.handle.snapshot().is_empty());

        f.handle.start().await.unwrap();
        f.handle.start().await.unwrap();
        sleep(DEFAULT_POLL_INTERVAL * 2).await;
        assert_eq!(titles(&f.handle.snapshot()), vec!["ignored while stopped"]);

        f.handle.stop().await.unwrap();
        f.handle.stop().await.unwrap();
        f.pasteboard.set_text("after stop");
        sleep(DEFAULT_POLL_INTERVAL * 3).await;
        assert_eq!(f.handle.snapshot().len(), 1);

        f.handle.shutdown().await.unwrap();
        f.task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn captures_each_change_between_ticks() {
        let f = spawn_runtime(ClipboardSettings::default());
        let mut rx = f.handle.subscribe();
        f.handle.start().await.unwrap();

        for value in ["one", "two", "three"] {
            f.pasteboard.set_text(value);
            sleep(DEFAULT_POLL_INTERVAL + Duration::from_millis(10)).await;
        }

        let entries = wait_for_len(&mut rx, 3).await;
        assert_eq!(titles(&entries), vec!["three", "two", "one"]);
    }

    #[tokio::test(start_paused = true)]
    async fn lowering_limit_trims_without_a_tick() {
        let f = spawn_runtime(ClipboardSettings::default());
        let mut rx = f.handle.subscribe();
        f.handle.start().await.unwrap();
        for i in 0..8 {
            f.pasteboard.set_text(&format!("value-{i}"));
            sleep(DEFAULT_POLL_INTERVAL + Duration::from_millis(10)).await;
        }
        wait_for_len(&mut rx, 8).await;
        f.handle.stop().await.unwrap();

        f.settings_tx
            .send(ClipboardSettings::default().with_history_limit(4))
            .unwrap();

        let entries = wait_for_len(&mut rx, 4).await;
        assert_eq!(
            titles(&entries),
            vec!["value-7", "value-6", "value-5", "value-4"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn commands_are_applied_in_order() {
        let f = spawn_runtime(ClipboardSettings::default());
        let mut rx = f.handle.subscribe();
        f.handle.start().await.unwrap();
        for value in ["a", "b", "c"] {
            f.pasteboard.set_text(value);
            sleep(DEFAULT_POLL_INTERVAL + Duration::from_millis(10)).await;
        }
        let entries = wait_for_len(&mut rx, 3).await;

        f.handle.remove(entries[1].id.clone()).await.unwrap();
        let entries = wait_for_len(&mut rx, 2).await;
        assert_eq!(titles(&entries), vec!["c", "a"]);

        assert!(f.handle.select_for_copy(entries[0].id.clone()).await.unwrap());
        assert_eq!(
            f.pasteboard.writes(),
            vec![sab_core::ClipboardContent::Text("c".into())]
        );

        f.handle.clear().await.unwrap();
        wait_for_len(&mut rx, 0).await;
    }

    #[tokio::test]
    async fn dropping_every_handle_stops_the_runtime() {
        let f = spawn_runtime(ClipboardSettings::default());
        drop(f.handle);
        timeout(Duration::from_secs(1), f.task)
            .await
            .expect("runtime should exit")
            .unwrap();
    }

    #[tokio::test]
    async fn closed_settings_channel_keeps_runtime_alive() {
        let f = spawn_runtime(ClipboardSettings::default());
        drop(f.settings_tx);

        f.pasteboard.set_text("still works");
        f.handle.start().await.unwrap();
        let mut rx = f.handle.subscribe();
        let entries = wait_for_len(&mut rx, 1).await;
        assert_eq!(titles(&entries), vec!["still works"]);
    }
}

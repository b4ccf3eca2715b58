use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot, watch};

use sab_core::ports::{WatcherControlError, WatcherControlPort};
use sab_core::{ClipboardEntry, EntryId};

use super::command::TrackerCommand;

#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("clipboard tracker runtime is no longer running")]
    ChannelClosed,
}

/// Cloneable front door to a running [`super::TrackerRuntime`].
///
/// Mutations are queued and applied by the runtime task in arrival order.
#[derive(Clone)]
pub struct TrackerHandle {
    command_tx: mpsc::Sender<TrackerCommand>,
    history_rx: watch::Receiver<Vec<ClipboardEntry>>,
}

impl TrackerHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<TrackerCommand>,
        history_rx: watch::Receiver<Vec<ClipboardEntry>>,
    ) -> Self {
        Self {
            command_tx,
            history_rx,
        }
    }

    pub async fn start(&self) -> Result<(), TrackerError> {
        self.send(TrackerCommand::Start).await
    }

    pub async fn stop(&self) -> Result<(), TrackerError> {
        self.send(TrackerCommand::Stop).await
    }

    pub async fn remove(&self, id: EntryId) -> Result<(), TrackerError> {
        self.send(TrackerCommand::Remove(id)).await
    }

    pub async fn clear(&self) -> Result<(), TrackerError> {
        self.send(TrackerCommand::Clear).await
    }

    /// Put an entry back on the pasteboard. Resolves to `false` when the
    /// entry is gone or the write failed.
    pub async fn select_for_copy(&self, id: EntryId) -> Result<bool, TrackerError> {
        let (reply, rx) = oneshot::channel();
        self.send(TrackerCommand::SelectForCopy { id, reply }).await?;
        rx.await.map_err(|_| TrackerError::ChannelClosed)
    }

    pub async fn shutdown(&self) -> Result<(), TrackerError> {
        self.send(TrackerCommand::Shutdown).await
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<ClipboardEntry>> {
        self.history_rx.clone()
    }

    /// Latest published history, most recent first.
    pub fn snapshot(&self) -> Vec<ClipboardEntry> {
        self.history_rx.borrow().clone()
    }

    async fn send(&self, command: TrackerCommand) -> Result<(), TrackerError> {
        self.command_tx
            .send(command)
            .await
            .map_err(|_| TrackerError::ChannelClosed)
    }
}

#[async_trait]
impl WatcherControlPort for TrackerHandle {
    async fn start_watcher(&self) -> Result<(), WatcherControlError> {
        self.start()
            .await
            .map_err(|_| WatcherControlError::ChannelClosed)
    }

    async fn stop_watcher(&self) -> Result<(), WatcherControlError> {
        self.stop()
            .await
            .map_err(|_| WatcherControlError::ChannelClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn commands_fail_once_runtime_is_gone() {
        let (command_tx, command_rx) = mpsc::channel(1);
        let (_history_tx, history_rx) = watch::channel(Vec::new());
        let handle = TrackerHandle::new(command_tx, history_rx);
        drop(command_rx);

        assert!(matches!(handle.start().await, Err(TrackerError::ChannelClosed)));
        assert!(matches!(
            handle.select_for_copy(EntryId::new()).await,
            Err(TrackerError::ChannelClosed)
        ));
        assert!(matches!(
            handle.start_watcher().await,
            Err(WatcherControlError::ChannelClosed)
        ));
    }

    #[tokio::test]
    async fn select_for_copy_reports_dropped_reply() {
        let (command_tx, mut command_rx) = mpsc::channel(1);
        let (_history_tx, history_rx) = watch::channel(Vec::new());
        let handle = TrackerHandle::new(command_tx, history_rx);

        let responder = tokio::spawn(async move {
            // Drop the reply sender without answering.
            let _ = command_rx.recv().await;
        });

        assert!(matches!(
            handle.select_for_copy(EntryId::new()).await,
            Err(TrackerError::ChannelClosed)
        ));
        responder.await.unwrap();
    }

    #[test]
    fn snapshot_reads_latest_history() {
        let (command_tx, _command_rx) = mpsc::channel(1);
        let (history_tx, history_rx) = watch::channel(Vec::new());
        let handle = TrackerHandle::new(command_tx, history_rx);
        assert!(handle.snapshot().is_empty());

        history_tx.send_replace(vec![ClipboardEntry::new(
            sab_core::ClipboardContent::Text("x".into()),
            None,
            0,
        )]);
        assert_eq!(handle.snapshot().len(), 1);
    }
}

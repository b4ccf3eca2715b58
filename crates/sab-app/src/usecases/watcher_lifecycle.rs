use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use sab_core::ports::{WatcherControlError, WatcherControlPort};

#[derive(Debug, thiserror::Error)]
pub enum WatcherLifecycleError {
    #[error("Failed to start clipboard watcher: {0}")]
    StartFailed(#[source] WatcherControlError),

    #[error("Failed to stop clipboard watcher: {0}")]
    StopFailed(#[source] WatcherControlError),
}

/// Starts and stops clipboard polling through a [`WatcherControlPort`].
///
/// Both directions are idempotent; repeating them is safe.
pub struct ClipboardWatcherLifecycle {
    watcher_control: Arc<dyn WatcherControlPort>,
}

impl ClipboardWatcherLifecycle {
    pub fn new(watcher_control: Arc<dyn WatcherControlPort>) -> Self {
        Self { watcher_control }
    }

    pub async fn start(&self) -> Result<(), WatcherLifecycleError> {
        async {
            info!("Requesting clipboard watcher to start");
            self.watcher_control
                .start_watcher()
                .await
                .map_err(WatcherLifecycleError::StartFailed)?;
            info!("Clipboard watcher started");
            Ok(())
        }
        .instrument(info_span!("usecase.watcher_lifecycle.start"))
        .await
    }

    pub async fn stop(&self) -> Result<(), WatcherLifecycleError> {
        async {
            info!("Requesting clipboard watcher to stop");
            self.watcher_control
                .stop_watcher()
                .await
                .map_err(WatcherLifecycleError::StopFailed)?;
            info!("Clipboard watcher stopped");
            Ok(())
        }
        .instrument(info_span!("usecase.watcher_lifecycle.stop"))
        .await
    }
}

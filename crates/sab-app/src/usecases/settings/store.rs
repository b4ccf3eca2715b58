use std::sync::Arc;

use anyhow::Result;
use tokio::sync::{watch, Mutex};
use tracing::{debug, info};

use sab_core::ports::SettingsPort;
use sab_core::{ClipboardSettings, Settings, TimerSettings};

/// Owns the persisted preferences and fans clipboard changes out to the
/// tracker runtime.
///
/// Every setter is load-modify-save under one lock. State is only
/// published after the port accepted the write.
pub struct SettingsStore {
    port: Arc<dyn SettingsPort>,
    write_lock: Mutex<()>,
    settings_tx: watch::Sender<Settings>,
    clipboard_tx: watch::Sender<ClipboardSettings>,
}

impl SettingsStore {
    pub async fn load(port: Arc<dyn SettingsPort>) -> Result<Self> {
        let settings = port.load().await?.normalized();
        info!(
            history_limit = settings.clipboard.history_limit,
            blocked_sources = settings.clipboard.blocked_source_ids.len(),
            menu_bar_limit = settings.menu_bar.clipboard_limit,
            "Settings loaded"
        );

        let (clipboard_tx, _) = watch::channel(settings.clipboard.clone());
        let (settings_tx, _) = watch::channel(settings);
        Ok(Self {
            port,
            write_lock: Mutex::new(()),
            settings_tx,
            clipboard_tx,
        })
    }

    pub fn current(&self) -> Settings {
        self.settings_tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Settings> {
        self.settings_tx.subscribe()
    }

    /// Receiver handed to [`crate::TrackerRuntime::new`].
    pub fn subscribe_clipboard(&self) -> watch::Receiver<ClipboardSettings> {
        self.clipboard_tx.subscribe()
    }

    /// Returns whether anything changed.
    pub async fn set_history_limit(&self, limit: u32) -> Result<bool> {
        self.update(|settings| settings.clipboard.history_limit = limit)
            .await
    }

    pub async fn block_source(&self, source_id: &str) -> Result<bool> {
        let source_id = source_id.trim();
        if source_id.is_empty() {
            return Ok(false);
        }
        self.update(|settings| {
            settings
                .clipboard
                .blocked_source_ids
                .insert(source_id.to_string());
        })
        .await
    }

    pub async fn unblock_source(&self, source_id: &str) -> Result<bool> {
        self.update(|settings| {
            settings.clipboard.blocked_source_ids.remove(source_id.trim());
        })
        .await
    }

    pub async fn set_menu_bar_limit(&self, limit: u32) -> Result<bool> {
        self.update(|settings| settings.menu_bar.clipboard_limit = limit)
            .await
    }

    pub async fn save_timer(&self, timer: TimerSettings) -> Result<bool> {
        self.update(|settings| settings.timer = timer).await
    }

    async fn update<F>(&self, mutate: F) -> Result<bool>
    where
        F: FnOnce(&mut Settings),
    {
        let _guard = self.write_lock.lock().await;

        let current = self.current();
        let mut next = current.clone();
        mutate(&mut next);
        let next = next.normalized();
        if next == current {
            debug!("Settings unchanged, skipping save");
            return Ok(false);
        }

        self.port.save(&next).await?;

        let clipboard = next.clipboard.clone();
        self.clipboard_tx.send_if_modified(|published| {
            if *published == clipboard {
                return false;
            }
            *published = clipboard;
            true
        });
        self.settings_tx.send_replace(next);
        Ok(true)
    }
}

//! Dependency assembly.
//!
//! The only module that touches `sab-platform`, `sab-infra` and `sab-app`
//! together. It builds adapters and hands them over as ports; it makes no
//! decisions of its own.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use sab_app::app_paths::AppPaths;
use sab_app::{ClipboardHistoryTracker, SettingsStore, TrackerHandle, TrackerRuntime};
use sab_core::ports::{AppDirsPort, ClockPort, FrontmostAppPort, PasteboardPort};
use sab_infra::{FileSettingsRepository, SystemClock};
use sab_platform::{DirsAppDirsAdapter, LocalFrontmostApp, LocalPasteboard};

#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("App directories unavailable: {0}")]
    AppDirs(String),

    #[error("Clipboard initialization failed: {0}")]
    ClipboardInit(String),

    #[error("Settings initialization failed: {0}")]
    SettingsInit(String),
}

pub type WiringResult<T> = Result<T, WiringError>;

pub fn resolve_app_paths() -> WiringResult<AppPaths> {
    let dirs = DirsAppDirsAdapter::new()
        .get_app_dirs()
        .map_err(|e| WiringError::AppDirs(e.to_string()))?;
    Ok(AppPaths::from_app_dirs(&dirs))
}

pub async fn load_settings_store(settings_path: &Path) -> WiringResult<Arc<SettingsStore>> {
    let repository = Arc::new(FileSettingsRepository::new(settings_path));
    let store = SettingsStore::load(repository)
        .await
        .map_err(|e| WiringError::SettingsInit(format!("{e:#}")))?;
    Ok(Arc::new(store))
}

/// Build the tracker runtime against the real system pasteboard.
///
/// The returned runtime still has to be spawned.
pub fn build_tracker(
    store: &SettingsStore,
    poll_interval: Duration,
) -> WiringResult<(TrackerRuntime, TrackerHandle)> {
    let pasteboard: Arc<dyn PasteboardPort> = Arc::new(
        LocalPasteboard::new().map_err(|e| WiringError::ClipboardInit(e.to_string()))?,
    );
    let frontmost_app: Arc<dyn FrontmostAppPort> = Arc::new(LocalFrontmostApp::new());
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);

    let tracker = ClipboardHistoryTracker::new(
        pasteboard,
        frontmost_app,
        clock,
        store.current().clipboard,
    );
    Ok(TrackerRuntime::new(
        tracker,
        store.subscribe_clipboard(),
        poll_interval,
    ))
}

//! Command handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use sab_app::{
    ClipboardWatcherLifecycle, ConvertImage, FocusTimerSession, SessionEnd, SettingsStore,
    TrackerHandle,
};
use sab_core::ImageFormat;
use sab_infra::ImageCrateEncoder;

use super::config::RuntimeConfig;
use super::wiring;
use crate::cli::{Commands, SettingsCommand};
use crate::console::{self, ConsoleCommand};

pub async fn run_command(command: Commands, config: RuntimeConfig) -> Result<()> {
    match command {
        Commands::Watch => run_watch(&config).await,
        Commands::Settings { command } => {
            run_settings(&config, command.unwrap_or(SettingsCommand::Show)).await
        }
        Commands::Convert { input, to, out } => run_convert(&input, to.as_deref(), out).await,
        Commands::Timer { minutes, reset } => run_timer(&config, minutes, reset).await,
    }
}

async fn run_watch(config: &RuntimeConfig) -> Result<()> {
    let store = wiring::load_settings_store(&config.settings_path).await?;
    let (runtime, handle) = wiring::build_tracker(&store, config.poll_interval)?;
    let runtime_task = tokio::spawn(runtime.run());

    let lifecycle = ClipboardWatcherLifecycle::new(Arc::new(handle.clone()));
    lifecycle.start().await?;
    println!("{}", console::WATCH_HELP);

    let mut history_rx = handle.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = &mut ctrl_c => break,
            changed = history_rx.changed() => {
                if changed.is_err() {
                    warn!("Tracker runtime ended unexpectedly");
                    break;
                }
                let entries = history_rx.borrow_and_update().clone();
                let menu_limit = store.current().menu_bar.clipboard_limit;
                println!("{}", console::render_history(&entries, menu_limit));
            }
            line = lines.next_line(), if stdin_open => match line {
                Ok(Some(line)) => {
                    if !apply_console_line(&line, &store, &handle, &lifecycle).await? {
                        break;
                    }
                }
                Ok(None) => stdin_open = false,
                Err(err) => {
                    warn!(error = %err, "Stopped reading console input");
                    stdin_open = false;
                }
            },
        }
    }

    lifecycle.stop().await?;
    handle.shutdown().await?;
    runtime_task.await.context("tracker runtime task failed")?;
    info!("Clipboard watch finished");
    Ok(())
}

/// Returns `false` when the user asked to quit.
///
/// Settings commands go through `store`, whose clipboard channel feeds the
/// running tracker.
async fn apply_console_line(
    line: &str,
    store: &SettingsStore,
    handle: &TrackerHandle,
    lifecycle: &ClipboardWatcherLifecycle,
) -> Result<bool> {
    let command = match console::parse_command(line) {
        Ok(Some(command)) => command,
        Ok(None) => return Ok(true),
        Err(message) => {
            println!("{message}");
            return Ok(true);
        }
    };

    match command {
        ConsoleCommand::Copy(position) => match console::entry_at(&handle.snapshot(), position) {
            Some(id) => {
                if !handle.select_for_copy(id).await? {
                    println!("Could not copy entry {position}");
                }
            }
            None => println!("No entry {position}"),
        },
        ConsoleCommand::Remove(position) => match console::entry_at(&handle.snapshot(), position) {
            Some(id) => handle.remove(id).await?,
            None => println!("No entry {position}"),
        },
        ConsoleCommand::Clear => handle.clear().await?,
        ConsoleCommand::Limit(limit) => {
            if store.set_history_limit(limit).await? {
                let limit = store.current().clipboard.history_limit;
                println!("History limit set to {limit}");
            }
        }
        ConsoleCommand::Block(app_id) => {
            if store.block_source(&app_id).await? {
                println!("Blocked {app_id}");
            }
        }
        ConsoleCommand::Unblock(app_id) => {
            if store.unblock_source(&app_id).await? {
                println!("Unblocked {app_id}");
            }
        }
        ConsoleCommand::Pause => lifecycle.stop().await?,
        ConsoleCommand::Resume => lifecycle.start().await?,
        ConsoleCommand::Quit => return Ok(false),
    }
    Ok(true)
}

async fn run_settings(config: &RuntimeConfig, command: SettingsCommand) -> Result<()> {
    let store = wiring::load_settings_store(&config.settings_path).await?;

    let changed = match &command {
        SettingsCommand::Show => false,
        SettingsCommand::SetLimit { limit } => store.set_history_limit(*limit).await?,
        SettingsCommand::SetMenuLimit { limit } => store.set_menu_bar_limit(*limit).await?,
        SettingsCommand::Block { bundle_id } => store.block_source(bundle_id).await?,
        SettingsCommand::Unblock { bundle_id } => store.unblock_source(bundle_id).await?,
    };
    if command != SettingsCommand::Show && !changed {
        println!("Settings unchanged");
    }

    print_settings(&store)
}

fn print_settings(store: &SettingsStore) -> Result<()> {
    let rendered = serde_json::to_string_pretty(&store.current())?;
    println!("{rendered}");
    Ok(())
}

async fn run_convert(input: &Path, to: Option<&str>, out: Option<PathBuf>) -> Result<()> {
    let target = to.map(ImageFormat::parse_output).transpose()?;
    let usecase = ConvertImage::new(Arc::new(ImageCrateEncoder::new()));

    let output = usecase.execute(input, target, out.as_deref()).await?;
    println!("{}", output.display());
    Ok(())
}

async fn run_timer(config: &RuntimeConfig, minutes: Option<u32>, reset: bool) -> Result<()> {
    let store = wiring::load_settings_store(&config.settings_path).await?;
    let mut session = FocusTimerSession::new(store);
    if reset {
        session.reset().await?;
    }
    if let Some(minutes) = minutes {
        session.set_duration(minutes).await?;
    }

    println!(
        "Focus session: {} remaining",
        console::format_clock(session.timer().remaining_seconds())
    );
    let shutdown = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "Ctrl-C handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    match session.run_until(shutdown).await? {
        SessionEnd::Finished => {
            let bell = if session.timer().play_end_sound() { "\x07" } else { "" };
            println!("{bell}Focus session complete");
        }
        SessionEnd::Interrupted => println!(
            "Paused with {} remaining",
            console::format_clock(session.timer().remaining_seconds())
        ),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    use sab_app::{ClipboardHistoryTracker, TrackerRuntime};
    use sab_core::ports::{ClockPort, FrontmostAppPort, PasteboardPort};
    use sab_core::{ChangeToken, ClipboardContent, PasteboardContents, SourceApp};
    use tokio::time::sleep;

    #[derive(Default)]
    struct TextPasteboard {
        state: Mutex<(u64, String)>,
    }

    impl TextPasteboard {
        fn copy(&self, text: &str) {
            let mut state = self.state.lock().unwrap();
            state.0 += 1;
            state.1 = text.to_string();
        }
    }

    impl PasteboardPort for TextPasteboard {
        fn change_token(&self) -> Result<ChangeToken> {
            Ok(ChangeToken(self.state.lock().unwrap().0))
        }

        fn read(&self) -> Result<PasteboardContents> {
            Ok(PasteboardContents::text(self.state.lock().unwrap().1.clone()))
        }

        fn write(&self, content: &ClipboardContent) -> Result<()> {
            if let ClipboardContent::Text(text) = content {
                self.copy(text);
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct FocusedApp(Mutex<Option<SourceApp>>);

    impl FocusedApp {
        fn focus(&self, id: &str) {
            *self.0.lock().unwrap() = Some(SourceApp {
                id: Some(id.to_string()),
                name: Some(id.to_string()),
            });
        }
    }

    impl FrontmostAppPort for FocusedApp {
        fn frontmost_app(&self) -> Option<SourceApp> {
            self.0.lock().unwrap().clone()
        }
    }

    struct ZeroClock;

    impl ClockPort for ZeroClock {
        fn now_ms(&self) -> i64 {
            0
        }
    }

    fn titles(handle: &TrackerHandle) -> Vec<String> {
        handle
            .snapshot()
            .iter()
            .map(|entry| entry.display_title().to_string())
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn console_settings_apply_to_running_watch() {
        let dir = tempfile::tempdir().unwrap();
        let store = wiring::load_settings_store(&dir.path().join("settings.json"))
            .await
            .unwrap();
        let pasteboard = Arc::new(TextPasteboard::default());
        let focused = Arc::new(FocusedApp::default());
        let tracker = ClipboardHistoryTracker::new(
            pasteboard.clone(),
            focused.clone(),
            Arc::new(ZeroClock),
            store.current().clipboard,
        );
        let (runtime, handle) = TrackerRuntime::new(
            tracker,
            store.subscribe_clipboard(),
            Duration::from_millis(600),
        );
        let runtime_task = tokio::spawn(runtime.run());
        let lifecycle = ClipboardWatcherLifecycle::new(Arc::new(handle.clone()));
        lifecycle.start().await.unwrap();

        for i in 0..5 {
            pasteboard.copy(&format!("value-{i}"));
            sleep(Duration::from_millis(650)).await;
        }
        assert_eq!(titles(&handle).len(), 5);

        assert!(apply_console_line("limit 3", &store, &handle, &lifecycle)
            .await
            .unwrap());
        sleep(Duration::from_millis(10)).await;
        assert_eq!(store.current().clipboard.history_limit, 3);
        assert_eq!(titles(&handle), vec!["value-4", "value-3", "value-2"]);

        assert!(
            apply_console_line("block com.example.vault", &store, &handle, &lifecycle)
                .await
                .unwrap()
        );
        focused.focus("com.example.vault");
        pasteboard.copy("secret");
        sleep(Duration::from_millis(650)).await;
        assert_eq!(titles(&handle), vec!["value-4", "value-3", "value-2"]);

        assert!(!apply_console_line("quit", &store, &handle, &lifecycle)
            .await
            .unwrap());
        lifecycle.stop().await.unwrap();
        handle.shutdown().await.unwrap();
        runtime_task.await.unwrap();
    }
}

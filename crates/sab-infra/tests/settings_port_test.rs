use std::sync::Arc;

use sab_core::ports::SettingsPort;
use sab_core::Settings;
use sab_infra::FileSettingsRepository;

#[tokio::test]
async fn later_saves_replace_earlier_ones() {
    let dir = tempfile::tempdir().unwrap();
    let port: Arc<dyn SettingsPort> =
        Arc::new(FileSettingsRepository::new(dir.path().join("settings.json")));

    let mut first = Settings::default();
    first.clipboard.history_limit = 12;
    port.save(&first).await.unwrap();

    let mut second = first.clone();
    second.clipboard.blocked_source_ids.insert("com.apple.keychainaccess".into());
    second.timer.duration_minutes = 45;
    second.timer.remaining_seconds = 45 * 60;
    port.save(&second).await.unwrap();

    let loaded = port.load().await.unwrap();
    assert_eq!(loaded, second);
}

#[tokio::test]
async fn written_file_is_human_readable_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    FileSettingsRepository::new(&path)
        .save(&Settings::default())
        .await
        .unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\n  \"clipboard\""));
    assert!(raw.contains("\"history_limit\": 8"));
}

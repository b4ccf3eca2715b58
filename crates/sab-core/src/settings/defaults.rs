use std::collections::BTreeSet;

use super::model::*;

impl Default for ClipboardSettings {
    fn default() -> Self {
        Self {
            history_limit: 8,
            blocked_source_ids: BTreeSet::new(),
        }
    }
}

impl Default for MenuBarSettings {
    fn default() -> Self {
        Self { clipboard_limit: 8 }
    }
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            duration_minutes: 25,
            remaining_seconds: 25 * 60,
            is_running: false,
            auto_dnd_enabled: true,
            play_end_sound: true,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            clipboard: ClipboardSettings::default(),
            menu_bar: MenuBarSettings::default(),
            timer: TimerSettings::default(),
        }
    }
}

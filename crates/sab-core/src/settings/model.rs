use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Allowed clipboard history sizes.
pub const HISTORY_LIMIT_RANGE: RangeInclusive<u32> = 3..=50;

/// Allowed size of the menu bar quick-copy list.
pub const MENU_BAR_LIMIT_RANGE: RangeInclusive<u32> = 3..=20;

/// Allowed focus session lengths, in minutes.
pub const TIMER_DURATION_RANGE: RangeInclusive<u32> = 5..=90;

fn clamp(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardSettings {
    pub history_limit: u32,

    /// Bundle identifiers whose clipboard activity is never captured.
    pub blocked_source_ids: BTreeSet<String>,
}

impl ClipboardSettings {
    pub fn with_history_limit(mut self, limit: u32) -> Self {
        self.history_limit = clamp(limit, &HISTORY_LIMIT_RANGE);
        self
    }

    pub fn is_blocked(&self, source_id: &str) -> bool {
        self.blocked_source_ids.contains(source_id)
    }

    fn normalized(mut self) -> Self {
        self.history_limit = clamp(self.history_limit, &HISTORY_LIMIT_RANGE);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuBarSettings {
    pub clipboard_limit: u32,
}

impl MenuBarSettings {
    fn normalized(mut self) -> Self {
        self.clipboard_limit = clamp(self.clipboard_limit, &MENU_BAR_LIMIT_RANGE);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerSettings {
    pub duration_minutes: u32,
    pub remaining_seconds: u32,
    pub is_running: bool,
    pub auto_dnd_enabled: bool,
    pub play_end_sound: bool,
}

impl TimerSettings {
    pub fn normalized(mut self) -> Self {
        self.duration_minutes = clamp(self.duration_minutes, &TIMER_DURATION_RANGE);
        self.remaining_seconds = self.remaining_seconds.min(self.duration_minutes * 60);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "current_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub clipboard: ClipboardSettings,

    #[serde(default)]
    pub menu_bar: MenuBarSettings,

    #[serde(default)]
    pub timer: TimerSettings,
}

impl Settings {
    /// Apply every range clamp. Loading always goes through this.
    pub fn normalized(self) -> Self {
        let normalized = Self {
            schema_version: self.schema_version,
            clipboard: self.clipboard.clone().normalized(),
            menu_bar: self.menu_bar.clone().normalized(),
            timer: self.timer.clone().normalized(),
        };

        #[cfg(feature = "tracing")]
        if normalized != self {
            tracing::debug!(
                history_limit = normalized.clipboard.history_limit,
                menu_bar_limit = normalized.menu_bar.clipboard_limit,
                timer_minutes = normalized.timer.duration_minutes,
                "Clamped out-of-range settings"
            );
        }

        normalized
    }
}

fn current_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}

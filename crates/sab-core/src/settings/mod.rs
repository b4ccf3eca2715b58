//! User preferences persisted across restarts.
mod defaults;
pub mod model;

pub use model::{
    ClipboardSettings, MenuBarSettings, Settings, TimerSettings, CURRENT_SCHEMA_VERSION,
    HISTORY_LIMIT_RANGE, MENU_BAR_LIMIT_RANGE, TIMER_DURATION_RANGE,
};

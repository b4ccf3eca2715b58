use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use sab_core::ports::{ClockPort, FrontmostAppPort, PasteboardPort, SettingsPort};
use sab_core::{ChangeToken, ClipboardContent, PasteboardContents, Settings, SourceApp};

#[derive(Default)]
struct Board {
    token: u64,
    contents: PasteboardContents,
}

#[derive(Clone, Default)]
pub struct SharedPasteboard(Arc<Mutex<Board>>);

impl SharedPasteboard {
    pub fn copy_text(&self, text: &str) {
        let mut board = self.0.lock().unwrap();
        board.token += 1;
        board.contents = PasteboardContents::text(text);
    }

    pub fn current_text(&self) -> Option<String> {
        self.0.lock().unwrap().contents.text.clone()
    }
}

impl PasteboardPort for SharedPasteboard {
    fn change_token(&self) -> Result<ChangeToken> {
        Ok(ChangeToken(self.0.lock().unwrap().token))
    }

    fn read(&self) -> Result<PasteboardContents> {
        Ok(self.0.lock().unwrap().contents.clone())
    }

    fn write(&self, content: &ClipboardContent) -> Result<()> {
        let mut board = self.0.lock().unwrap();
        board.token += 1;
        board.contents = match content {
            ClipboardContent::Text(text) => PasteboardContents::text(text.clone()),
            ClipboardContent::Image(png) => PasteboardContents::image(png.clone()),
        };
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct SwitchableApp(Arc<Mutex<Option<SourceApp>>>);

impl SwitchableApp {
    pub fn focus(&self, id: &str, name: &str) {
        *self.0.lock().unwrap() = Some(SourceApp {
            id: Some(id.into()),
            name: Some(name.into()),
        });
    }
}

impl FrontmostAppPort for SwitchableApp {
    fn frontmost_app(&self) -> Option<SourceApp> {
        self.0.lock().unwrap().clone()
    }
}

pub struct ZeroClock;

impl ClockPort for ZeroClock {
    fn now_ms(&self) -> i64 {
        0
    }
}

#[derive(Default)]
pub struct MemorySettings(Mutex<Option<Settings>>);

#[async_trait]
impl SettingsPort for MemorySettings {
    async fn load(&self) -> Result<Settings> {
        Ok(self.0.lock().unwrap().clone().unwrap_or_default())
    }

    async fn save(&self, settings: &Settings) -> Result<()> {
        *self.0.lock().unwrap() = Some(settings.clone());
        Ok(())
    }
}

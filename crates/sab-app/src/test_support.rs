//! In-memory port doubles shared by unit tests.

use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use sab_core::ports::{ClockPort, FrontmostAppPort, PasteboardPort, SettingsPort};
use sab_core::{ChangeToken, ClipboardContent, PasteboardContents, Settings, SourceApp};

#[derive(Default)]
struct PasteboardState {
    token: u64,
    contents: PasteboardContents,
    writes: Vec<ClipboardContent>,
    unreadable: bool,
}

/// Pasteboard whose change counter bumps on every `set_*` and `write`.
#[derive(Clone, Default)]
pub struct FakePasteboard {
    state: Arc<Mutex<PasteboardState>>,
}

impl FakePasteboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&self, text: &str) {
        self.set_contents(PasteboardContents::text(text));
    }

    pub fn set_image(&self, png: &[u8]) {
        self.set_contents(PasteboardContents::image(png.to_vec()));
    }

    pub fn set_contents(&self, contents: PasteboardContents) {
        let mut state = self.state.lock().unwrap();
        state.token += 1;
        state.contents = contents;
    }

    pub fn set_unreadable(&self, unreadable: bool) {
        self.state.lock().unwrap().unreadable = unreadable;
    }

    pub fn writes(&self) -> Vec<ClipboardContent> {
        self.state.lock().unwrap().writes.clone()
    }
}

impl PasteboardPort for FakePasteboard {
    fn change_token(&self) -> Result<ChangeToken> {
        let state = self.state.lock().unwrap();
        if state.unreadable {
            return Err(anyhow!("pasteboard unavailable"));
        }
        Ok(ChangeToken(state.token))
    }

    fn read(&self) -> Result<PasteboardContents> {
        let state = self.state.lock().unwrap();
        if state.unreadable {
            return Err(anyhow!("pasteboard unavailable"));
        }
        Ok(state.contents.clone())
    }

    fn write(&self, content: &ClipboardContent) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.token += 1;
        state.writes.push(content.clone());
        state.contents = match content {
            ClipboardContent::Text(text) => PasteboardContents::text(text.clone()),
            ClipboardContent::Image(png) => PasteboardContents::image(png.clone()),
        };
        Ok(())
    }
}

/// Frontmost app that tests can switch between captures.
#[derive(Clone, Default)]
pub struct FakeFrontmostApp {
    current: Arc<Mutex<Option<SourceApp>>>,
}

impl FakeFrontmostApp {
    pub fn set(&self, id: &str, name: &str) {
        *self.current.lock().unwrap() = Some(SourceApp {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
        });
    }

    pub fn clear(&self) {
        *self.current.lock().unwrap() = None;
    }
}

impl FrontmostAppPort for FakeFrontmostApp {
    fn frontmost_app(&self) -> Option<SourceApp> {
        self.current.lock().unwrap().clone()
    }
}

pub struct FixedClock(pub i64);

impl ClockPort for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}

/// Settings port backed by memory, counting saves.
#[derive(Default)]
pub struct InMemorySettings {
    pub stored: Mutex<Option<Settings>>,
    pub saves: Mutex<usize>,
}

#[async_trait]
impl SettingsPort for InMemorySettings {
    async fn load(&self) -> Result<Settings> {
        Ok(self.stored.lock().unwrap().clone().unwrap_or_default())
    }

    async fn save(&self, settings: &Settings) -> Result<()> {
        *self.stored.lock().unwrap() = Some(settings.clone());
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }
}

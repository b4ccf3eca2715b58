use std::sync::Mutex;

use anyhow::{anyhow, Result};
use clipboard_rs::ClipboardContext;
use tracing::{debug, debug_span};

use sab_core::ports::PasteboardPort;
use sab_core::{ChangeToken, ClipboardContent, PasteboardContents};

use super::common::{read_contents, write_content};
use super::digest::DigestTracker;

/// Pasteboard for platforms without a native change counter.
pub struct PollingPasteboard {
    inner: Mutex<ClipboardContext>,
    tracker: Mutex<DigestTracker>,
}

impl PollingPasteboard {
    pub fn new() -> Result<Self> {
        let context = ClipboardContext::new()
            .map_err(|e| anyhow!("Failed to create clipboard context: {}", e))?;
        Ok(Self {
            inner: Mutex::new(context),
            tracker: Mutex::new(DigestTracker::default()),
        })
    }

    fn read_locked(&self) -> Result<PasteboardContents> {
        let mut ctx = self
            .inner
            .lock()
            .map_err(|_| anyhow!("clipboard context lock poisoned"))?;
        read_contents(&mut ctx)
    }
}

impl PasteboardPort for PollingPasteboard {
    fn change_token(&self) -> Result<ChangeToken> {
        let contents = self.read_locked()?;
        let mut tracker = self
            .tracker
            .lock()
            .map_err(|_| anyhow!("digest tracker lock poisoned"))?;
        Ok(tracker.observe(&contents))
    }

    fn read(&self) -> Result<PasteboardContents> {
        self.read_locked()
    }

    fn write(&self, content: &ClipboardContent) -> Result<()> {
        let span = debug_span!("platform.pasteboard.write", bytes = content.size_bytes());
        span.in_scope(|| {
            let mut ctx = self
                .inner
                .lock()
                .map_err(|_| anyhow!("clipboard context lock poisoned"))?;
            write_content(&mut ctx, content)?;
            debug!("Wrote entry back to pasteboard");
            Ok(())
        })
    }
}

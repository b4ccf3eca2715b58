use std::sync::Mutex;

use anyhow::{anyhow, Result};
use clipboard_rs::ClipboardContext;
use cocoa::base::{id, nil};
use objc::{class, msg_send, sel, sel_impl};
use tracing::{debug, debug_span};

use sab_core::ports::PasteboardPort;
use sab_core::{ChangeToken, ClipboardContent, PasteboardContents};

use super::common::{read_contents, write_content};

/// General pasteboard, polled through `NSPasteboard.changeCount`.
pub struct MacOSPasteboard {
    inner: Mutex<ClipboardContext>,
}

impl MacOSPasteboard {
    pub fn new() -> Result<Self> {
        let context = ClipboardContext::new()
            .map_err(|e| anyhow!("Failed to create clipboard context: {}", e))?;
        Ok(Self {
            inner: Mutex::new(context),
        })
    }
}

impl PasteboardPort for MacOSPasteboard {
    fn change_token(&self) -> Result<ChangeToken> {
        let count: isize = unsafe {
            let pasteboard: id = msg_send![class!(NSPasteboard), generalPasteboard];
            if pasteboard == nil {
                return Err(anyhow!("general pasteboard unavailable"));
            }
            msg_send![pasteboard, changeCount]
        };
        Ok(ChangeToken(count as u64))
    }

    fn read(&self) -> Result<PasteboardContents> {
        let span = debug_span!("platform.macos.read_pasteboard");
        span.in_scope(|| {
            let mut ctx = self
                .inner
                .lock()
                .map_err(|_| anyhow!("clipboard context lock poisoned"))?;
            read_contents(&mut ctx)
        })
    }

    fn write(&self, content: &ClipboardContent) -> Result<()> {
        let span = debug_span!("platform.macos.write_pasteboard", bytes = content.size_bytes());
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

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, trace, trace_span, warn};

use sab_core::ports::{ClockPort, FrontmostAppPort, PasteboardPort};
use sab_core::{
    ChangeToken, ClipboardEntry, ClipboardHistory, ClipboardSettings, EntryId,
};

/// Result of one poll tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// Change token equals the last observed one.
    Unchanged,
    /// Token or content could not be read. Retried on the next change.
    Unreadable,
    /// Frontmost application is in the exclusion set.
    Excluded,
    /// Neither an image nor non-empty text was present.
    Empty,
    /// Content repeats the current head.
    Duplicate,
    Captured(EntryId),
}

/// Bounded record of clipboard activity, deduplicated against the head and
/// filtered by source application.
///
/// The tracker is synchronous: every method takes `&mut self`
/// and is only ever driven from the runtime task (see
/// [`crate::runtime::TrackerRuntime`]), which is what serializes history
/// mutation. Consumers observe the history through [`Self::subscribe`].
///
/// Every failure is swallowed and logged. Clipboard polling must never
/// crash or block its caller.
pub struct ClipboardHistoryTracker {
    pasteboard: Arc<dyn PasteboardPort>,
    frontmost_app: Arc<dyn FrontmostAppPort>,
    clock: Arc<dyn ClockPort>,
    settings: ClipboardSettings,
    history: ClipboardHistory,
    last_change_token: Option<ChangeToken>,
    history_tx: watch::Sender<Vec<ClipboardEntry>>,
}

impl ClipboardHistoryTracker {
    /// Create a tracker bound to the given ports.
    ///
    /// The current change token is recorded immediately so content already
    /// on the pasteboard at launch is not captured.
    pub fn new(
        pasteboard: Arc<dyn PasteboardPort>,
        frontmost_app: Arc<dyn FrontmostAppPort>,
        clock: Arc<dyn ClockPort>,
        settings: ClipboardSettings,
    ) -> Self {
        let last_change_token = match pasteboard.change_token() {
            Ok(token) => Some(token),
            Err(err) => {
                warn!(error = %err, "Failed to read initial pasteboard change token");
                None
            }
        };
        let (history_tx, _) = watch::channel(Vec::new());

        Self {
            pasteboard,
            frontmost_app,
            clock,
            settings,
            history: ClipboardHistory::new(),
            last_change_token,
            history_tx,
        }
    }

    /// Observe the history. The receiver always holds the latest list,
    /// most recent first.
    pub fn subscribe(&self) -> watch::Receiver<Vec<ClipboardEntry>> {
        self.history_tx.subscribe()
    }

    pub fn entries(&self) -> &[ClipboardEntry] {
        self.history.entries()
    }

    pub fn settings(&self) -> &ClipboardSettings {
        &self.settings
    }

    /// One poll tick.
    pub fn capture_step(&mut self) -> CaptureOutcome {
        let span = trace_span!("usecase.capture_step");
        let _enter = span.enter();

        let token = match self.pasteboard.change_token() {
            Ok(token) => token,
            Err(err) => {
                warn!(error = %err, "Failed to read pasteboard change token");
                return CaptureOutcome::Unreadable;
            }
        };
        if self.last_change_token == Some(token) {
            return CaptureOutcome::Unchanged;
        }
        // Recorded before filtering so a rejected change is not re-processed.
        self.last_change_token = Some(token);
        trace!(token = %token, "Pasteboard changed");

        let source = self.frontmost_app.frontmost_app();
        if let Some(source_id) = source.as_ref().and_then(|app| app.id.as_deref()) {
            if self.settings.is_blocked(source_id) {
                debug!(source_id, "Skipping clipboard change from excluded source");
                return CaptureOutcome::Excluded;
            }
        }

        let content = match self.pasteboard.read() {
            Ok(contents) => contents.into_content(),
            Err(err) => {
                warn!(error = %err, "Failed to read pasteboard content");
                return CaptureOutcome::Unreadable;
            }
        };
        let Some(content) = content else {
            trace!("Pasteboard holds nothing capturable");
            return CaptureOutcome::Empty;
        };
        if self.history.head_matches(&content) {
            trace!("Clipboard content repeats the head entry");
            return CaptureOutcome::Duplicate;
        }

        let entry = ClipboardEntry::new(
            content,
            source.and_then(|app| app.name),
            self.clock.now_ms(),
        );
        let entry_id = entry.id.clone();
        debug!(
            entry_id = %entry_id,
            source = %entry.source,
            is_image = entry.content.is_image(),
            size_bytes = entry.content.size_bytes(),
            "Captured clipboard entry"
        );

        self.history.push_front(entry);
        self.history.trim_to(self.settings.history_limit);
        self.publish();

        CaptureOutcome::Captured(entry_id)
    }

    /// Remove one entry. Unknown ids are ignored.
    pub fn remove(&mut self, id: &EntryId) -> bool {
        if self.history.remove(id).is_none() {
            debug!(entry_id = %id, "Remove ignored, entry not in history");
            return false;
        }
        self.publish();
        true
    }

    pub fn clear(&mut self) {
        if self.history.clear() {
            info!("Clipboard history cleared");
            self.publish();
        }
    }

    /// Write an entry back to the system pasteboard.
    ///
    /// Returns `false` when the id is stale or the write failed.
    pub fn select_for_copy(&mut self, id: &EntryId) -> bool {
        let Some(entry) = self.history.get(id) else {
            debug!(entry_id = %id, "Copy ignored, entry not in history");
            return false;
        };

        match self.pasteboard.write(&entry.content) {
            Ok(()) => {
                debug!(entry_id = %id, "Wrote history entry back to pasteboard");
                true
            }
            Err(err) => {
                warn!(entry_id = %id, error = %err, "Failed to write history entry to pasteboard");
                false
            }
        }
    }

    /// Adopt new settings and re-trim right away.
    pub fn apply_settings(&mut self, settings: ClipboardSettings) {
        self.settings = settings;
        let dropped = self.history.trim_to(self.settings.history_limit);
        if dropped > 0 {
            debug!(
                dropped,
                history_limit = self.settings.history_limit,
                "Trimmed history after limit change"
            );
            self.publish();
        }
    }

    fn publish(&self) {
        self.history_tx.send_replace(self.history.entries().to_vec());
    }
}

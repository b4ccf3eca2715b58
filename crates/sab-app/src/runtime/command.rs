use tokio::sync::oneshot;

use sab_core::EntryId;

pub enum TrackerCommand {
    /// Begin polling. No effect while already polling.
    Start,
    /// Stop polling. No effect while stopped.
    Stop,
    Remove(EntryId),
    Clear,
    /// Write an entry back to the pasteboard; replies whether it happened.
    SelectForCopy {
        id: EntryId,
        reply: oneshot::Sender<bool>,
    },
    Shutdown,
}

impl std::fmt::Debug for TrackerCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackerCommand::Start => f.write_str("Start"),
            TrackerCommand::Stop => f.write_str("Stop"),
            TrackerCommand::Remove(id) => write!(f, "Remove({id})"),
            TrackerCommand::Clear => f.write_str("Clear"),
            TrackerCommand::SelectForCopy { id, .. } => write!(f, "SelectForCopy({id})"),
            TrackerCommand::Shutdown => f.write_str("Shutdown"),
        }
    }
}

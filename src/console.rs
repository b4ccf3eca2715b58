//! Text rendering and input parsing for the interactive `watch` command.

use std::fmt::Write as _;

use sab_core::{quick_copy_slice, ClipboardContent, ClipboardEntry, EntryId};

pub const WATCH_HELP: &str = "Watching the clipboard. Commands: copy N | remove N | clear | \
     limit N | block APP_ID | unblock APP_ID | pause | resume | quit";

const TITLE_WIDTH: usize = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// 1-based position in the printed list.
    Copy(usize),
    Remove(usize),
    Clear,
    /// New history limit, clamped by the settings store.
    Limit(u32),
    Block(String),
    Unblock(String),
    Pause,
    Resume,
    Quit,
}

/// `Ok(None)` for blank input.
pub fn parse_command(line: &str) -> Result<Option<ConsoleCommand>, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let argument = words.next();
    if words.next().is_some() {
        return Err(format!("Too many arguments: {}", line.trim()));
    }

    let position = |name: &str| -> Result<usize, String> {
        let raw = argument.ok_or_else(|| format!("Usage: {name} N"))?;
        match raw.parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(format!("Not a list position: {raw}")),
        }
    };

    let app_id = |name: &str| -> Result<String, String> {
        argument
            .map(str::to_string)
            .ok_or_else(|| format!("Usage: {name} APP_ID"))
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "copy" | "c" => ConsoleCommand::Copy(position("copy")?),
        "remove" | "rm" => ConsoleCommand::Remove(position("remove")?),
        "clear" => ConsoleCommand::Clear,
        "limit" => {
            let raw = argument.ok_or_else(|| "Usage: limit N".to_string())?;
            let limit = raw
                .parse::<u32>()
                .map_err(|_| format!("Not a number: {raw}"))?;
            ConsoleCommand::Limit(limit)
        }
        "block" => ConsoleCommand::Block(app_id("block")?),
        "unblock" => ConsoleCommand::Unblock(app_id("unblock")?),
        "pause" | "stop" => ConsoleCommand::Pause,
        "resume" | "start" => ConsoleCommand::Resume,
        "quit" | "q" | "exit" => ConsoleCommand::Quit,
        other => return Err(format!("Unknown command: {other}")),
    };
    Ok(Some(command))
}

pub fn entry_at(entries: &[ClipboardEntry], position: usize) -> Option<EntryId> {
    position
        .checked_sub(1)
        .and_then(|index| entries.get(index))
        .map(|entry| entry.id.clone())
}

/// Numbered history list. Entries in the quick-copy list are starred.
pub fn render_history(entries: &[ClipboardEntry], menu_limit: u32) -> String {
    if entries.is_empty() {
        return "Clipboard history is empty".to_string();
    }

    let quick = quick_copy_slice(entries, menu_limit).len();
    let mut out = format!("Clipboard history ({})", entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let marker = if index < quick { '*' } else { ' ' };
        let _ = write!(
            out,
            "\n{marker}{:>3}. {}  [{}]",
            index + 1,
            entry_label(entry),
            entry.source
        );
    }
    out
}

fn entry_label(entry: &ClipboardEntry) -> String {
    match &entry.content {
        ClipboardContent::Image(bytes) => format!("Image ({})", format_size(bytes.len())),
        ClipboardContent::Text(text) => {
            let flat: String = text
                .chars()
                .map(|c| if c.is_control() { ' ' } else { c })
                .collect();
            let flat = flat.trim();
            if flat.chars().count() > TITLE_WIDTH {
                let cut: String = flat.chars().take(TITLE_WIDTH - 1).collect();
                format!("{cut}…")
            } else {
                flat.to_string()
            }
        }
    }
}

fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

/// `mm:ss`
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

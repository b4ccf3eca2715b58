use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "swissarmybar")]
#[command(about = "Clipboard history, focus timer and image converter", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of `<data dir>/config.toml`
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Track clipboard history until interrupted
    ///
    /// While running, type `copy N`, `remove N`, `clear`, `limit N`,
    /// `block APP_ID`, `unblock APP_ID`, `pause`, `resume` or `quit`
    /// followed by Enter. Settings changed here apply to the running history.
    Watch,
    /// Show or change stored preferences
    Settings {
        #[command(subcommand)]
        command: Option<SettingsCommand>,
    },
    /// Convert an image file to another format
    Convert {
        input: PathBuf,

        /// Target format: JPG, PNG or HEIC (defaults to the suggestion for the input)
        #[arg(long = "to")]
        to: Option<String>,

        /// Output directory (defaults to the system temp dir)
        #[arg(long = "out")]
        out: Option<PathBuf>,
    },
    /// Run a focus session until it finishes or Ctrl-C
    Timer {
        /// Session length in minutes (clamped to 5..=90)
        #[arg(short, long)]
        minutes: Option<u32>,

        /// Discard a paused session and start from the full duration
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum SettingsCommand {
    /// Print current settings (default)
    Show,
    /// Number of clipboard entries to keep (3..=50)
    SetLimit { limit: u32 },
    /// Number of entries in the menu bar quick-copy list (3..=20)
    SetMenuLimit { limit: u32 },
    /// Never record clipboard changes made while this app is frontmost
    Block { bundle_id: String },
    /// Remove an app from the exclusion list
    Unblock { bundle_id: String },
}

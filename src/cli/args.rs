//! CLI argument definitions using Clap

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::domain::display::Display;
use crate::domain::hotkey::Accelerator;
use crate::domain::interval::PollInterval;

/// ClipArt - clipboard history with per-display panels and global hotkeys
#[derive(Parser, Debug)]
#[command(name = "clipart")]
#[command(version)]
#[command(about = "Clipboard history with per-display panels and quick-paste hotkeys")]
#[command(long_about = None)]
pub struct Cli {
    /// Clipboard poll interval (e.g., 250ms, 1s, 1s500ms)
    #[arg(short = 'p', long, value_name = "TIME", env = "CLIPART_POLL_INTERVAL")]
    pub poll_interval: Option<String>,

    /// Toggle accelerator candidate, tried in order (repeatable)
    #[arg(short = 't', long = "toggle", value_name = "ACCEL", value_delimiter = ',')]
    pub toggle: Vec<String>,

    /// Keep panels out of screenshots and screen sharing
    #[arg(long)]
    pub content_protection: bool,

    /// Do not register any global hotkeys
    #[arg(long)]
    pub no_hotkeys: bool,

    /// Do not pop up the panels when something new is copied
    #[arg(long)]
    pub no_show_on_copy: bool,

    /// Clipboard backend
    #[arg(long, value_name = "BACKEND")]
    pub clipboard_backend: Option<ClipboardBackendArg>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Clipboard backend argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ClipboardBackendArg {
    Arboard,
    Wayland,
}

impl ClipboardBackendArg {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Arboard => "arboard",
            Self::Wayland => "wayland",
        }
    }
}

/// Fully resolved options for the clipboard service
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub poll_interval: PollInterval,
    pub history_limit: usize,
    pub toggle_candidates: Vec<Accelerator>,
    pub content_protection: bool,
    pub show_on_copy: bool,
    pub hotkeys: bool,
    pub clipboard_backend: String,
    pub displays: Vec<Display>,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "poll_interval",
    "history_limit",
    "toggle_candidates",
    "content_protection",
    "show_on_copy",
    "hotkeys",
    "linux.clipboard_backend",
];

/// Valid clipboard backend values
pub const VALID_CLIPBOARD_BACKENDS: &[&str] = &["arboard", "wayland"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

/// Map `-v` occurrences to a default log filter
pub fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::config::ToastBackend;
use crate::domain::notification::Severity;

/// HMS Notify - hotel dashboard notifications on the desktop
#[derive(Parser, Debug)]
#[command(name = "hms-notify")]
#[command(version)]
#[command(about = "Desktop notifications for the hotel management dashboard: chirp, toast and unread badge")]
#[command(long_about = None)]
pub struct Cli {
    /// Dashboard base URL (e.g., https://hotel.example.com)
    #[arg(short = 'u', long, value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Toast renderer
    #[arg(short = 't', long, value_name = "BACKEND", global = true)]
    pub toast: Option<ToastArg>,

    /// Do not play the notification chirp
    #[arg(long, global = true)]
    pub no_sound: bool,

    /// Write the unread count to this file
    #[arg(short = 'b', long, value_name = "PATH", global = true)]
    pub badge_file: Option<PathBuf>,

    /// Durable state file (last seen notification id)
    #[arg(long, value_name = "PATH", global = true)]
    pub state_file: Option<PathBuf>,

    /// Toast color theme
    #[arg(long, value_name = "NAME", global = true)]
    pub theme: Option<String>,

    /// Poll interval for daemon mode (e.g., 3s, 500ms, 1m)
    #[arg(short = 'i', long, value_name = "TIME", requires = "daemon")]
    pub poll_interval: Option<String>,

    /// Keep polling until interrupted (SIGINT/SIGTERM)
    #[arg(short = 'd', long)]
    pub daemon: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "info", global = true)]
    pub log_level: String,

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
    /// Inspect or reset the durable notification state
    State {
        #[command(subcommand)]
        action: StateAction,
    },
    /// Play the notification chirp once
    Chirp,
    /// Show a toast through the configured renderer
    Toast {
        /// Toast title
        title: String,
        /// Toast body
        #[arg(default_value = "")]
        message: String,
        /// Toast severity
        #[arg(short = 's', long, value_name = "SEVERITY", default_value = "info")]
        severity: SeverityArg,
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

/// State action subcommands
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum StateAction {
    /// Print the last seen notification id
    Show,
    /// Forget the last seen id so the latest unread notification is presented again
    Reset,
}

/// Toast backend argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ToastArg {
    Desktop,
    Terminal,
    None,
}

impl From<ToastArg> for ToastBackend {
    fn from(arg: ToastArg) -> Self {
        match arg {
            ToastArg::Desktop => ToastBackend::Desktop,
            ToastArg::Terminal => ToastBackend::Terminal,
            ToastArg::None => ToastBackend::None,
        }
    }
}

/// Severity argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SeverityArg {
    Info,
    Success,
    Warning,
    Error,
    Question,
}

impl From<SeverityArg> for Severity {
    fn from(arg: SeverityArg) -> Self {
        match arg {
            SeverityArg::Info => Severity::Info,
            SeverityArg::Success => Severity::Success,
            SeverityArg::Warning => Severity::Warning,
            SeverityArg::Error => Severity::Error,
            SeverityArg::Question => Severity::Question,
        }
    }
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "base_url",
    "session_id",
    "csrf_token",
    "poll_interval",
    "present_delay",
    "sound",
    "toast",
    "badge_file",
    "state_file",
    "theme",
    "on_reload",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, logging, signal handling,
//! and the one-shot and daemon runners.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod daemon_app;
pub mod logging;
pub mod pid_file;
pub mod presenter;
pub mod signals;
pub mod state_cmd;

// Re-export commonly used types
pub use app::{run_check, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, StateAction};
pub use daemon_app::run_daemon;
pub use presenter::Presenter;

//! Terminal output for commands and the daemon

use colored::*;

use crate::application::PollOutcome;

/// Writes status lines to stderr and results to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct Presenter;

impl Presenter {
    pub fn new() -> Self {
        Self
    }

    fn status(&self, marker: ColoredString, message: &str) {
        eprintln!("{} {}", marker, message);
    }

    pub fn info(&self, message: &str) {
        self.status("ℹ".cyan(), message);
    }

    pub fn success(&self, message: &str) {
        self.status("✓".green(), message);
    }

    pub fn warn(&self, message: &str) {
        self.status("⚠".yellow(), message);
    }

    pub fn error(&self, message: &str) {
        self.status("✗".red(), message);
    }

    /// Result text, the only thing written to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    pub fn daemon_status(&self, state: &str) {
        self.status("●".cyan(), &format!("Daemon {}", state));
    }

    pub fn key_value(&self, key: &str, value: &str) {
        println!("{} = {}", key.cyan(), value);
    }

    pub fn poll_outcome(&self, outcome: &PollOutcome) {
        self.output(&format_outcome(outcome));
    }
}

/// One-line description of a poll cycle
pub fn format_outcome(outcome: &PollOutcome) -> String {
    match outcome {
        PollOutcome::Unauthenticated => "not logged in".to_string(),
        PollOutcome::Unchanged { unread_count } => {
            format!("{} unread, nothing new", unread_count)
        }
        PollOutcome::NewNotification { id, unread_count } => {
            format!("{} unread, new notification {}", unread_count, id)
        }
    }
}

//! Single-instance guard for the daemon

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process;

use nix::errno::Errno;
use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;

const DEFAULT_PID_PATH: &str = "/tmp/hms-notify.pid";

/// Holds the daemon's PID on disk while it runs. Removed on drop.
pub struct PidFile {
    path: PathBuf,
}

impl PidFile {
    pub fn new() -> Self {
        Self::with_path(DEFAULT_PID_PATH)
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// PID of a live daemon recorded in the file, if any.
    ///
    /// A file naming a dead process is stale and gets removed.
    pub fn is_running(&self) -> Option<u32> {
        let pid = fs::read_to_string(&self.path)
            .ok()?
            .trim()
            .parse::<u32>()
            .ok()?;

        match kill(Pid::from_raw(pid as i32), None::<Signal>) {
            Ok(()) => Some(pid),
            Err(Errno::ESRCH) => {
                let _ = fs::remove_file(&self.path);
                None
            }
            Err(_) => None,
        }
    }

    /// Record this process, unless another daemon holds the file
    pub fn acquire(&self) -> Result<(), PidFileError> {
        if let Some(pid) = self.is_running() {
            return Err(PidFileError::AlreadyRunning(pid));
        }

        fs::write(&self.path, process::id().to_string())
            .map_err(|e| PidFileError::WriteFailed(format!("{}: {}", self.path.display(), e)))
    }

    pub fn release(&self) -> Result<(), PidFileError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PidFileError::RemoveFailed(format!(
                "{}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

impl Default for PidFile {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for PidFile {
    fn drop(&mut self) {
        let _ = self.release();
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PidFileError {
    #[error("hms-notify daemon already running with PID {0}")]
    AlreadyRunning(u32),

    #[error("Cannot write PID file {0}")]
    WriteFailed(String),

    #[error("Cannot remove PID file {0}")]
    RemoveFailed(String),
}

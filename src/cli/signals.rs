//! Signal handling and the in-process reload channel for daemon mode

use async_trait::async_trait;
use colored::Colorize;
use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::mpsc;

use crate::application::ports::{ReloadError, Reloader};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaemonSignal {
    /// The poller stored a pending notification; re-run the load sequence
    Reload,
    /// SIGINT or SIGTERM
    Shutdown,
}

/// Receives shutdown requests from the OS and reloads from the poller
pub struct DaemonSignalHandler {
    receiver: mpsc::Receiver<DaemonSignal>,
}

/// Forward one OS signal kind to the loop as a shutdown
fn forward_shutdown(
    kind: SignalKind,
    name: &'static str,
    tx: mpsc::Sender<DaemonSignal>,
) -> std::io::Result<()> {
    let mut stream = signal(kind)?;
    tokio::spawn(async move {
        if stream.recv().await.is_some() {
            eprintln!("{} {} received, shutting down", "↓".cyan(), name);
            let _ = tx.send(DaemonSignal::Shutdown).await;
        }
    });
    Ok(())
}

impl DaemonSignalHandler {
    /// Hook SIGINT and SIGTERM.
    ///
    /// The returned sender feeds the same queue and backs [`ChannelReloader`].
    pub async fn new() -> std::io::Result<(Self, mpsc::Sender<DaemonSignal>)> {
        let (tx, rx) = mpsc::channel(10);
        forward_shutdown(SignalKind::interrupt(), "SIGINT", tx.clone())?;
        forward_shutdown(SignalKind::terminate(), "SIGTERM", tx.clone())?;
        Ok((Self { receiver: rx }, tx))
    }

    /// Handler over an existing channel, with no OS signal hooks
    pub fn from_receiver(receiver: mpsc::Receiver<DaemonSignal>) -> Self {
        Self { receiver }
    }

    /// Wait for the next signal
    pub async fn recv(&mut self) -> Option<DaemonSignal> {
        self.receiver.recv().await
    }

    /// Take a signal if one is already queued
    pub fn try_recv(&mut self) -> Option<DaemonSignal> {
        self.receiver.try_recv().ok()
    }
}

/// Reloader that posts [`DaemonSignal::Reload`] to the daemon loop
pub struct ChannelReloader {
    sender: mpsc::Sender<DaemonSignal>,
}

impl ChannelReloader {
    pub fn new(sender: mpsc::Sender<DaemonSignal>) -> Self {
        Self { sender }
    }
}

#[async_trait]
impl Reloader for ChannelReloader {
    async fn reload(&self) -> Result<(), ReloadError> {
        self.sender
            .send(DaemonSignal::Reload)
            .await
            .map_err(|_| ReloadError::ChannelClosed)
    }
}

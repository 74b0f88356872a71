//! Daemon app runner

use std::process::{ExitCode, Stdio};
use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;

use crate::application::{NotificationPoller, PendingPresenter};
use crate::domain::config::AppConfig;

use super::app::{build_components, EXIT_ERROR, EXIT_SUCCESS};
use super::pid_file::PidFile;
use super::presenter::{format_outcome, Presenter};
use super::signals::{ChannelReloader, DaemonSignal, DaemonSignalHandler};

/// Run daemon mode
pub async fn run_daemon(config: AppConfig) -> ExitCode {
    let presenter = Presenter::new();

    let pid_file = PidFile::new();
    if let Err(e) = pid_file.acquire() {
        presenter.error(&e.to_string());
        return ExitCode::from(EXIT_ERROR);
    }

    // Setup signal handler (returns handler + sender for the reloader)
    let (mut signals, signal_tx) = match DaemonSignalHandler::new().await {
        Ok(s) => s,
        Err(e) => {
            presenter.error(&format!("Failed to setup signal handler: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let components = build_components(&config, Arc::new(ChannelReloader::new(signal_tx)));

    // Open the output device now so the first chirp is not delayed
    if let Err(e) = components.audio.warm_up().await {
        presenter.warn(&format!("Audio unavailable: {}", e));
    }

    let interval = config.poll_interval_or_default();
    presenter.daemon_status("started, polling for notifications");
    presenter.info(&format!(
        "PID: {} | Server: {} | Interval: {} | SIGINT: exit",
        std::process::id(),
        config.base_url_or_default(),
        interval
    ));

    let options = LoopOptions {
        period: interval.as_std(),
        on_reload: config.on_reload.clone(),
    };

    let result = daemon_loop(
        &components.poller,
        &components.pending,
        &mut signals,
        &presenter,
        &options,
    )
    .await;

    let _ = pid_file.release();

    if result {
        ExitCode::from(EXIT_SUCCESS)
    } else {
        ExitCode::from(EXIT_ERROR)
    }
}

/// Daemon loop settings
pub struct LoopOptions {
    pub period: Duration,
    /// Shell command run on every reload
    pub on_reload: Option<String>,
}

/// Poll until shutdown. Returns false if the signal channel closed.
pub async fn daemon_loop(
    poller: &NotificationPoller,
    pending: &PendingPresenter,
    signals: &mut DaemonSignalHandler,
    presenter: &Presenter,
    options: &LoopOptions,
) -> bool {
    // Initial load
    load(pending).await;

    let mut ticker = tokio::time::interval(options.period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately; polling starts one period after load
    ticker.tick().await;

    loop {
        let signal = tokio::select! {
            _ = ticker.tick() => {
                // A signal arriving mid-request abandons the poll
                tokio::select! {
                    result = poller.check_notifications() => {
                        match result {
                            Ok(outcome) => tracing::debug!("Poll: {}", format_outcome(&outcome)),
                            Err(e) => tracing::debug!("Error checking notifications: {}", e),
                        }
                        continue;
                    }
                    signal = signals.recv() => signal,
                }
            }
            signal = signals.recv() => signal,
        };

        match signal {
            Some(DaemonSignal::Reload) => {
                presenter.daemon_status("reloading");
                if let Some(command) = &options.on_reload {
                    spawn_reload_hook(command);
                }
                load(pending).await;
                // A reload restarts the poll timer
                ticker.reset();
            }
            Some(DaemonSignal::Shutdown) => {
                presenter.daemon_status("shutting down");
                return true;
            }
            None => return false,
        }
    }
}

/// Schedule presentation of any pending notification without waiting for it
async fn load(pending: &PendingPresenter) {
    match pending.recover_pending().await {
        Ok(Some(handle)) => {
            tokio::spawn(async move {
                match handle.await {
                    Ok(report) => tracing::debug!("Presented: {:?}", report),
                    Err(e) => tracing::error!("Presentation task failed: {}", e),
                }
            });
        }
        Ok(None) => {}
        Err(e) => tracing::debug!("{}", e),
    }
}

/// Run the user's reload hook through the shell
fn spawn_reload_hook(command: &str) {
    let child = tokio::process::Command::new("sh")
        .arg("-c")
        .arg(command)
        .stdin(Stdio::null())
        .kill_on_drop(false)
        .spawn();

    match child {
        Ok(mut child) => {
            let command = command.to_string();
            tokio::spawn(async move {
                match child.wait().await {
                    Ok(status) if !status.success() => {
                        tracing::warn!("Reload hook `{}` exited with {}", command, status)
                    }
                    Ok(_) => {}
                    Err(e) => tracing::warn!("Reload hook `{}` failed: {}", command, e),
                }
            });
        }
        Err(e) => tracing::warn!("Failed to run reload hook `{}`: {}", command, e),
    }
}

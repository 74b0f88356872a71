//! App wiring and the one-shot runners

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::ports::{AudioCue, ConfigStore, KeyValueStore, Reloader, TOAST_TIMEOUT};
use crate::application::{
    NotificationPoller, PendingPresenter, PresentationReport, RecoveryError, ToastPresenter,
};
use crate::domain::chirp::ChirpSpec;
use crate::domain::config::{AppConfig, ToastBackend};
use crate::domain::notification::Severity;
use crate::infrastructure::{
    create_audio_cue, create_badge, create_toaster, FileStore, HttpNotificationApi, MemoryStore,
    RodioAudioCue, XdgConfigStore,
};

use super::presenter::Presenter;
use super::signals::{ChannelReloader, DaemonSignal, DaemonSignalHandler};

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment overrides
pub const ENV_BASE_URL: &str = "HMS_NOTIFY_BASE_URL";
pub const ENV_SESSION_ID: &str = "HMS_NOTIFY_SESSION_ID";
pub const ENV_CSRF_TOKEN: &str = "HMS_NOTIFY_CSRF_TOKEN";

/// Everything a load needs, wired to concrete adapters
pub struct Components {
    pub poller: NotificationPoller,
    pub pending: PendingPresenter,
    pub toast: Arc<ToastPresenter>,
    pub audio: Arc<dyn AudioCue>,
}

/// Wire the use cases for `config`. The session store is fresh per process.
pub fn build_components(config: &AppConfig, reloader: Arc<dyn Reloader>) -> Components {
    let api = Arc::new(HttpNotificationApi::new(
        config.base_url_or_default(),
        config.cookie_header(),
    ));

    let durable: Arc<dyn KeyValueStore> = Arc::new(durable_store(config));
    let session: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let audio = create_audio_cue(config.sound_or_default());
    let toast = Arc::new(build_toast_presenter(config).with_link(api.notifications_page_url()));

    let poller = NotificationPoller::new(
        api.clone(),
        durable,
        Arc::clone(&session),
        create_badge(config.badge_file.clone()),
        reloader,
    );

    let pending = PendingPresenter::new(
        api,
        session,
        Arc::clone(&audio),
        Arc::clone(&toast),
        config.present_delay_or_default().as_std(),
    );

    Components {
        poller,
        pending,
        toast,
        audio,
    }
}

/// Durable store at the configured path, or the default data-dir location
pub fn durable_store(config: &AppConfig) -> FileStore {
    match &config.state_file {
        Some(path) => FileStore::with_path(path),
        None => FileStore::new(),
    }
}

fn build_toast_presenter(config: &AppConfig) -> ToastPresenter {
    ToastPresenter::new(create_toaster(config.toast_or_default()))
        .with_themes(config.themes.clone(), Some(config.theme_or_default().to_string()))
}

/// Run one poll cycle, and present the notification it found, if any
pub async fn run_check(config: AppConfig) -> ExitCode {
    let presenter = Presenter::new();

    let (tx, rx) = mpsc::channel(1);
    let mut signals = DaemonSignalHandler::from_receiver(rx);
    let components = build_components(&config, Arc::new(ChannelReloader::new(tx)));

    let outcome = match components.poller.check_notifications().await {
        Ok(outcome) => outcome,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };
    presenter.poll_outcome(&outcome);

    if signals.try_recv() != Some(DaemonSignal::Reload) {
        return ExitCode::from(EXIT_SUCCESS);
    }

    match load(&components.pending).await {
        Ok(Some(report)) => {
            report_presentation(&presenter, &report);
            linger_for_toast(&config, report.toast_shown).await;
            ExitCode::from(EXIT_SUCCESS)
        }
        Ok(None) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Recover a pending notification and wait for its presentation
async fn load(pending: &PendingPresenter) -> Result<Option<PresentationReport>, RecoveryError> {
    let Some(handle) = pending.recover_pending().await? else {
        return Ok(None);
    };

    match handle.await {
        Ok(report) => Ok(Some(report)),
        Err(e) => {
            tracing::error!("Presentation task failed: {}", e);
            Ok(None)
        }
    }
}

fn report_presentation(presenter: &Presenter, report: &PresentationReport) {
    if report.sound_played {
        presenter.info("Chirp played");
    }
    if report.toast_shown {
        presenter.info("Toast shown");
    }
    match report.marked_read {
        Some(true) => presenter.success("Marked as read"),
        Some(false) => presenter.warn("Could not mark notification as read"),
        None => {}
    }
}

/// The terminal toast lives in this process; keep it up for its full timeout
async fn linger_for_toast(config: &AppConfig, shown: bool) {
    if shown && config.toast_or_default() == ToastBackend::Terminal {
        tokio::time::sleep(TOAST_TIMEOUT).await;
    }
}

/// Play the chirp once
pub async fn run_chirp() -> ExitCode {
    let presenter = Presenter::new();
    let audio = RodioAudioCue::new();

    match audio.play(&ChirpSpec::notification()).await {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Show a single toast through the configured renderer
pub async fn run_toast(
    config: AppConfig,
    title: &str,
    message: &str,
    severity: Severity,
) -> ExitCode {
    let presenter = Presenter::new();
    let toast = build_toast_presenter(&config);

    match toast.show_toast(title, message, severity).await {
        Ok(true) => {
            linger_for_toast(&config, true).await;
            ExitCode::from(EXIT_SUCCESS)
        }
        Ok(false) => {
            presenter.warn("Toasts are disabled (toast = none)");
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Config values taken from the environment
pub fn env_config<F>(lookup: F) -> AppConfig
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| lookup(key).filter(|s| !s.is_empty());

    AppConfig {
        base_url: var(ENV_BASE_URL),
        session_id: var(ENV_SESSION_ID),
        csrf_token: var(ENV_CSRF_TOKEN),
        ..Default::default()
    }
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let file_config = XdgConfigStore::new().load_or_empty().await;

    let env_config = env_config(|key| env::var(key).ok());

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}

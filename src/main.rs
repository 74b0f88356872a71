//! HMS Notify CLI entry point

use std::process::ExitCode;

use clap::Parser;

use hms_notify::cli::{
    app::{
        durable_store, load_merged_config, run_check, run_chirp, run_toast, EXIT_ERROR,
        EXIT_USAGE_ERROR,
    },
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    daemon_app::run_daemon,
    logging,
    presenter::Presenter,
    state_cmd::handle_state_command,
};
use hms_notify::domain::config::{AppConfig, ToastBackend};
use hms_notify::domain::interval::Interval;
use hms_notify::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    logging::init(&cli.log_level);

    // Config commands work on the file alone
    if let Some(Commands::Config { action }) = cli.command {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    // Validate the interval before it is merged; a bad file value falls back to the default
    if let Some(interval) = &cli.poll_interval {
        if let Err(e) = interval.parse::<Interval>() {
            presenter.error(&format!("Invalid poll-interval: {}", e));
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        base_url: cli.base_url.clone(),
        poll_interval: cli.poll_interval.clone(),
        sound: if cli.no_sound { Some(false) } else { None },
        toast: cli.toast.map(|t| ToastBackend::from(t).to_string()),
        badge_file: cli.badge_file.clone(),
        state_file: cli.state_file.clone(),
        theme: cli.theme.clone(),
        ..Default::default()
    };

    let config = load_merged_config(cli_config).await;

    match cli.command {
        Some(Commands::State { action }) => {
            let store = durable_store(&config);
            if let Err(e) = handle_state_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Some(Commands::Chirp) => run_chirp().await,
        Some(Commands::Toast {
            title,
            message,
            severity,
        }) => run_toast(config, &title, &message, severity.into()).await,
        Some(Commands::Config { .. }) => unreachable!(), // Handled above
        None if cli.daemon => run_daemon(config).await,
        None => run_check(config).await,
    }
}

//! Config command handler

use std::path::PathBuf;

use crate::application::ports::ConfigStore;
use crate::domain::config::{AppConfig, ToastBackend};
use crate::domain::error::ConfigError;
use crate::domain::interval::Interval;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;
    validate_config_value(key, value)?;

    let mut config = store.load().await?;
    apply_value(&mut config, key, value)?;

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, display_value(key, value)));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let config = store.load().await?;
    match read_value(&config, key) {
        Some(v) => presenter.output(&display_value(key, &v)),
        None => presenter.output(NOT_SET),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        let value = read_value(&config, key)
            .map(|v| display_value(key, &v))
            .unwrap_or_else(|| NOT_SET.to_string());
        presenter.key_value(key, &value);
    }

    if let Some(themes) = &config.themes {
        for (name, entry) in themes {
            presenter.key_value(
                &format!("themes.{}", name),
                &format!(
                    "surface_dark={} text_main={}",
                    entry.surface_dark, entry.text_main
                ),
            );
        }
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn check_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

/// Write a validated value into the config
fn apply_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    let text = Some(value.to_string());
    match key {
        "base_url" => config.base_url = text,
        "session_id" => config.session_id = text,
        "csrf_token" => config.csrf_token = text,
        "poll_interval" => config.poll_interval = text,
        "present_delay" => config.present_delay = text,
        "sound" => config.sound = Some(parse_bool_for(key, value)?),
        "toast" => config.toast = Some(value.to_lowercase()),
        "badge_file" => config.badge_file = Some(PathBuf::from(value)),
        "state_file" => config.state_file = Some(PathBuf::from(value)),
        "theme" => config.theme = text,
        "on_reload" => config.on_reload = text,
        _ => unreachable!(), // Already validated
    }
    Ok(())
}

/// Raw stored value for a key
fn read_value(config: &AppConfig, key: &str) -> Option<String> {
    match key {
        "base_url" => config.base_url.clone(),
        "session_id" => config.session_id.clone(),
        "csrf_token" => config.csrf_token.clone(),
        "poll_interval" => config.poll_interval.clone(),
        "present_delay" => config.present_delay.clone(),
        "sound" => config.sound.map(|b| b.to_string()),
        "toast" => config.toast.clone(),
        "badge_file" => config
            .badge_file
            .as_ref()
            .map(|p| p.to_string_lossy().to_string()),
        "state_file" => config
            .state_file
            .as_ref()
            .map(|p| p.to_string_lossy().to_string()),
        "theme" => config.theme.clone(),
        "on_reload" => config.on_reload.clone(),
        _ => None,
    }
}

/// Value as shown to the user; credentials are masked
fn display_value(key: &str, value: &str) -> String {
    match key {
        "session_id" | "csrf_token" => mask_secret(value),
        _ => value.to_string(),
    }
}

/// Validate a config value based on key type
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::ValidationError {
        key: key.to_string(),
        message,
    };

    match key {
        "poll_interval" | "present_delay" => {
            value
                .parse::<Interval>()
                .map_err(|e| invalid(e.to_string()))?;
        }
        "sound" => {
            parse_bool_for(key, value)?;
        }
        "toast" => {
            value
                .parse::<ToastBackend>()
                .map_err(|e| invalid(e.to_string()))?;
        }
        "base_url" => {
            if !(value.starts_with("http://") || value.starts_with("https://")) {
                return Err(invalid(
                    "Value must start with http:// or https://".to_string(),
                ));
            }
        }
        "theme" => {
            if value.trim().is_empty() {
                return Err(invalid("Value must not be empty".to_string()));
            }
        }
        _ => {} // free-form strings and paths
    }
    Ok(())
}

fn parse_bool_for(key: &str, value: &str) -> Result<bool, ConfigError> {
    parse_bool(value).map_err(|_| ConfigError::ValidationError {
        key: key.to_string(),
        message: "Value must be 'true' or 'false'".to_string(),
    })
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}

/// Mask a credential for display (show first 4 and last 4 chars)
fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::XdgConfigStore;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, XdgConfigStore) {
        let dir = TempDir::new().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        (dir, store)
    }

    #[test]
    fn parse_bool_values() {
        assert_eq!(parse_bool("true"), Ok(true));
        assert_eq!(parse_bool("false"), Ok(false));
        assert_eq!(parse_bool("yes"), Ok(true));
        assert_eq!(parse_bool("no"), Ok(false));
        assert_eq!(parse_bool("1"), Ok(true));
        assert_eq!(parse_bool("0"), Ok(false));
        assert!(parse_bool("invalid").is_err());
    }

    #[test]
    fn mask_secret_long() {
        assert_eq!(mask_secret("abcdefghijklmnop"), "abcd...mnop");
    }

    #[test]
    fn mask_secret_short() {
        assert_eq!(mask_secret("short"), "*****");
    }

    #[test]
    fn only_credentials_are_masked() {
        assert_eq!(display_value("csrf_token", "abcdefghijklmnop"), "abcd...mnop");
        assert_eq!(display_value("base_url", "http://hotel.local"), "http://hotel.local");
    }

    #[test]
    fn validate_intervals() {
        assert!(validate_config_value("poll_interval", "3s").is_ok());
        assert!(validate_config_value("poll_interval", "1m30s").is_ok());
        assert!(validate_config_value("present_delay", "500ms").is_ok());
        assert!(validate_config_value("poll_interval", "soon").is_err());
        assert!(validate_config_value("poll_interval", "0s").is_err());
    }

    #[test]
    fn validate_toast_backend() {
        assert!(validate_config_value("toast", "desktop").is_ok());
        assert!(validate_config_value("toast", "terminal").is_ok());
        assert!(validate_config_value("toast", "none").is_ok());
        assert!(validate_config_value("toast", "popup").is_err());
    }

    #[test]
    fn validate_base_url() {
        assert!(validate_config_value("base_url", "https://hotel.example.com").is_ok());
        assert!(validate_config_value("base_url", "hotel.example.com").is_err());
    }

    #[test]
    fn free_form_keys_accept_anything() {
        assert!(validate_config_value("on_reload", "notify-send reload").is_ok());
        assert!(validate_config_value("badge_file", "/tmp/unread").is_ok());
    }

    #[tokio::test]
    async fn set_then_get_round_trips_through_store() {
        let (_dir, store) = temp_store();
        let presenter = Presenter::new();

        handle_set(&store, &presenter, "poll_interval", "10s")
            .await
            .unwrap();
        handle_set(&store, &presenter, "sound", "no").await.unwrap();
        handle_set(&store, &presenter, "badge_file", "/tmp/unread")
            .await
            .unwrap();

        let config = store.load().await.unwrap();
        assert_eq!(config.poll_interval.as_deref(), Some("10s"));
        assert_eq!(config.sound, Some(false));
        assert_eq!(read_value(&config, "badge_file").as_deref(), Some("/tmp/unread"));
    }

    #[tokio::test]
    async fn set_rejects_unknown_key_without_writing() {
        let (_dir, store) = temp_store();
        let result = handle_set(&store, &Presenter::new(), "api_key", "x").await;

        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
        assert!(!store.exists());
    }
}

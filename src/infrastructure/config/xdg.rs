//! TOML config file under the XDG config directory

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Directory name under the config root
const APP_DIR: &str = "hms-notify";

/// Config file name
const FILE_NAME: &str = "config.toml";

/// Config store at `$XDG_CONFIG_HOME/hms-notify/config.toml`
pub struct XdgConfigStore {
    path: PathBuf,
}

impl XdgConfigStore {
    pub fn new() -> Self {
        let root = dirs::config_dir().unwrap_or_else(std::env::temp_dir);
        Self {
            path: root.join(APP_DIR).join(FILE_NAME),
        }
    }

    /// Store backed by an explicit file
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn parse_toml(content: &str) -> Result<AppConfig, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    fn to_toml(config: &AppConfig) -> Result<String, ConfigError> {
        toml::to_string_pretty(config).map_err(|e| ConfigError::WriteError(e.to_string()))
    }
}

impl Default for XdgConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigStore for XdgConfigStore {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => Self::parse_toml(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(AppConfig::empty()),
            Err(e) => Err(ConfigError::ReadError(e.to_string())),
        }
    }

    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let content = Self::to_toml(config)?;

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }

        // Write beside the target, then swap it in
        let staged = self.path.with_extension("toml.tmp");
        fs::write(&staged, content)
            .await
            .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        fs::rename(&staged, &self.path)
            .await
            .map_err(|e| ConfigError::WriteError(e.to_string()))
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }

    async fn init(&self) -> Result<(), ConfigError> {
        if self.exists() {
            return Err(ConfigError::AlreadyExists(self.path.display().to_string()));
        }
        self.save(&AppConfig::defaults()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_ends_in_app_dir() {
        let path = XdgConfigStore::new().path();
        assert!(path.ends_with("hms-notify/config.toml"));
        assert!(path.is_absolute());
    }

    #[tokio::test]
    async fn save_replaces_file_without_leftovers() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));

        let config = AppConfig {
            theme: Some("theme-ocean".to_string()),
            ..Default::default()
        };
        store.save(&config).await.unwrap();

        assert_eq!(store.load().await.unwrap().theme.as_deref(), Some("theme-ocean"));
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test]
    async fn unreadable_toml_is_reported_and_skipped_leniently() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "base_url = [").unwrap();
        let store = XdgConfigStore::with_path(&path);

        assert!(matches!(store.load().await, Err(ConfigError::ParseError(_))));
        assert!(store.load_or_empty().await.base_url.is_none());
    }

    #[test]
    fn parse_toml_with_theme_tables() {
        let content = r##"
base_url = "https://hotel.example.com"
session_id = "abc"
poll_interval = "5s"
sound = false
theme = "theme-forest"

[themes.theme-forest]
surface_dark = "#14532d"
text_main = "#ecfdf5"
"##;

        let config = XdgConfigStore::parse_toml(content).unwrap();
        assert_eq!(config.base_url.as_deref(), Some("https://hotel.example.com"));
        assert_eq!(config.session_id.as_deref(), Some("abc"));
        assert_eq!(config.poll_interval.as_deref(), Some("5s"));
        assert_eq!(config.sound, Some(false));
        let themes = config.themes.unwrap();
        assert_eq!(themes["theme-forest"].surface_dark, "#14532d");
    }

    #[test]
    fn parse_toml_rejects_wrong_types() {
        assert!(matches!(
            XdgConfigStore::parse_toml("sound = \"loud\""),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[tokio::test]
    async fn init_writes_defaults_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("hms-notify").join("config.toml"));

        assert!(!store.exists());
        assert!(store.load().await.unwrap().base_url.is_none());

        store.init().await.unwrap();
        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.poll_interval.as_deref(), Some("3s"));
        assert_eq!(loaded.toast.as_deref(), Some("desktop"));

        assert!(matches!(
            store.init().await,
            Err(ConfigError::AlreadyExists(_))
        ));
    }
}

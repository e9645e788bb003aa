use crate::settings::config::Settings;
use crate::settings::credential::{Credential, API_KEY_ENV};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings for one voicegen process. Loaded once from a TOML file at startup
/// and read-only afterwards.
#[derive(Debug, Clone)]
pub struct SettingsManager {
    settings_path: PathBuf,
    settings: Settings,
}

impl SettingsManager {
    /// Create a new settings manager with default settings location
    pub fn new() -> Result<Self> {
        let settings_path = Self::default_settings_path()?;
        Self::from_path(settings_path)
    }

    /// Create a settings manager from a specific path
    pub fn from_path(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            Self::write_defaults(&path)?;
        }

        let settings = Self::load_from_file_with_backup(&path)?;

        Ok(Self {
            settings_path: path,
            settings,
        })
    }

    /// Get the default settings path (~/.voicegen/settings.toml)
    fn default_settings_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Failed to get home directory")?;
        Ok(home.join(".voicegen").join("settings.toml"))
    }

    fn write_defaults(path: &Path) -> Result<Settings> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {parent:?}"))?;
        }

        let default_settings = Settings::default();
        let contents = toml::to_string_pretty(&default_settings)
            .context("Failed to serialize default settings")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write default settings to {path:?}"))?;

        Ok(default_settings)
    }

    /// Load settings from a TOML file with backup on parse failure
    fn load_from_file_with_backup(path: &Path) -> Result<Settings> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {path:?}"))?;

        match toml::from_str(&contents) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                let backup_path = path.with_extension("toml.backup");
                tracing::warn!(
                    error = %e,
                    ?backup_path,
                    "settings file is corrupted, replacing with defaults"
                );
                fs::rename(path, &backup_path).with_context(|| {
                    format!("Failed to backup corrupted settings to {backup_path:?}")
                })?;

                Self::write_defaults(path)
            }
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// Resolve the API key from `ELEVEN_API_KEY`, falling back to the
    /// settings file.
    pub fn credential(&self) -> Result<Credential> {
        self.credential_with_env(std::env::var(API_KEY_ENV).ok())
    }

    pub(crate) fn credential_with_env(&self, env_value: Option<String>) -> Result<Credential> {
        if let Some(credential) = env_value.and_then(Credential::new) {
            tracing::debug!("using API key from {API_KEY_ENV}");
            return Ok(credential);
        }

        self.settings
            .elevenlabs
            .api_key
            .clone()
            .and_then(Credential::new)
            .with_context(|| {
                format!(
                    "No ElevenLabs API key found: set {API_KEY_ENV} or elevenlabs.api_key in {:?}",
                    self.settings_path
                )
            })
    }
}

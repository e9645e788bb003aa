use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";
pub const DEFAULT_MODEL_ID: &str = "eleven_monolingual_v1";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ElevenLabsSettings {
    /// Used when `ELEVEN_API_KEY` is not set in the environment
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model every synthesis request is issued against
    #[serde(default = "default_model_id")]
    pub model_id: String,
}

impl Default for ElevenLabsSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model_id: default_model_id(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputSettings {
    /// Directory saved audio is written to. Defaults to the working directory.
    #[serde(default)]
    pub directory: Option<PathBuf>,

    #[serde(default = "default_use_colors")]
    pub use_colors: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: None,
            use_colors: default_use_colors(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub elevenlabs: ElevenLabsSettings,

    #[serde(default)]
    pub output: OutputSettings,
}

impl Settings {
    pub fn output_dir(&self) -> PathBuf {
        self.output
            .directory
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model_id() -> String {
    DEFAULT_MODEL_ID.to_string()
}

fn default_use_colors() -> bool {
    true
}

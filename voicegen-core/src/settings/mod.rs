pub mod config;
pub mod credential;
pub mod manager;

pub use config::{ElevenLabsSettings, OutputSettings, Settings};
pub use credential::Credential;
pub use manager::SettingsManager;

use async_trait::async_trait;

use super::error::VoiceError;
use super::types::{AudioBuffer, SynthesisRequest, Voice};

/// Lists the voices available to the current credential
#[async_trait]
pub trait VoiceDirectory: Send + Sync {
    /// Voices in the order the provider returns them
    async fn list_voices(&self) -> Result<Vec<Voice>, VoiceError>;
}

/// Converts text into encoded audio
#[async_trait]
pub trait Synthesizer: Send + Sync {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<AudioBuffer, VoiceError>;
}

/// Voice management operations
#[async_trait]
pub trait VoiceAdmin: Send + Sync {
    async fn rename_voice(&self, voice_id: &str, new_name: &str) -> Result<(), VoiceError>;
}

//! Local audio playback for synthesized speech

#[cfg(feature = "playback")]
pub mod decode;
#[cfg(feature = "playback")]
pub mod playback;

use anyhow::Result;
use async_trait::async_trait;

use super::tts::types::AudioBuffer;

/// Plays encoded audio on a local output device.
///
/// Output streams are tied to the thread that opened them, so futures from
/// this trait are not `Send`.
#[async_trait(?Send)]
pub trait Player {
    /// Resolves once the whole clip has been rendered
    async fn play(&self, audio: &AudioBuffer) -> Result<()>;
}

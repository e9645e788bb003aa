pub mod elevenlabs;
pub mod error;
pub mod provider;
pub mod types;

pub use elevenlabs::{ElevenLabs, ElevenLabsConfig};
pub use error::VoiceError;
pub use provider::{Synthesizer, VoiceAdmin, VoiceDirectory};
pub use types::{AudioBuffer, SynthesisRequest, Voice};

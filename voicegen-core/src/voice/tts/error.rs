use thiserror::Error;

#[derive(Error, Debug)]
pub enum VoiceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("ElevenLabs API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("synthesis returned no audio")]
    EmptyAudio,

    #[error("voice name cannot be empty")]
    EmptyName,
}

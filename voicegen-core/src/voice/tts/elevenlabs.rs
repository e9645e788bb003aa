//! ElevenLabs voice listing, synthesis and voice editing

use async_trait::async_trait;
use reqwest::multipart::Form;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

use super::error::VoiceError;
use super::provider::{Synthesizer, VoiceAdmin, VoiceDirectory};
use super::types::{AudioBuffer, SynthesisRequest, Voice};
use crate::settings::config::{DEFAULT_BASE_URL, DEFAULT_MODEL_ID};
use crate::settings::{Credential, Settings};

#[derive(Debug, Clone)]
pub struct ElevenLabsConfig {
    pub credential: Credential,
    pub base_url: String,
    pub model_id: String,
}

impl ElevenLabsConfig {
    pub fn new(credential: Credential) -> Self {
        Self {
            credential,
            base_url: DEFAULT_BASE_URL.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
        }
    }

    pub fn from_settings(credential: Credential, settings: &Settings) -> Self {
        Self {
            credential,
            base_url: settings.elevenlabs.base_url.clone(),
            model_id: settings.elevenlabs.model_id.clone(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

pub struct ElevenLabs {
    config: ElevenLabsConfig,
    client: Client,
}

impl ElevenLabs {
    pub fn new(config: ElevenLabsConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn config(&self) -> &ElevenLabsConfig {
        &self.config
    }

    async fn check_status(response: Response) -> Result<Response, VoiceError> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Err(VoiceError::Api { status, body })
    }
}

#[derive(Serialize)]
struct SynthesizeBody<'a> {
    text: &'a str,
    model_id: &'a str,
}

#[derive(Deserialize)]
struct VoicesResponse {
    voices: Vec<VoiceData>,
}

#[derive(Deserialize)]
struct VoiceData {
    voice_id: String,
    name: String,
    #[serde(default)]
    category: Option<String>,
}

#[async_trait]
impl VoiceDirectory for ElevenLabs {
    async fn list_voices(&self) -> Result<Vec<Voice>, VoiceError> {
        let url = self.config.url("/v1/voices");
        tracing::debug!(%url, "listing voices");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .header("xi-api-key", self.config.credential.expose())
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let body = response.bytes().await?;
        let voices_response: VoicesResponse = serde_json::from_slice(&body)?;

        let voices = voices_response
            .voices
            .into_iter()
            .map(|v| Voice {
                id: v.voice_id,
                name: v.name,
                category: v.category,
            })
            .collect::<Vec<_>>();

        tracing::debug!(count = voices.len(), "voices listed");
        Ok(voices)
    }
}

#[async_trait]
impl Synthesizer for ElevenLabs {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<AudioBuffer, VoiceError> {
        let url = self
            .config
            .url(&format!("/v1/text-to-speech/{}", request.voice_id));
        tracing::debug!(
            voice_id = %request.voice_id,
            model_id = %self.config.model_id,
            chars = request.text.chars().count(),
            "synthesizing speech"
        );

        let body = SynthesizeBody {
            text: &request.text,
            model_id: &self.config.model_id,
        };

        let response = self
            .client
            .post(&url)
            .header("Accept", "audio/mpeg")
            .header("xi-api-key", self.config.credential.expose())
            .json(&body)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let bytes = response.bytes().await?.to_vec();
        if bytes.is_empty() {
            return Err(VoiceError::EmptyAudio);
        }

        tracing::debug!(bytes = bytes.len(), "synthesis complete");
        Ok(AudioBuffer::new(bytes))
    }
}

#[async_trait]
impl VoiceAdmin for ElevenLabs {
    async fn rename_voice(&self, voice_id: &str, new_name: &str) -> Result<(), VoiceError> {
        if new_name.trim().is_empty() {
            return Err(VoiceError::EmptyName);
        }

        let url = self.config.url(&format!("/v1/voices/{voice_id}/edit"));
        tracing::debug!(%voice_id, %new_name, "renaming voice");

        let form = Form::new().text("name", new_name.to_string());

        let response = self
            .client
            .post(&url)
            .header("Accept", "application/json")
            .header("xi-api-key", self.config.credential.expose())
            .multipart(form)
            .send()
            .await?;
        Self::check_status(response).await?;

        Ok(())
    }
}

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Encoded audio returned from synthesis, kept exactly as the provider sent it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioBuffer {
    pub bytes: Vec<u8>,
}

impl AudioBuffer {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Write the bytes verbatim to `<dir>/<name>.mp3`
    pub fn save(&self, dir: &Path, name: &str) -> Result<PathBuf> {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create directory: {dir:?}"))?;

        let path = dir.join(format!("{name}.mp3"));
        fs::write(&path, &self.bytes).with_context(|| format!("Failed to write audio to {path:?}"))?;

        Ok(path)
    }
}

/// A synthetic speaker profile owned by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// One text-to-speech call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisRequest {
    pub voice_id: String,
    pub text: String,
}

impl SynthesisRequest {
    pub fn new(voice: &Voice, text: impl Into<String>) -> Self {
        Self {
            voice_id: voice.id.clone(),
            text: text.into(),
        }
    }
}

//! In-memory decoding of provider audio (MP3, WAV) using rodio

use anyhow::{Context, Result};
use rodio::{Decoder, Source};
use std::io::Cursor;

/// Interleaved samples at the clip's native rate
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
    pub channels: u16,
}

impl DecodedAudio {
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels.max(1) as usize
    }

    /// Average all channels of each frame into one sample
    pub fn to_mono(&self) -> Vec<f32> {
        let channels = self.channels.max(1) as usize;
        if channels == 1 {
            return self.samples.clone();
        }
        self.samples
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f32>() / channels as f32)
            .collect()
    }
}

pub fn decode(bytes: &[u8]) -> Result<DecodedAudio> {
    let decoder =
        Decoder::new(Cursor::new(bytes.to_vec())).context("unsupported or corrupt audio")?;

    let sample_rate = decoder.sample_rate();
    let channels = decoder.channels();
    if sample_rate == 0 || channels == 0 {
        anyhow::bail!("decoded audio has no sample rate or channels");
    }

    let samples: Vec<f32> = decoder.map(|s| s as f32 / 32768.0).collect();
    if samples.is_empty() {
        anyhow::bail!("decoded audio contains no samples");
    }

    tracing::debug!(
        sample_rate,
        channels,
        samples = samples.len(),
        "audio decoded"
    );

    Ok(DecodedAudio {
        samples,
        sample_rate,
        channels,
    })
}

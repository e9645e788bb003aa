//! Audio playback using cpal
//! Resamples from the clip's rate to the native device rate if needed

use anyhow::{Context, Result};
use async_trait::async_trait;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{
    Device, FromSample, SampleFormat, SizedSample, Stream, StreamConfig, SupportedStreamConfig,
};
use rubato::{FftFixedIn, Resampler};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use super::decode::{decode, DecodedAudio};
use super::Player;
use crate::voice::tts::types::AudioBuffer;

/// Audio player bound to the default output device
pub struct AudioPlayer {
    device: Device,
    supported_config: SupportedStreamConfig,
}

/// Audio playback handle - dropping stops playback (RAII)
pub struct AudioPlayback {
    _stream: Stream,
    finished: Arc<AtomicBool>,
}

impl AudioPlayback {
    /// Check if playback has finished
    pub fn is_finished(&self) -> bool {
        self.finished.load(Ordering::SeqCst)
    }

    /// Wait for playback to complete
    pub async fn wait(&self) {
        while !self.is_finished() {
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }
    }
}

impl AudioPlayer {
    /// Create a new audio player using the default output device
    pub fn new() -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .context("no output device available")?;

        let supported_config = device
            .default_output_config()
            .context("failed to get default output config")?;

        tracing::debug!(
            device_name = ?device.name(),
            native_sample_rate = supported_config.sample_rate().0,
            native_channels = supported_config.channels(),
            native_format = ?supported_config.sample_format(),
            "audio output initialized"
        );

        Ok(Self {
            device,
            supported_config,
        })
    }

    /// Start playing decoded audio, returns handle that stops on drop
    pub fn start(&self, audio: &DecodedAudio) -> Result<AudioPlayback> {
        let native_rate = self.supported_config.sample_rate().0;
        let native_channels = self.supported_config.channels() as usize;
        let sample_format = self.supported_config.sample_format();
        let config: StreamConfig = self.supported_config.clone().into();

        let mono = audio.to_mono();
        let resampled = if audio.sample_rate == native_rate {
            mono
        } else {
            resample(&mono, audio.sample_rate, native_rate)?
        };

        let samples = if native_channels > 1 {
            expand_to_channels(&resampled, native_channels)
        } else {
            resampled
        };

        let samples = Arc::new(samples);
        let position = Arc::new(AtomicUsize::new(0));
        let finished = Arc::new(AtomicBool::new(false));

        let stream = match sample_format {
            SampleFormat::F32 => {
                self.build_stream::<f32>(&config, samples, position, finished.clone())?
            }
            SampleFormat::I16 => {
                self.build_stream::<i16>(&config, samples, position, finished.clone())?
            }
            format => anyhow::bail!("unsupported sample format: {:?}", format),
        };

        stream.play().context("failed to start playback stream")?;

        Ok(AudioPlayback {
            _stream: stream,
            finished,
        })
    }

    fn build_stream<T>(
        &self,
        config: &StreamConfig,
        samples: Arc<Vec<f32>>,
        position: Arc<AtomicUsize>,
        finished: Arc<AtomicBool>,
    ) -> Result<Stream>
    where
        T: SizedSample + FromSample<f32> + Default + Send + 'static,
    {
        let err_finished = finished.clone();
        self.device
            .build_output_stream(
                config,
                move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                    let pos = position.load(Ordering::SeqCst);
                    let remaining = samples.len().saturating_sub(pos);

                    if remaining == 0 {
                        data.fill(T::default());
                        finished.store(true, Ordering::SeqCst);
                        return;
                    }

                    let to_copy = remaining.min(data.len());
                    for (i, &sample) in samples[pos..pos + to_copy].iter().enumerate() {
                        data[i] = T::from_sample(sample);
                    }

                    if to_copy < data.len() {
                        data[to_copy..].fill(T::default());
                    }

                    position.store(pos + to_copy, Ordering::SeqCst);
                },
                move |err| {
                    tracing::error!(error = ?err, "playback stream error");
                    // a dead stream never drains, release the waiter
                    err_finished.store(true, Ordering::SeqCst);
                },
                None,
            )
            .context("failed to build output stream")
    }
}

#[async_trait(?Send)]
impl Player for AudioPlayer {
    async fn play(&self, audio: &AudioBuffer) -> Result<()> {
        let decoded = decode(&audio.bytes)?;
        let playback = self.start(&decoded)?;
        playback.wait().await;
        Ok(())
    }
}

/// Opens the default output device per clip, so a missing or replaced device
/// only fails that clip
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultOutputPlayer;

#[async_trait(?Send)]
impl Player for DefaultOutputPlayer {
    async fn play(&self, audio: &AudioBuffer) -> Result<()> {
        AudioPlayer::new()?.play(audio).await
    }
}

fn resample(samples: &[f32], source_rate: u32, target_rate: u32) -> Result<Vec<f32>> {
    let chunk_size = 1024;
    let mut resampler =
        FftFixedIn::<f32>::new(source_rate as usize, target_rate as usize, chunk_size, 2, 1)
            .context("failed to create resampler")?;

    let mut output = Vec::new();
    let mut pos = 0;

    while pos < samples.len() {
        let frames_needed = resampler.input_frames_next();
        let end = (pos + frames_needed).min(samples.len());

        let mut input_chunk = samples[pos..end].to_vec();
        if input_chunk.len() < frames_needed {
            input_chunk.resize(frames_needed, 0.0);
        }

        let input = vec![input_chunk];
        match resampler.process(&input, None) {
            Ok(resampled) => {
                if let Some(chunk) = resampled.into_iter().next() {
                    output.extend(chunk);
                }
            }
            Err(e) => {
                anyhow::bail!("resampling failed: {:?}", e);
            }
        }

        pos = end;
    }

    Ok(output)
}

fn expand_to_channels(samples: &[f32], channels: usize) -> Vec<f32> {
    samples
        .iter()
        .flat_map(|&sample| std::iter::repeat(sample).take(channels))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_to_channels_duplicates_each_sample() {
        let expanded = expand_to_channels(&[0.1, -0.2], 3);
        assert_eq!(expanded, vec![0.1, 0.1, 0.1, -0.2, -0.2, -0.2]);
    }

    #[test]
    fn test_resample_scales_length() {
        let samples = vec![0.25f32; 16000];
        let resampled = resample(&samples, 16000, 48000).unwrap();

        // padded final chunk may add up to one chunk of output
        assert!(resampled.len() >= 48000);
        assert!(resampled.len() < 48000 + 3 * 1024 * 2);
    }

    #[test]
    #[ignore] // Requires an audio output device
    fn test_play_tone_on_default_device() {
        let player = AudioPlayer::new().unwrap();
        let tone: Vec<f32> = (0..16000)
            .map(|i| (i as f32 * 440.0 * 2.0 * std::f32::consts::PI / 16000.0).sin() * 0.2)
            .collect();
        let audio = DecodedAudio {
            samples: tone,
            sample_rate: 16000,
            channels: 1,
        };

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        runtime.block_on(async {
            let playback = player.start(&audio).unwrap();
            playback.wait().await;
        });
    }
}

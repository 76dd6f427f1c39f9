//! Playback of synthesized speech
//!
//! The TTS collaborator hands back raw little-endian 16-bit PCM mono at
//! 24 kHz; this module decodes it to f32 samples and plays it on the
//! default output device.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Sample rate of the synthesized audio stream
pub const SPEECH_SAMPLE_RATE: u32 = 24_000;

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("no output device available")]
    NoOutputDevice,
    #[error("could not open output stream: {0}")]
    Build(#[from] cpal::BuildStreamError),
    #[error("could not start output stream: {0}")]
    Play(#[from] cpal::PlayStreamError),
}

/// Decoded audio ready for playback.
#[derive(Debug, Clone)]
pub struct AudioClip {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

impl AudioClip {
    /// Wrap raw PCM bytes from the speech collaborator.
    pub fn from_pcm16(bytes: &[u8]) -> Self {
        Self {
            samples: decode_pcm16(bytes),
            sample_rate: SPEECH_SAMPLE_RATE,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.samples.len() as f64 / self.sample_rate as f64)
    }
}

/// Decode little-endian signed 16-bit mono PCM into f32 samples in [-1, 1).
/// A trailing odd byte is ignored.
pub fn decode_pcm16(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as f32 / 32768.0)
        .collect()
}

/// Play a clip on the default output device, blocking until it finishes.
///
/// The stream is opened mono at the clip's own rate; a device that does
/// not accept that configuration surfaces as an error rather than playing
/// the clip at the wrong pitch.
pub fn play(clip: &AudioClip) -> Result<(), SpeechError> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or(SpeechError::NoOutputDevice)?;

    let config = cpal::StreamConfig {
        channels: 1,
        sample_rate: cpal::SampleRate(clip.sample_rate),
        buffer_size: cpal::BufferSize::Default,
    };

    let duration = clip.duration();
    let samples = clip.samples.clone();
    let cursor = Arc::new(Mutex::new(0usize));
    let cursor_writer = Arc::clone(&cursor);

    let stream = device.build_output_stream(
        &config,
        move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
            let mut position = cursor_writer.lock().unwrap();
            for slot in data.iter_mut() {
                *slot = samples.get(*position).copied().unwrap_or(0.0);
                *position += 1;
            }
        },
        |err| log::error!("audio stream error: {err}"),
        None,
    )?;

    stream.play()?;
    // Small pad so the tail is not clipped by buffer latency
    std::thread::sleep(duration + Duration::from_millis(100));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_pcm16_values() {
        // 0x4000 = 16384 -> 0.5; 0x8000 = -32768 -> -1.0
        let bytes = [0x00, 0x40, 0x00, 0x80, 0x00, 0x00];
        let samples = decode_pcm16(&bytes);
        assert_eq!(samples, vec![0.5, -1.0, 0.0]);
    }

    #[test]
    fn test_decode_ignores_trailing_odd_byte() {
        let samples = decode_pcm16(&[0x00, 0x40, 0x7f]);
        assert_eq!(samples, vec![0.5]);
    }

    #[test]
    fn test_decode_empty() {
        assert!(decode_pcm16(&[]).is_empty());
    }

    #[test]
    fn test_clip_duration() {
        let clip = AudioClip {
            samples: vec![0.0; 24_000],
            sample_rate: SPEECH_SAMPLE_RATE,
        };
        assert_eq!(clip.duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_clip_from_pcm16() {
        let clip = AudioClip::from_pcm16(&[0x00, 0x40]);
        assert_eq!(clip.samples, vec![0.5]);
        assert_eq!(clip.sample_rate, SPEECH_SAMPLE_RATE);
    }
}

use std::path::Path;

use crate::error::{DbError, DbResult};

/// Interleaved audio samples in `[-1.0, 1.0]`.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    pub samples: Vec<f32>,
    pub channels: u16,
}

impl AudioBuffer {
    pub fn new(samples: Vec<f32>, channels: u16) -> Self {
        Self { samples, channels }
    }

    /// At least one channel and only whole frames.
    pub fn check_shape(&self) -> DbResult<()> {
        if self.channels == 0 {
            return Err(DbError::InvalidAudio("buffer has no channels".to_string()));
        }
        if self.samples.len() % self.channels as usize != 0 {
            return Err(DbError::InvalidAudio(format!(
                "{} samples do not split into {} channels",
                self.samples.len(),
                self.channels
            )));
        }
        Ok(())
    }

    /// Number of sample frames (one sample per channel).
    pub fn frames(&self) -> usize {
        match self.channels {
            0 => 0,
            c => self.samples.len() / c as usize,
        }
    }
}

/// Persists audio buffers to disk.
pub trait Codec {
    fn write_audio(&self, path: &Path, audio: &AudioBuffer, sample_rate: u32) -> DbResult<()>;
}

/// WAV output through `hound`: 32-bit float by default, or 16-bit PCM.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WavCodec {
    pub float: bool,
}

impl Default for WavCodec {
    fn default() -> Self {
        Self { float: true }
    }
}

impl WavCodec {
    pub fn pcm16() -> Self {
        Self { float: false }
    }
}

impl Codec for WavCodec {
    fn write_audio(&self, path: &Path, audio: &AudioBuffer, sample_rate: u32) -> DbResult<()> {
        audio.check_shape()?;

        let spec = hound::WavSpec {
            channels: audio.channels,
            sample_rate,
            bits_per_sample: if self.float { 32 } else { 16 },
            sample_format: if self.float {
                hound::SampleFormat::Float
            } else {
                hound::SampleFormat::Int
            },
        };

        let mut writer = hound::WavWriter::create(path, spec)?;
        if self.float {
            for &sample in &audio.samples {
                writer.write_sample(sample)?;
            }
        } else {
            for &sample in &audio.samples {
                writer.write_sample((sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16)?;
            }
        }
        writer.finalize()?;
        Ok(())
    }
}

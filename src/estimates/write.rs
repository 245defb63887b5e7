use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use log::{debug, info};

use super::codec::{AudioBuffer, Codec, WavCodec};
use crate::dataset::Track;
use crate::error::{DbError, DbResult};

/// Writes per-target estimates to `output_root/{subset}/{track}/{target}.wav`.
#[derive(Debug, Clone)]
pub struct EstimateWriter<C = WavCodec> {
    codec: C,
    /// Used when a track has neither a rate override nor a readable mixture header.
    fallback_rate: u32,
}

impl EstimateWriter<WavCodec> {
    pub fn wav(fallback_rate: u32) -> Self {
        Self::new(WavCodec::default(), fallback_rate)
    }
}

impl<C: Codec> EstimateWriter<C> {
    pub fn new(codec: C, fallback_rate: u32) -> Self {
        Self {
            codec,
            fallback_rate,
        }
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Folder the estimates of `track` go to.
    pub fn track_dir(output_root: &Path, track: &Track) -> PathBuf {
        output_root.join(track.subset.as_str()).join(&track.name)
    }

    /// Write every estimate of `track` and return the folder they went to.
    ///
    /// The folder is created if missing; calling this again overwrites the
    /// files. Stem container output is not available and is rejected before
    /// anything is written.
    pub fn write(
        &self,
        estimates: &IndexMap<String, AudioBuffer>,
        track: &Track,
        output_root: &Path,
        write_stems: bool,
    ) -> DbResult<PathBuf> {
        if write_stems {
            return Err(DbError::Unsupported("writing estimates as a stem container"));
        }

        let dir = Self::track_dir(output_root, track);
        fs::create_dir_all(&dir)?;

        let rate = track.rate().unwrap_or(self.fallback_rate);
        for (target, audio) in estimates.iter() {
            let path = dir.join(format!("{target}.wav"));
            debug!("writing {} ({} frames)", path.display(), audio.frames());
            self.codec.write_audio(&path, audio, rate)?;
        }

        info!(
            "wrote {} estimates for {}/{} to {}",
            estimates.len(),
            track.subset,
            track.name,
            dir.display()
        );
        Ok(dir)
    }
}

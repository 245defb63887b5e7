use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use log::warn;
use serde::Deserialize;

use crate::error::{DbError, DbResult};

/// Dataset setup document, usually `configs/mus.toml` under the dataset root.
///
/// ```toml
/// sample_rate = 44100
/// mixture = "mixture.wav"
/// validation_tracks = ["Actions - One Minute Smile"]
///
/// [sources]
/// drums = "drums.wav"
/// vocals = "vocals.wav"
///
/// [targets.vocals]
/// vocals = 1
///
/// [targets.accompaniment]
/// drums = 1
///
/// [stem_ids]
/// mixture = 0
/// drums = 1
/// vocals = 4
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Setup {
    /// Native sample rate of the dataset.
    pub sample_rate: u32,
    /// Mixture file name inside a track (or variant) folder.
    pub mixture: String,
    /// Source name -> file name relative to the track folder, in declaration order.
    pub sources: IndexMap<String, String>,
    /// Target name -> (source name -> gain), in declaration order.
    pub targets: IndexMap<String, IndexMap<String, f32>>,
    /// Stream index of each source (and of `mixture`) inside a stem container.
    pub stem_ids: BTreeMap<String, usize>,
    /// Track names forming the validation split of `train`.
    #[serde(default)]
    pub validation_tracks: BTreeSet<String>,
}

impl Setup {
    /// Read, parse and validate the setup document at `path`.
    pub fn load(path: &Path) -> DbResult<Self> {
        let text = fs::read_to_string(path)?;
        let setup = Self::from_toml(&text).map_err(|source| DbError::SetupParse {
            path: path.to_path_buf(),
            source,
        })?;
        setup.validate()?;
        Ok(setup)
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Every declared stream needs a stem id. Targets naming undeclared
    /// sources are allowed (they can never resolve) but reported.
    pub fn validate(&self) -> DbResult<()> {
        if !self.stem_ids.contains_key("mixture") {
            return Err(DbError::InvalidSetup(
                "stem_ids has no `mixture` entry".to_string(),
            ));
        }
        if let Some(name) = self.sources.keys().find(|n| !self.stem_ids.contains_key(*n)) {
            return Err(DbError::InvalidSetup(format!(
                "source `{name}` has no entry in stem_ids"
            )));
        }
        for (target, mix) in self.targets.iter() {
            for source in mix.keys().filter(|s| !self.sources.contains_key(*s)) {
                warn!("target `{target}` references undeclared source `{source}`");
            }
        }
        Ok(())
    }

    pub fn mixture_stem_id(&self) -> usize {
        self.stem_ids.get("mixture").copied().unwrap_or(0)
    }

    pub fn stem_id(&self, source: &str) -> Option<usize> {
        self.stem_ids.get(source).copied()
    }

    pub fn source_names(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(String::as_str)
    }

    pub fn target_names(&self) -> impl Iterator<Item = &str> {
        self.targets.keys().map(String::as_str)
    }

    pub fn is_validation_track(&self, name: &str) -> bool {
        self.validation_tracks.contains(name)
    }
}

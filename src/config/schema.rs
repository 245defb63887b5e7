use std::path::PathBuf;

use serde::Deserialize;

use crate::dataset::{IndexOptions, Split, Subset};
use crate::error::{DbError, DbResult};

/// Top-level runtime settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/stemdb/config.toml` or `~/.config/stemdb/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `STEMDB__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub dataset: DatasetSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatasetSettings {
    /// Dataset root. Falls back to the `MUSDB_PATH` environment variable.
    pub root: Option<PathBuf>,
    /// Setup document, relative to `root` unless absolute.
    pub setup_file: PathBuf,
    /// Directory holding the `train`/`test` subsets. Defaults to `root`.
    pub data_path: Option<PathBuf>,
    /// Folder level between a subset and its tracks. Empty to skip it.
    pub instrument: String,
    /// Per-file layout (one folder of wav files per variant) instead of containers.
    pub is_wav: bool,
    /// Subsets to index, either a single name or a list.
    ///
    /// Example: "train" or ["train", "test"]
    pub subsets: SubsetSelection,
    /// Train/validation split of the `train` subset.
    pub split: Option<Split>,
    /// Sample rate recorded on every track and source.
    pub sample_rate: Option<u32>,
    /// Whether to follow symlinks while walking the dataset.
    pub follow_links: bool,
    /// Whether to index hidden (dot) folders.
    pub include_hidden: bool,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            root: None,
            setup_file: PathBuf::from("configs").join("mus.toml"),
            data_path: None,
            instrument: "drums".to_string(),
            is_wav: false,
            subsets: SubsetSelection::default(),
            split: None,
            sample_rate: None,
            follow_links: true,
            include_hidden: true,
        }
    }
}

impl DatasetSettings {
    /// Traversal options for the indexer.
    pub fn index_options(&self) -> IndexOptions {
        IndexOptions {
            subsets: self.subsets.to_vec(),
            split: self.split,
            is_wav: self.is_wav,
            instrument: self.instrument.clone(),
            sample_rate: self.sample_rate,
            follow_links: self.follow_links,
            include_hidden: self.include_hidden,
        }
    }
}

/// A single subset or an explicit list of them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SubsetSelection {
    One(Subset),
    Many(Vec<Subset>),
}

impl Default for SubsetSelection {
    fn default() -> Self {
        Self::Many(vec![Subset::Train, Subset::Test])
    }
}

impl SubsetSelection {
    pub fn to_vec(&self) -> Vec<Subset> {
        match self {
            Self::One(s) => vec![*s],
            Self::Many(v) => v.clone(),
        }
    }
}

impl Settings {
    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> DbResult<()> {
        let subsets = self.dataset.subsets.to_vec();
        if self.dataset.split.is_some() && subsets != [Subset::Train] {
            return Err(DbError::SplitRequiresTrain(subsets));
        }
        Ok(())
    }
}

use std::fmt;
use std::ops::Index;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use super::header::{self, AudioInfo};
use crate::error::{DbError, DbResult};

/// Top-level dataset partition.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subset {
    Train,
    Test,
}

impl Subset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Train => "train",
            Self::Test => "test",
        }
    }
}

impl fmt::Display for Subset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subset {
    type Err = DbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "train" => Ok(Self::Train),
            "test" => Ok(Self::Test),
            _ => Err(DbError::UnknownSubset(s.to_string())),
        }
    }
}

/// Secondary partition of the `train` subset.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    Train,
    #[serde(alias = "validation")]
    Valid,
}

impl FromStr for Split {
    type Err = DbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "train" => Ok(Self::Train),
            "valid" | "validation" => Ok(Self::Valid),
            _ => Err(DbError::UnknownSplit(s.to_string())),
        }
    }
}

/// Position of a track in its catalog.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TrackId(pub usize);

/// One instrument stem of a track.
#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    pub track: TrackId,
    pub name: String,
    pub path: PathBuf,
    /// Stream index inside a stem container.
    pub stem_id: usize,
    pub sample_rate: Option<u32>,
    /// Gain of the last target this source was composed into (1.0 if none).
    pub gain: f32,
}

/// A source taking part in a target, with the gain declared for that pair.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetSource {
    /// Position in the owning track's `sources`.
    pub index: usize,
    pub name: String,
    pub gain: f32,
}

/// A weighted mix of one or more sources of a track.
///
/// The signal it stands for is the sample-wise sum of each source scaled by
/// its gain. Decoding and summing is left to the consumer.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub track: TrackId,
    pub name: String,
    pub sources: Vec<TargetSource>,
}

/// One piece on disk: a mixture plus whichever declared sources exist.
#[derive(Debug, Clone)]
pub struct Track {
    pub id: TrackId,
    pub name: String,
    /// Mixture file.
    pub path: PathBuf,
    pub subset: Subset,
    /// Variant folder in the per-file layout.
    pub variant: Option<String>,
    pub is_wav: bool,
    pub sample_rate: Option<u32>,
    /// Stream index of the mixture inside a stem container.
    pub stem_id: usize,
    /// In setup declaration order.
    pub sources: Vec<Source>,
    /// In setup declaration order.
    pub targets: Vec<Target>,
}

impl Track {
    pub fn source(&self, name: &str) -> Option<&Source> {
        self.sources.iter().find(|s| s.name == name)
    }

    pub fn target(&self, name: &str) -> Option<&Target> {
        self.targets.iter().find(|t| t.name == name)
    }

    pub fn source_names(&self) -> impl Iterator<Item = &str> {
        self.sources.iter().map(|s| s.name.as_str())
    }

    pub fn target_names(&self) -> impl Iterator<Item = &str> {
        self.targets.iter().map(|t| t.name.as_str())
    }

    /// The sources of `target` with the gain each one is mixed at.
    /// Empty when the track has no such target.
    pub fn target_sources(&self, target: &str) -> Vec<(&Source, f32)> {
        self.target(target)
            .map(|t| {
                t.sources
                    .iter()
                    .filter_map(|ts| self.sources.get(ts.index).map(|s| (s, ts.gain)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Folder holding the mixture and source files.
    pub fn folder(&self) -> Option<&Path> {
        self.path.parent()
    }

    /// Stream properties of the mixture, read from its header.
    pub fn info(&self) -> Option<AudioInfo> {
        header::read_info(&self.path)
    }

    /// The rate audio of this track should be handled at: the configured
    /// override, else the mixture's native rate.
    pub fn rate(&self) -> Option<u32> {
        self.sample_rate
            .or_else(|| self.info().and_then(|i| i.sample_rate))
    }
}

/// Ordered tracks produced by one indexing pass.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next pushed track will get.
    pub(crate) fn next_id(&self) -> TrackId {
        TrackId(self.tracks.len())
    }

    pub(crate) fn push(&mut self, track: Track) {
        debug_assert_eq!(track.id, self.next_id());
        self.tracks.push(track);
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tracks.iter().map(|t| t.name.as_str())
    }

    /// Catalog position of the first track named like each of `names`.
    pub fn get_track_indices_by_name<S: AsRef<str>>(&self, names: &[S]) -> DbResult<Vec<usize>> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.tracks
                    .iter()
                    .position(|t| t.name == name)
                    .ok_or_else(|| DbError::TrackNotFound(name.to_string()))
            })
            .collect()
    }
}

impl Index<usize> for Catalog {
    type Output = Track;

    fn index(&self, index: usize) -> &Self::Output {
        &self.tracks[index]
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Track;
    type IntoIter = std::slice::Iter<'a, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}

impl IntoIterator for Catalog {
    type Item = Track;
    type IntoIter = std::vec::IntoIter<Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.into_iter()
    }
}

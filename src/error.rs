//! Error types shared by the indexer, the setup loader and the estimate writer.

use std::path::PathBuf;

use thiserror::Error;

use crate::dataset::Subset;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("dataset root is not set; pass it explicitly or set `MUSDB_PATH`")]
    RootNotSet,

    #[error("dataset root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("`split` can only be used when subsets are exactly [\"train\"], got {0:?}")]
    SplitRequiresTrain(Vec<Subset>),

    #[error("unknown subset `{0}` (expected `train` or `test`)")]
    UnknownSubset(String),

    #[error("unknown split `{0}` (expected `train` or `valid`)")]
    UnknownSplit(String),

    #[error("invalid setup: {0}")]
    InvalidSetup(String),

    #[error("failed to parse setup file {}: {source}", .path.display())]
    SetupParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("track `{0}` not found")]
    TrackNotFound(String),

    #[error("invalid audio buffer: {0}")]
    InvalidAudio(String),

    #[error("unsupported: {0}")]
    Unsupported(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("WAV error: {0}")]
    Wav(String),

    #[error("config error: {0}")]
    Config(#[from] ::config::ConfigError),
}

pub type DbResult<T> = Result<T, DbError>;

impl From<hound::Error> for DbError {
    fn from(err: hound::Error) -> Self {
        DbError::Wav(err.to_string())
    }
}

use std::env;
use std::path::{Path, PathBuf};

use super::schema::{DatasetSettings, Settings};
use crate::error::{DbError, DbResult};

/// Name of a project-local settings file, looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "stemdb.toml";

impl Settings {
    /// Load settings from the resolved config file (see [`resolve_config_path`])
    /// with `STEMDB__*` variables on top.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        Self::load_from(resolve_config_path().as_deref())
    }

    /// Load settings from `file` (missing is fine) with `STEMDB__*` variables on top,
    /// e.g. `STEMDB__DATASET__IS_WAV=true` or `STEMDB__DATASET__SUBSETS=train`.
    pub fn load_from(file: Option<&Path>) -> Result<Self, ::config::ConfigError> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(::config::File::from(path).required(false));
        }

        builder
            .add_source(
                ::config::Environment::with_prefix("STEMDB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

impl DatasetSettings {
    /// The dataset root: `root` if set, else `MUSDB_PATH`, with `~` expanded.
    pub fn resolve_root(&self) -> DbResult<PathBuf> {
        let root = match &self.root {
            Some(r) => r.clone(),
            None => env::var_os("MUSDB_PATH")
                .map(PathBuf::from)
                .ok_or(DbError::RootNotSet)?,
        };
        Ok(expand_home(root))
    }

    /// Where the setup document lives for `root`.
    pub fn setup_path(&self, root: &Path) -> PathBuf {
        root.join(&self.setup_file)
    }

    /// Where the subsets live for `root`.
    pub fn data_root(&self, root: &Path) -> PathBuf {
        match &self.data_path {
            Some(p) => expand_home(p.clone()),
            None => root.to_path_buf(),
        }
    }
}

fn expand_home(path: PathBuf) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match env::var_os("HOME") {
            Some(home) => PathBuf::from(home).join(rest),
            None => path,
        },
        Err(_) => path,
    }
}

/// Settings file to use, first match wins:
/// 1) `STEMDB_CONFIG_PATH`
/// 2) `stemdb.toml` in the working directory (settings kept next to a dataset checkout)
/// 3) the per-user file from [`default_config_path`]
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("STEMDB_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    env::current_dir()
        .ok()
        .and_then(|cwd| local_config_path(&cwd))
        .or_else(default_config_path)
}

/// `dir/stemdb.toml` if it exists.
pub fn local_config_path(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(LOCAL_CONFIG_FILE);
    path.is_file().then_some(path)
}

/// `$XDG_CONFIG_HOME/stemdb/config.toml`, or `~/.config/stemdb/config.toml`
/// when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;

    Some(config_home.join("stemdb").join("config.toml"))
}

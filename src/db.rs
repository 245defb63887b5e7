//! `Db`: a dataset opened from settings, with its catalog built.

use std::ops::Index;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use log::info;

use crate::config::{DatasetSettings, Setup};
use crate::dataset::{Catalog, IndexOptions, Split, Subset, Track, index};
use crate::error::{DbError, DbResult};
use crate::estimates::{AudioBuffer, EstimateWriter};

pub struct Db {
    data_root: PathBuf,
    setup: Setup,
    options: IndexOptions,
    catalog: Catalog,
    writer: EstimateWriter,
}

impl Db {
    /// Resolve the root, load its setup document and index the tracks.
    pub fn open(settings: &DatasetSettings) -> DbResult<Self> {
        let options = settings.index_options();
        options.validate()?;

        let root = settings.resolve_root()?;
        if !root.is_dir() {
            return Err(DbError::RootNotFound(root));
        }
        let setup_path = settings.setup_path(&root);
        info!("loading setup from {}", setup_path.display());
        let setup = Setup::load(&setup_path)?;

        Self::with_setup(settings.data_root(&root), setup, options)
    }

    /// Index `data_root` with an already loaded setup.
    pub fn with_setup(data_root: PathBuf, setup: Setup, options: IndexOptions) -> DbResult<Self> {
        let catalog = index(&data_root, &setup, &options)?;
        let writer = EstimateWriter::wav(setup.sample_rate);
        Ok(Self {
            data_root,
            setup,
            options,
            catalog,
            writer,
        })
    }

    /// Index again with other subsets or split, leaving this catalog alone.
    pub fn load_tracks(&self, subsets: &[Subset], split: Option<Split>) -> DbResult<Catalog> {
        let options = IndexOptions {
            subsets: subsets.to_vec(),
            split,
            ..self.options.clone()
        };
        index(&self.data_root, &self.setup, &options)
    }

    pub fn data_root(&self) -> &Path {
        &self.data_root
    }

    pub fn setup(&self) -> &Setup {
        &self.setup
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn tracks(&self) -> &[Track] {
        self.catalog.tracks()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.catalog.get(index)
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn source_names(&self) -> impl Iterator<Item = &str> {
        self.setup.source_names()
    }

    pub fn target_names(&self) -> impl Iterator<Item = &str> {
        self.setup.target_names()
    }

    pub fn get_track_indices_by_name<S: AsRef<str>>(&self, names: &[S]) -> DbResult<Vec<usize>> {
        self.catalog.get_track_indices_by_name(names)
    }

    /// Write `estimates` for `track` under `estimates_dir`, mirroring the
    /// dataset layout. See [`EstimateWriter::write`].
    pub fn save_estimates(
        &self,
        estimates: &IndexMap<String, AudioBuffer>,
        track: &Track,
        estimates_dir: &Path,
        write_stems: bool,
    ) -> DbResult<PathBuf> {
        self.writer.write(estimates, track, estimates_dir, write_stems)
    }
}

impl Index<usize> for Db {
    type Output = Track;

    fn index(&self, index: usize) -> &Self::Output {
        &self.catalog[index]
    }
}

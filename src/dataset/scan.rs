use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use walkdir::WalkDir;

use super::compose::compose_targets;
use super::model::{Catalog, Subset, Split, Track, TrackId};
use super::resolve::resolve_sources;
use super::split::keep;
use crate::config::Setup;
use crate::error::{DbError, DbResult};

/// How to walk a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexOptions {
    /// Subsets to index, in catalog order.
    pub subsets: Vec<Subset>,
    /// Train/validation split; only valid when `subsets` is exactly `[Train]`.
    pub split: Option<Split>,
    /// Per-file layout: `track/variant/*.wav` instead of one folder per track.
    pub is_wav: bool,
    /// Folder level between a subset and its tracks. Empty to skip it.
    pub instrument: String,
    /// Sample rate recorded on tracks and sources.
    pub sample_rate: Option<u32>,
    pub follow_links: bool,
    pub include_hidden: bool,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            subsets: vec![Subset::Train, Subset::Test],
            split: None,
            is_wav: false,
            instrument: "drums".to_string(),
            sample_rate: None,
            follow_links: true,
            include_hidden: true,
        }
    }
}

impl IndexOptions {
    /// Reject option combinations that make no sense before touching the disk.
    pub fn validate(&self) -> DbResult<()> {
        if self.split.is_some() && self.subsets != [Subset::Train] {
            return Err(DbError::SplitRequiresTrain(self.subsets.clone()));
        }
        Ok(())
    }

    /// Folder whose children are the tracks of `subset`.
    pub fn subset_dir(&self, data_root: &Path, subset: Subset) -> PathBuf {
        let dir = data_root.join(subset.as_str());
        if self.instrument.is_empty() {
            dir
        } else {
            dir.join(&self.instrument)
        }
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Immediate subfolders of `dir` as `(name, path)`, sorted by name.
fn subdirs(dir: &Path, options: &IndexOptions) -> Vec<(String, PathBuf)> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(options.follow_links)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| options.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_dir())
        .filter_map(|e| match e.file_name().to_str() {
            Some(name) => Some((name.to_string(), e.path().to_path_buf())),
            None => {
                warn!("skipping non UTF-8 folder {}", e.path().display());
                None
            }
        })
        .collect()
}

fn build_track(
    id: TrackId,
    setup: &Setup,
    options: &IndexOptions,
    subset: Subset,
    name: &str,
    variant: Option<String>,
    folder: &Path,
) -> Track {
    let mut track = Track {
        id,
        name: name.to_string(),
        path: folder.join(&setup.mixture),
        subset,
        variant,
        is_wav: options.is_wav,
        sample_rate: options.sample_rate,
        stem_id: setup.mixture_stem_id(),
        sources: resolve_sources(id, folder, setup, options.sample_rate),
        targets: Vec::new(),
    };
    track.targets = compose_targets(&mut track, &setup.targets);
    debug!(
        "{subset}/{name}{}: {} sources, {} targets",
        track
            .variant
            .as_deref()
            .map(|v| format!("/{v}"))
            .unwrap_or_default(),
        track.sources.len(),
        track.targets.len()
    );
    track
}

/// Walk `data_root` and build the catalog.
///
/// Order: subsets as given, then track names sorted, then variants sorted.
/// The split filter drops whole track names before any track is built.
pub fn index(data_root: &Path, setup: &Setup, options: &IndexOptions) -> DbResult<Catalog> {
    options.validate()?;
    if !data_root.is_dir() {
        return Err(DbError::RootNotFound(data_root.to_path_buf()));
    }

    let mut catalog = Catalog::new();

    for &subset in &options.subsets {
        let subset_dir = options.subset_dir(data_root, subset);
        if !subset_dir.is_dir() {
            warn!("subset folder {} not found, skipping", subset_dir.display());
            continue;
        }

        for (name, track_dir) in subdirs(&subset_dir, options) {
            if !keep(&name, subset, options.split, &setup.validation_tracks) {
                debug!("{subset}/{name}: not in requested split");
                continue;
            }

            if options.is_wav {
                for (variant, variant_dir) in subdirs(&track_dir, options) {
                    let track = build_track(
                        catalog.next_id(),
                        setup,
                        options,
                        subset,
                        &name,
                        Some(variant),
                        &variant_dir,
                    );
                    catalog.push(track);
                }
            } else {
                let track = build_track(
                    catalog.next_id(),
                    setup,
                    options,
                    subset,
                    &name,
                    None,
                    &track_dir,
                );
                catalog.push(track);
            }
        }
    }

    info!(
        "indexed {} tracks from {}",
        catalog.len(),
        data_root.display()
    );
    Ok(catalog)
}

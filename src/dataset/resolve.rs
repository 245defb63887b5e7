use std::path::Path;

use log::debug;

use super::model::{Source, TrackId};
use crate::config::Setup;

/// Build a `Source` for every declared source whose file exists under `base`.
///
/// Missing files are skipped: tracks with only some instruments are normal.
/// Sources come back in declaration order with a gain of 1.0.
pub fn resolve_sources(
    track: TrackId,
    base: &Path,
    setup: &Setup,
    sample_rate: Option<u32>,
) -> Vec<Source> {
    setup
        .sources
        .iter()
        .filter_map(|(name, file)| {
            let path = base.join(file);
            if !path.is_file() {
                debug!("{}: no `{name}` source", base.display());
                return None;
            }
            Some(Source {
                track,
                name: name.to_string(),
                path,
                stem_id: setup.stem_id(name).unwrap_or_default(),
                sample_rate,
                gain: 1.0,
            })
        })
        .collect()
}

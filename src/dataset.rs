//! Dataset indexing: walks a stem dataset on disk and builds the track catalog.
//!
//! The pieces are small and composable: [`split::keep`] decides which track
//! names belong to a split, [`resolve::resolve_sources`] turns declared source
//! files into `Source` values, [`compose::compose_targets`] builds the weighted
//! target mixes and [`scan::index`] ties them together per subset.

mod compose;
mod header;
mod model;
mod resolve;
mod scan;
mod split;

pub use compose::compose_targets;
pub use header::AudioInfo;
pub use model::*;
pub use resolve::resolve_sources;
pub use scan::{IndexOptions, index};
pub use split::keep;

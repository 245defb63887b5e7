//! Configuration loader and schema types.
//!
//! Two documents drive the indexer: runtime [`Settings`] (where the dataset
//! lives and how to walk it) and the dataset [`Setup`] (which sources and
//! targets exist, and which tracks form the validation split).

mod load;
mod schema;
mod setup;

pub use load::{LOCAL_CONFIG_FILE, default_config_path, local_config_path, resolve_config_path};
pub use schema::*;
pub use setup::Setup;

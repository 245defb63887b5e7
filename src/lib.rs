//! Index multi-track stem datasets.
//!
//! A dataset is a `train`/`test` tree of track folders, each holding a mixture
//! and one file per instrument stem. [`dataset::index`] walks it into a
//! [`dataset::Catalog`] of tracks with their sources and weighted target mixes;
//! [`estimates::EstimateWriter`] writes separated estimates back in the same
//! layout. [`Db`] wires both to the runtime [`config::Settings`].

pub mod config;
pub mod dataset;
mod db;
pub mod error;
pub mod estimates;

pub use db::Db;
pub use error::{DbError, DbResult};

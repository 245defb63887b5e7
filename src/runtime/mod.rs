use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use stemdb::Db;

mod report;
mod settings;

/// `stemdb [ROOT] [TRACK_NAME...]`
///
/// Indexes the dataset at `ROOT` (or the configured root), prints the catalog
/// and, when track names are given, their catalog indices.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = settings::load_settings()?;

    let mut args = env::args().skip(1);
    if let Some(root) = args.next() {
        settings.dataset.root = Some(PathBuf::from(root));
    }
    let names: Vec<String> = args.collect();

    let db = Db::open(&settings.dataset)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_catalog(&mut out, db.catalog())?;

    if !names.is_empty() {
        let indices = db.get_track_indices_by_name(&names)?;
        writeln!(out)?;
        for (name, idx) in names.iter().zip(indices) {
            writeln!(out, "{idx:>4}  {name}")?;
        }
    }

    Ok(())
}

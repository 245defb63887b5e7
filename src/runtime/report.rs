use std::io::{self, Write};
use std::time::Duration;

use stemdb::dataset::{Catalog, Track};

/// Format a `Duration` as `MM:SS`.
fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

fn track_label(track: &Track) -> String {
    match &track.variant {
        Some(v) => format!("{}/{}/{}", track.subset, track.name, v),
        None => format!("{}/{}", track.subset, track.name),
    }
}

fn targets_text(track: &Track) -> String {
    track
        .targets
        .iter()
        .map(|t| {
            let mix: Vec<String> = t
                .sources
                .iter()
                .map(|s| format!("{}*{}", s.name, s.gain))
                .collect();
            format!("{}={}", t.name, mix.join("+"))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One line per track: index, label, duration, sources and target mixes.
pub fn write_catalog(out: &mut impl Write, catalog: &Catalog) -> io::Result<()> {
    for (i, track) in catalog.iter().enumerate() {
        let duration = track
            .info()
            .map(|info| format_mmss(info.duration))
            .unwrap_or_else(|| "--:--".to_string());
        let sources: Vec<&str> = track.source_names().collect();
        writeln!(
            out,
            "{i:>4}  {}  {duration}  [{}]  {}",
            track_label(track),
            sources.join(", "),
            targets_text(track)
        )?;
    }
    writeln!(out, "{} tracks", catalog.len())
}

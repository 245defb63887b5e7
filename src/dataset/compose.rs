use super::model::{Target, TargetSource, Track};
use indexmap::IndexMap;

/// Build the targets of `track` from `mixes` (target -> source -> gain).
///
/// Targets and their sources keep declaration order. Each source taking part
/// gets its `gain` overwritten, so a source shared by several targets ends up
/// with the gain of the last one; the per-target gain is kept on the
/// `TargetSource`. Targets without any source on this track are left out.
pub fn compose_targets(track: &mut Track, mixes: &IndexMap<String, IndexMap<String, f32>>) -> Vec<Target> {
    let mut targets = Vec::with_capacity(mixes.len());

    for (name, mix) in mixes.iter() {
        let mut sources = Vec::new();
        for (source_name, &gain) in mix.iter() {
            let Some(index) = track.sources.iter().position(|s| s.name == *source_name) else {
                continue;
            };
            track.sources[index].gain = gain;
            sources.push(TargetSource {
                index,
                name: source_name.clone(),
                gain,
            });
        }

        if !sources.is_empty() {
            targets.push(Target {
                track: track.id,
                name: name.clone(),
                sources,
            });
        }
    }

    targets
}

use std::collections::BTreeSet;

use super::model::{Split, Subset};

/// Whether `track_name` belongs to the requested `split` of `subset`.
///
/// Only the `train` subset is split; everything else is always kept.
pub fn keep(
    track_name: &str,
    subset: Subset,
    split: Option<Split>,
    validation_tracks: &BTreeSet<String>,
) -> bool {
    match (subset, split) {
        (Subset::Train, Some(Split::Train)) => !validation_tracks.contains(track_name),
        (Subset::Train, Some(Split::Valid)) => validation_tracks.contains(track_name),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> BTreeSet<String> {
        ["Song B".to_string()].into_iter().collect()
    }

    #[test]
    fn keep_without_split_keeps_everything() {
        assert!(keep("Song A", Subset::Train, None, &valid()));
        assert!(keep("Song B", Subset::Train, None, &valid()));
    }

    #[test]
    fn keep_train_split_drops_validation_tracks() {
        assert!(keep("Song A", Subset::Train, Some(Split::Train), &valid()));
        assert!(!keep("Song B", Subset::Train, Some(Split::Train), &valid()));
    }

    #[test]
    fn keep_valid_split_keeps_only_validation_tracks() {
        assert!(!keep("Song A", Subset::Train, Some(Split::Valid), &valid()));
        assert!(keep("Song B", Subset::Train, Some(Split::Valid), &valid()));
    }

    #[test]
    fn keep_ignores_split_outside_train() {
        assert!(keep("Song A", Subset::Test, Some(Split::Valid), &valid()));
        assert!(keep("Song B", Subset::Test, Some(Split::Train), &valid()));
    }
}

//! Header-only stream properties via `lofty`. Nothing is decoded.

use std::path::Path;
use std::time::Duration;

use lofty::prelude::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AudioInfo {
    pub duration: Duration,
    pub sample_rate: Option<u32>,
    pub channels: Option<u8>,
}

pub(super) fn read_info(path: &Path) -> Option<AudioInfo> {
    let tagged = lofty::read_from_path(path).ok()?;
    let props = tagged.properties();
    Some(AudioInfo {
        duration: props.duration(),
        sample_rate: props.sample_rate(),
        channels: props.channels(),
    })
}

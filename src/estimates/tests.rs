use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tempfile::tempdir;

use super::*;
use crate::dataset::{Subset, Track, TrackId};
use crate::error::{DbError, DbResult};

fn track(subset: Subset, name: &str, sample_rate: Option<u32>) -> Track {
    Track {
        id: TrackId(0),
        name: name.into(),
        path: PathBuf::from("/nonexistent").join(name).join("mixture.wav"),
        subset,
        variant: None,
        is_wav: true,
        sample_rate,
        stem_id: 0,
        sources: Vec::new(),
        targets: Vec::new(),
    }
}

fn estimates(names: &[&str]) -> IndexMap<String, AudioBuffer> {
    names
        .iter()
        .map(|n| (n.to_string(), AudioBuffer::new(vec![0.0, 0.5, -0.5, 0.25], 2)))
        .collect()
}

#[derive(Default)]
struct RecordingCodec {
    calls: RefCell<Vec<(PathBuf, u32)>>,
}

impl Codec for RecordingCodec {
    fn write_audio(&self, path: &Path, _audio: &AudioBuffer, sample_rate: u32) -> DbResult<()> {
        self.calls.borrow_mut().push((path.to_path_buf(), sample_rate));
        Ok(())
    }
}

#[test]
fn write_creates_single_wav_under_subset_and_track() {
    let out = tempdir().unwrap();
    let writer = EstimateWriter::wav(44100);
    let t = track(Subset::Test, "Song A", None);

    let dir = writer
        .write(&estimates(&["vocals"]), &t, out.path(), false)
        .unwrap();

    assert_eq!(dir, out.path().join("test").join("Song A"));
    let files: Vec<_> = fs::read_dir(&dir)
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(files, vec![std::ffi::OsString::from("vocals.wav")]);

    let reader = hound::WavReader::open(dir.join("vocals.wav")).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.sample_rate, 44100);
    assert_eq!(spec.channels, 2);
    assert_eq!(spec.sample_format, hound::SampleFormat::Float);
    assert_eq!(reader.len(), 4);
}

#[test]
fn write_twice_is_fine() {
    let out = tempdir().unwrap();
    let writer = EstimateWriter::wav(44100);
    let t = track(Subset::Test, "Song A", None);

    writer
        .write(&estimates(&["vocals"]), &t, out.path(), false)
        .unwrap();
    writer
        .write(&estimates(&["vocals"]), &t, out.path(), false)
        .unwrap();

    let subset_entries = fs::read_dir(out.path().join("test")).unwrap().count();
    assert_eq!(subset_entries, 1);
    let track_entries = fs::read_dir(out.path().join("test").join("Song A"))
        .unwrap()
        .count();
    assert_eq!(track_entries, 1);
}

#[test]
fn write_uses_track_rate_override_and_delegates_each_target() {
    let out = tempdir().unwrap();
    let writer = EstimateWriter::new(RecordingCodec::default(), 44100);
    let t = track(Subset::Train, "Song B", Some(16000));

    writer
        .write(
            &estimates(&["vocals", "accompaniment"]),
            &t,
            out.path(),
            false,
        )
        .unwrap();

    let dir = out.path().join("train").join("Song B");
    assert_eq!(
        writer.codec().calls.borrow().clone(),
        vec![
            (dir.join("vocals.wav"), 16000),
            (dir.join("accompaniment.wav"), 16000),
        ]
    );
}

#[test]
fn write_stems_is_rejected_without_touching_disk() {
    let out = tempdir().unwrap();
    let writer = EstimateWriter::new(RecordingCodec::default(), 44100);
    let t = track(Subset::Test, "Song A", None);

    let res = writer.write(&estimates(&["vocals"]), &t, out.path(), true);
    assert!(matches!(res, Err(DbError::Unsupported(_))));
    assert!(!out.path().join("test").exists());
    assert!(writer.codec().calls.borrow().is_empty());
}

#[test]
fn pcm16_codec_writes_clamped_integers() {
    let out = tempdir().unwrap();
    let path = out.path().join("x.wav");
    WavCodec::pcm16()
        .write_audio(&path, &AudioBuffer::new(vec![2.0, -1.0, 0.0], 1), 8000)
        .unwrap();

    let mut reader = hound::WavReader::open(&path).unwrap();
    assert_eq!(reader.spec().bits_per_sample, 16);
    let samples: Vec<i16> = reader.samples::<i16>().map(Result::unwrap).collect();
    assert_eq!(samples, vec![i16::MAX, -i16::MAX, 0]);
}

#[test]
fn audio_buffer_counts_frames() {
    assert_eq!(AudioBuffer::new(vec![0.0; 6], 2).frames(), 3);
    assert_eq!(AudioBuffer::new(vec![0.0; 6], 0).frames(), 0);
}

#[test]
fn wav_codec_rejects_malformed_buffers_before_creating_the_file() {
    let out = tempdir().unwrap();
    let path = out.path().join("x.wav");

    let ragged = AudioBuffer::new(vec![0.0; 3], 2);
    assert!(matches!(
        WavCodec::default().write_audio(&path, &ragged, 44100),
        Err(DbError::InvalidAudio(_))
    ));
    assert!(!path.exists());

    let no_channels = AudioBuffer::new(vec![0.0; 4], 0);
    assert!(matches!(
        WavCodec::pcm16().write_audio(&path, &no_channels, 44100),
        Err(DbError::InvalidAudio(_))
    ));
    assert!(!path.exists());
}

#[test]
fn write_uses_mixture_native_rate_without_override() {
    let data = tempdir().unwrap();
    let mixture = data.path().join("mixture.wav");
    WavCodec::pcm16()
        .write_audio(&mixture, &AudioBuffer::new(vec![0.0; 22050 * 2], 2), 22050)
        .unwrap();

    let mut t = track(Subset::Test, "Song A", None);
    t.path = mixture;

    let out = tempdir().unwrap();
    let writer = EstimateWriter::new(RecordingCodec::default(), 44100);
    writer
        .write(&estimates(&["vocals"]), &t, out.path(), false)
        .unwrap();

    let calls = writer.codec().calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1, 22050);
}

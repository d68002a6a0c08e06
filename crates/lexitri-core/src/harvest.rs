//! Audio harvesting
//!
//! Scans a directory of FLAC recordings, samples a deterministic subset,
//! reads each file's embedded title, copies the selection into the
//! distribution directory and emits the assetId -> text mapping consumed
//! by the dictionary build.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::{DEFAULT_AUDIO_DIR, DEFAULT_INPUT, DEFAULT_SOUNDS_DIR, DEFAULT_STRIDE};
use crate::error::{LexitriError, Result};

/// Harvest locations and sampling stride
#[derive(Debug, Clone)]
pub struct HarvestOptions {
    /// Directory scanned for `.flac` recordings
    pub audio_dir: PathBuf,
    /// Distribution directory receiving the sampled recordings
    pub sounds_dir: PathBuf,
    /// Output mapping file (file name -> title)
    pub output: PathBuf,
    /// Every stride-th file of the sorted listing is left out
    pub stride: usize,
}

impl Default for HarvestOptions {
    fn default() -> Self {
        Self {
            audio_dir: PathBuf::from(DEFAULT_AUDIO_DIR),
            sounds_dir: PathBuf::from(DEFAULT_SOUNDS_DIR),
            output: PathBuf::from(DEFAULT_INPUT),
            stride: DEFAULT_STRIDE,
        }
    }
}

/// Outcome of a harvest run
#[derive(Debug, Clone)]
pub struct HarvestReport {
    /// `.flac` files found in the audio directory
    pub scanned: usize,
    /// Files kept by the stride sampling
    pub sampled: usize,
    /// Sampled files dropped for lack of a readable title
    pub skipped_untitled: usize,
    /// The emitted mapping
    pub entries: BTreeMap<String, String>,
}

/// Run the harvest: scan, sample, read titles, copy, write the mapping
pub fn harvest(options: &HarvestOptions) -> Result<HarvestReport> {
    if !options.audio_dir.is_dir() {
        return Err(LexitriError::AudioDirNotFound {
            path: options.audio_dir.clone(),
        });
    }

    let files = list_flac_files(&options.audio_dir);
    let selected = select_samples(&files, options.stride);

    fs::create_dir_all(&options.sounds_dir)?;

    let mut entries = BTreeMap::new();
    let mut skipped_untitled = 0;

    for name in &selected {
        let source = options.audio_dir.join(name);
        match read_title(&source) {
            Some(title) => {
                fs::copy(&source, options.sounds_dir.join(name))?;
                entries.insert(name.clone(), title);
            }
            None => skipped_untitled += 1,
        }
    }

    let content = serde_json::to_string(&entries)?;
    fs::write(&options.output, content)?;

    Ok(HarvestReport {
        scanned: files.len(),
        sampled: selected.len(),
        skipped_untitled,
        entries,
    })
}

/// Sorted `.flac` file names directly under `dir`
fn list_flac_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).max_depth(1).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let is_flac = path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("flac"));
        if !is_flac {
            continue;
        }

        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            files.push(name.to_string());
        }
    }

    files.sort();
    files
}

/// Keep every file whose sorted index is not a multiple of `stride`
///
/// A stride of 0 or 1 keeps everything.
fn select_samples(files: &[String], stride: usize) -> Vec<String> {
    if stride <= 1 {
        return files.to_vec();
    }

    files
        .iter()
        .enumerate()
        .filter(|(i, _)| i % stride != 0)
        .map(|(_, name)| name.clone())
        .collect()
}

/// Embedded Vorbis TITLE, if present and non-empty
fn read_title(path: &Path) -> Option<String> {
    let tag = metaflac::Tag::read_from_path(path).ok()?;
    let title = tag.get_vorbis("TITLE")?.next()?.trim().to_string();

    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_select_samples_stride_five() {
        let files = names(&[
            "a.flac", "b.flac", "c.flac", "d.flac", "e.flac", "f.flac", "g.flac", "h.flac",
            "i.flac", "j.flac",
        ]);
        let selected = select_samples(&files, 5);

        // indices 0 and 5 are left out
        assert_eq!(selected.len(), 8);
        assert!(!selected.contains(&"a.flac".to_string()));
        assert!(!selected.contains(&"f.flac".to_string()));
        assert!(selected.contains(&"b.flac".to_string()));
    }

    #[test]
    fn test_select_samples_small_stride_keeps_all() {
        let files = names(&["a.flac", "b.flac"]);
        assert_eq!(select_samples(&files, 1).len(), 2);
        assert_eq!(select_samples(&files, 0).len(), 2);
    }

    #[test]
    fn test_list_flac_files_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.flac"), b"").unwrap();
        fs::write(dir.path().join("a.flac"), b"").unwrap();
        fs::write(dir.path().join("notes.txt"), b"").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("c.flac"), b"").unwrap();

        let files = list_flac_files(dir.path());
        assert_eq!(files, names(&["a.flac", "b.flac"]));
    }

    #[test]
    fn test_harvest_missing_audio_dir() {
        let dir = tempfile::tempdir().unwrap();
        let options = HarvestOptions {
            audio_dir: dir.path().join("flac"),
            sounds_dir: dir.path().join("sounds"),
            output: dir.path().join("words_flac.json"),
            stride: 5,
        };

        let err = harvest(&options).unwrap_err();
        assert!(matches!(err, LexitriError::AudioDirNotFound { .. }));
        assert!(!options.output.exists());
    }

    #[test]
    fn test_harvest_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("flac")).unwrap();
        let options = HarvestOptions {
            audio_dir: dir.path().join("flac"),
            sounds_dir: dir.path().join("sounds"),
            output: dir.path().join("words_flac.json"),
            stride: 5,
        };

        let report = harvest(&options).unwrap();
        assert_eq!(report.scanned, 0);
        assert_eq!(report.sampled, 0);
        assert!(report.entries.is_empty());
        assert!(options.sounds_dir.is_dir());
        assert_eq!(fs::read_to_string(&options.output).unwrap(), "{}");
    }

    #[test]
    fn test_harvest_skips_unreadable_titles() {
        let dir = tempfile::tempdir().unwrap();
        let audio = dir.path().join("flac");
        fs::create_dir(&audio).unwrap();
        // not real FLAC data, so no title can be read
        for name in ["a.flac", "b.flac", "c.flac"] {
            fs::write(audio.join(name), b"junk").unwrap();
        }
        let options = HarvestOptions {
            audio_dir: audio,
            sounds_dir: dir.path().join("sounds"),
            output: dir.path().join("words_flac.json"),
            stride: 5,
        };

        let report = harvest(&options).unwrap();
        assert_eq!(report.scanned, 3);
        // index 0 sampled out
        assert_eq!(report.sampled, 2);
        assert_eq!(report.skipped_untitled, 2);
        assert!(report.entries.is_empty());
    }
}

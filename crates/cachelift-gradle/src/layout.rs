//! Coordinate extraction for the Gradle module cache.
//!
//! Run from inside `~/.gradle/caches/modules-2/files-2.1`, where every file
//! lives at `group/artifact/version/hash/file`. Coordinates come from the
//! path alone; the hash directory is discarded.

use cachelift_core::{ArtifactKey, ArtifactRecord, Extraction, GroupFilter, SkipReason};
use std::path::{Component, Path, PathBuf};

/// Number of path components in a Gradle cache entry.
pub const GRADLE_SEGMENTS: usize = 5;

/// Builds a record from a root-relative cache path.
///
/// # Examples
///
/// ```
/// use cachelift_gradle::gradle_record;
/// use std::path::Path;
///
/// let record = gradle_record(Path::new(
///     "org.slf4j/slf4j-api/2.0.9/7cf2726fdcfbc8610f9a71fb3ed639871f315340/slf4j-api-2.0.9.jar",
/// ))
/// .unwrap();
/// assert_eq!(record.key.to_string(), "org.slf4j:slf4j-api:2.0.9");
/// assert_eq!(record.file_name, "slf4j-api-2.0.9.jar");
/// ```
pub fn gradle_record(path: &Path) -> Result<ArtifactRecord, SkipReason> {
    let segments: Vec<String> = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if segments.len() != GRADLE_SEGMENTS {
        return Err(SkipReason::UnexpectedLayout {
            segments: segments.len(),
        });
    }

    // group/artifact/version/hash/file; the hash directory carries no coordinate
    let key = ArtifactKey::new(&segments[0], &segments[1], &segments[2]);
    Ok(ArtifactRecord::new(key, path))
}

/// Applies [`gradle_record`] and the group filter to every path.
pub fn extract_gradle_records(files: &[PathBuf], filter: &GroupFilter) -> Extraction {
    let mut extraction = Extraction::default();

    for file in files {
        match gradle_record(file) {
            Ok(record) if filter.matches(&record.key.group_id) => {
                tracing::debug!("{} -> {}", file.display(), record.key);
                extraction.record(record);
            }
            Ok(record) => extraction.skip(
                file,
                SkipReason::FilteredOut {
                    group_id: record.key.group_id,
                },
            ),
            Err(reason) => extraction.skip(file, reason),
        }
    }

    extraction
}

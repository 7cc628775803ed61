//! Coordinate extraction for a Maven local repository.
//!
//! POMs carry their coordinates in XML. A jar borrows the coordinates of the
//! POM that sits in the same directory under the same base name
//! (`lib-1.0.jar` ↔ `lib-1.0.pom`). Classifier jars such as
//! `lib-1.0-sources.jar` have no such POM and are skipped.

use crate::parser::read_pom_coordinates;
use cachelift_core::{ArtifactKey, ArtifactRecord, Extraction, GroupFilter, SkipReason};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

type Resolved = std::result::Result<ArtifactKey, SkipReason>;

/// Lookup from `(directory, file stem)` to the POM discovered there.
#[derive(Debug, Default)]
pub struct PomIndex {
    poms: HashMap<(PathBuf, String), PathBuf>,
}

impl PomIndex {
    pub fn build<'a>(files: impl IntoIterator<Item = &'a Path>) -> Self {
        let mut poms = HashMap::new();
        for file in files {
            if has_extension(file, "pom")
                && let Some(key) = stem_key(file)
            {
                poms.insert(key, file.to_path_buf());
            }
        }
        Self { poms }
    }

    /// POM sharing the directory and base name of `file`.
    pub fn descriptor_for(&self, file: &Path) -> Option<&Path> {
        stem_key(file)
            .and_then(|key| self.poms.get(&key))
            .map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.poms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poms.is_empty()
    }
}

/// Extracts records from `.pom`/`.jar` paths relative to `root`.
///
/// Every POM is parsed at most once, however many jars point at it.
pub fn extract_maven_records(root: &Path, files: &[PathBuf], filter: &GroupFilter) -> Extraction {
    let index = PomIndex::build(files.iter().map(PathBuf::as_path));
    let mut parsed: HashMap<PathBuf, Resolved> = HashMap::new();
    let mut extraction = Extraction::default();

    tracing::debug!(
        "Indexed {} POMs among {} candidate files",
        index.len(),
        files.len()
    );

    for file in files {
        let descriptor = if has_extension(file, "pom") {
            Some(file.as_path())
        } else {
            index.descriptor_for(file)
        };

        let Some(pom) = descriptor else {
            extraction.skip(file, SkipReason::NoDescriptor);
            continue;
        };

        let resolved = parsed
            .entry(pom.to_path_buf())
            .or_insert_with(|| resolve_pom(&root.join(pom)));

        match resolved {
            Ok(key) if filter.matches(&key.group_id) => {
                tracing::debug!("{} -> {}", file.display(), key);
                extraction.record(ArtifactRecord::new(key.clone(), file.clone()));
            }
            Ok(key) => extraction.skip(
                file,
                SkipReason::FilteredOut {
                    group_id: key.group_id.clone(),
                },
            ),
            Err(reason) => extraction.skip(file, reason.clone()),
        }
    }

    extraction
}

fn resolve_pom(path: &Path) -> Resolved {
    let coords = read_pom_coordinates(path).map_err(|e| e.skip_reason())?;
    coords
        .resolve()
        .map_err(|missing| SkipReason::MissingCoordinates { missing })
}

fn stem_key(file: &Path) -> Option<(PathBuf, String)> {
    let stem = file.file_stem()?.to_string_lossy().into_owned();
    let dir = file.parent().map(Path::to_path_buf).unwrap_or_default();
    Some((dir, stem))
}

fn has_extension(file: &Path, ext: &str) -> bool {
    file.extension().is_some_and(|e| e == ext)
}

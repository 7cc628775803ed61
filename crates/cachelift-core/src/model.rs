//! Domain types for discovered artifacts.

use indexmap::IndexMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Full Maven coordinate triple.
///
/// Grouping and deduplication are keyed by the whole triple, so two versions
/// of the same artifact id never collapse into one entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtifactKey {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl ArtifactKey {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for ArtifactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

/// One `.jar` or `.pom` file found in the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRecord {
    pub key: ArtifactKey,
    /// Base name of the file, e.g. "commons-lang3-3.14.0.jar"
    pub file_name: String,
    /// Path relative to the scanned root
    pub file_path: PathBuf,
}

impl ArtifactRecord {
    pub fn new(key: ArtifactKey, file_path: impl Into<PathBuf>) -> Self {
        let file_path = file_path.into();
        let file_name = file_name_of(&file_path);
        Self {
            key,
            file_name,
            file_path,
        }
    }

    pub fn is_jar(&self) -> bool {
        self.file_name.ends_with(".jar")
    }
}

pub(crate) fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Insertion-ordered mapping from coordinate triple to its files.
///
/// # Examples
///
/// ```
/// use cachelift_core::{ArtifactIndex, ArtifactKey, ArtifactRecord};
///
/// let key = ArtifactKey::new("org.slf4j", "slf4j-api", "2.0.9");
/// let mut index = ArtifactIndex::new();
/// assert!(index.insert(ArtifactRecord::new(key.clone(), "slf4j-api-2.0.9.pom")));
/// assert!(index.insert(ArtifactRecord::new(key.clone(), "slf4j-api-2.0.9.jar")));
/// assert!(!index.insert(ArtifactRecord::new(key, "slf4j-api-2.0.9.jar")));
///
/// assert_eq!(index.len(), 1);
/// assert_eq!(index.file_count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct ArtifactIndex {
    groups: IndexMap<ArtifactKey, Vec<ArtifactRecord>>,
}

impl ArtifactIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a file under its key.
    ///
    /// Returns `false` if the same path was already recorded for the key.
    pub fn insert(&mut self, record: ArtifactRecord) -> bool {
        let files = self.groups.entry(record.key.clone()).or_default();
        if files.iter().any(|f| f.file_path == record.file_path) {
            return false;
        }
        files.push(record);
        true
    }

    /// Groups in first-seen key order, files in discovery order.
    pub fn groups(&self) -> impl Iterator<Item = (&ArtifactKey, &[ArtifactRecord])> {
        self.groups.iter().map(|(k, v)| (k, v.as_slice()))
    }

    pub fn get(&self, key: &ArtifactKey) -> Option<&[ArtifactRecord]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    /// Number of distinct coordinate triples.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn file_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

impl FromIterator<ArtifactRecord> for ArtifactIndex {
    fn from_iter<I: IntoIterator<Item = ArtifactRecord>>(iter: I) -> Self {
        let mut index = Self::new();
        for record in iter {
            index.insert(record);
        }
        index
    }
}

/// A tarball referenced by a `resolved` entry of package-lock.json.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPackage {
    pub url: String,
    /// Last path segment of the URL, the name `curl -O` saves it under
    pub file_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(version: &str) -> ArtifactKey {
        ArtifactKey::new("com.acme", "lib", version)
    }

    #[test]
    fn test_key_display() {
        assert_eq!(key("1.0").to_string(), "com.acme:lib:1.0");
    }

    #[test]
    fn test_record_file_name() {
        let record = ArtifactRecord::new(key("1.0"), PathBuf::from("com/acme/lib/1.0/lib-1.0.jar"));
        assert_eq!(record.file_name, "lib-1.0.jar");
        assert!(record.is_jar());

        let record = ArtifactRecord::new(key("1.0"), "lib-1.0.pom");
        assert!(!record.is_jar());
    }

    #[test]
    fn test_versions_are_separate_groups() {
        let mut index = ArtifactIndex::new();
        index.insert(ArtifactRecord::new(key("1.0"), "lib-1.0.jar"));
        index.insert(ArtifactRecord::new(key("2.0"), "lib-2.0.jar"));

        assert_eq!(index.len(), 2);
        assert_eq!(index.get(&key("1.0")).unwrap().len(), 1);
        assert_eq!(index.get(&key("2.0")).unwrap().len(), 1);
    }

    #[test]
    fn test_duplicate_path_ignored() {
        let mut index = ArtifactIndex::new();
        assert!(index.insert(ArtifactRecord::new(key("1.0"), "a/lib-1.0.jar")));
        assert!(!index.insert(ArtifactRecord::new(key("1.0"), "a/lib-1.0.jar")));
        assert!(index.insert(ArtifactRecord::new(key("1.0"), "b/lib-1.0.jar")));
        assert_eq!(index.file_count(), 2);
    }

    #[test]
    fn test_first_seen_order() {
        let index: ArtifactIndex = [
            ArtifactRecord::new(key("2.0"), "lib-2.0.pom"),
            ArtifactRecord::new(key("1.0"), "lib-1.0.pom"),
            ArtifactRecord::new(key("2.0"), "lib-2.0.jar"),
        ]
        .into_iter()
        .collect();

        let order: Vec<_> = index.groups().map(|(k, _)| k.version.as_str()).collect();
        assert_eq!(order, vec!["2.0", "1.0"]);

        let files: Vec<_> = index
            .get(&key("2.0"))
            .unwrap()
            .iter()
            .map(|r| r.file_name.as_str())
            .collect();
        assert_eq!(files, vec!["lib-2.0.pom", "lib-2.0.jar"]);
    }

    #[test]
    fn test_empty_index() {
        let index = ArtifactIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.file_count(), 0);
        assert_eq!(index.groups().count(), 0);
    }
}

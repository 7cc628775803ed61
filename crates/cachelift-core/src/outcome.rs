//! Structured record of what a scan kept and what it skipped.

use crate::model::ArtifactRecord;
use std::fmt;
use std::path::{Path, PathBuf};

/// Why a file, lock-file line, or artifact group produced no command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Gradle cache path without exactly 5 components
    UnexpectedLayout { segments: usize },
    FilteredOut { group_id: String },
    MalformedPom { message: String },
    /// Coordinates still blank after the `<parent>` fallback
    MissingCoordinates { missing: Vec<&'static str> },
    /// Jar without a sibling POM of the same base name
    NoDescriptor,
    UnreadableFile { message: String },
    /// Two files for one triple that are not one jar plus one descriptor
    AmbiguousPair,
    TooManyFiles { count: usize },
    /// `resolved` line that does not split into exactly 3 colon segments
    MalformedResolved { segments: usize },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedLayout { segments } => write!(
                f,
                "expected group/artifact/version/hash/file, found {segments} path segments"
            ),
            Self::FilteredOut { group_id } => {
                write!(f, "group '{group_id}' does not match the group filter")
            }
            Self::MalformedPom { message } => write!(f, "malformed POM: {message}"),
            Self::MissingCoordinates { missing } => {
                write!(f, "missing coordinates: {}", missing.join(", "))
            }
            Self::NoDescriptor => f.write_str("no POM with the same base name"),
            Self::UnreadableFile { message } => write!(f, "unreadable file: {message}"),
            Self::AmbiguousPair => f.write_str("expected one .jar and one descriptor"),
            Self::TooManyFiles { count } => {
                write!(f, "{count} files for one coordinate, expected at most 2")
            }
            Self::MalformedResolved { segments } => write!(
                f,
                "resolved entry has {segments} colon-separated segments, expected 3"
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    /// File path, lock-file location (`package-lock.json:42`) or coordinate
    pub path: PathBuf,
    pub reason: SkipReason,
}

impl Skipped {
    pub fn new(path: impl Into<PathBuf>, reason: SkipReason) -> Self {
        Self {
            path: path.into(),
            reason,
        }
    }
}

impl fmt::Display for Skipped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.reason)
    }
}

/// Records produced by a layout extractor plus the files it rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub records: Vec<ArtifactRecord>,
    pub skipped: Vec<Skipped>,
}

impl Extraction {
    pub fn record(&mut self, record: ArtifactRecord) {
        self.records.push(record);
    }

    pub fn skip(&mut self, path: impl Into<PathBuf>, reason: SkipReason) {
        self.skipped.push(Skipped::new(path, reason));
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub kept: Vec<PathBuf>,
    pub skipped: Vec<Skipped>,
}

impl ScanReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keep(&mut self, path: impl Into<PathBuf>) {
        self.kept.push(path.into());
    }

    pub fn skip(&mut self, skipped: Skipped) {
        tracing::debug!("skipping {}", skipped);
        self.skipped.push(skipped);
    }

    pub fn extend_skipped(&mut self, skipped: impl IntoIterator<Item = Skipped>) {
        for s in skipped {
            self.skip(s);
        }
    }

    pub fn is_kept(&self, path: &Path) -> bool {
        self.kept.iter().any(|p| p == path)
    }

    /// Reason recorded for `path`, if it was skipped.
    pub fn reason_for(&self, path: &Path) -> Option<&SkipReason> {
        self.skipped
            .iter()
            .find(|s| s.path == path)
            .map(|s| &s.reason)
    }
}

//! Gradle module cache support for cachelift.
//!
//! Coordinates are read from the cache directory structure
//! (`group/artifact/version/hash/file`); upload planning is shared with
//! the Maven layout through `cachelift_core::ArtifactIndex`.

pub mod layout;

pub use layout::{GRADLE_SEGMENTS, extract_gradle_records, gradle_record};

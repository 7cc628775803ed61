//! Core abstractions for cachelift.
//!
//! Shared by the layout crates (Maven, Gradle, npm) and the binary:
//! coordinate records and their grouping index, migration settings, upload
//! command templates, the scan outcome log, and the script writer.

pub mod command;
pub mod config;
pub mod error;
pub mod model;
pub mod outcome;
pub mod script;

pub use command::{Command, DeployFile};
pub use config::{
    CacheLayout, Credentials, GroupFilter, MigrationConfig, MigrationMode, UploadMode,
};
pub use error::{ConfigError, CoreError, Result};
pub use model::{ArtifactIndex, ArtifactKey, ArtifactRecord, ResolvedPackage};
pub use outcome::{Extraction, ScanReport, SkipReason, Skipped};
pub use script::{PAUSE_SENTINEL, ScriptWriter};

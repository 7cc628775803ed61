//! Errors specific to Maven cache handling.

use cachelift_core::SkipReason;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MavenError {
    #[error("Failed to parse POM: {message}")]
    ParseError { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MavenError>;

impl MavenError {
    /// Per-file failures never abort a scan; they become skip entries.
    pub fn skip_reason(&self) -> SkipReason {
        match self {
            Self::ParseError { message } => SkipReason::MalformedPom {
                message: message.clone(),
            },
            Self::Io(e) => SkipReason::UnreadableFile {
                message: e.to_string(),
            },
        }
    }
}

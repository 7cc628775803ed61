//! Error types shared by every cachelift crate.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk {}: {message}", root.display())]
    Walk { root: PathBuf, message: String },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Configuration problems detected before any file is touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required setting '{key}'")]
    Missing { key: &'static str },

    #[error("invalid value '{value}' for '{key}': expected one of {expected}")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = CoreError::io(
            "cache/lib.pom",
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        let msg = err.to_string();
        assert!(msg.contains("cache/lib.pom"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Missing {
            key: "mavenUploadUrl",
        };
        assert_eq!(err.to_string(), "missing required setting 'mavenUploadUrl'");

        let err = ConfigError::InvalidValue {
            key: "uploadMode",
            value: "ftp".into(),
            expected: "curl, deploy",
        };
        assert!(err.to_string().contains("ftp"));
        assert!(err.to_string().contains("curl, deploy"));
    }

    #[test]
    fn test_config_error_conversion() {
        let err: CoreError = ConfigError::Missing { key: "outputFile" }.into();
        assert!(matches!(err, CoreError::Config(ConfigError::Missing { .. })));
        assert!(err.to_string().contains("outputFile"));
    }

    #[test]
    fn test_walk_error_display() {
        let err = CoreError::Walk {
            root: PathBuf::from("/cache"),
            message: "permission denied".into(),
        };
        assert!(err.to_string().contains("/cache"));
        assert!(err.to_string().contains("permission denied"));
    }
}

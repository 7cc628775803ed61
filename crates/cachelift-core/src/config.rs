//! Migration settings handed to the script generator.
//!
//! Values usually come from the command line or the environment, but the
//! struct itself knows nothing about where they were read from.

use crate::error::ConfigError;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_OUTPUT_FILE: &str = "migrate.bat";
pub const DEFAULT_SETTINGS_FILE: &str = "settings.xml";

/// How Maven artifacts are pushed to the destination repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadMode {
    /// One `curl --upload-file` PUT per file
    Curl,
    /// One `mvn deploy:deploy-file` per coordinate triple
    #[default]
    Deploy,
}

impl FromStr for UploadMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "curl" => Ok(Self::Curl),
            "deploy" | "mvn" => Ok(Self::Deploy),
            _ => Err(ConfigError::InvalidValue {
                key: "uploadMode",
                value: s.to_string(),
                expected: "curl, deploy",
            }),
        }
    }
}

impl fmt::Display for UploadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Curl => "curl",
            Self::Deploy => "deploy",
        })
    }
}

/// Directory layout of the scanned cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheLayout {
    /// `group/artifact/version/hash/file`, coordinates taken from the path
    Gradle,
    /// `~/.m2/repository` style, coordinates read from POM files
    #[default]
    Maven,
}

impl FromStr for CacheLayout {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gradle" => Ok(Self::Gradle),
            "maven" => Ok(Self::Maven),
            _ => Err(ConfigError::InvalidValue {
                key: "cacheLayout",
                value: s.to_string(),
                expected: "gradle, maven",
            }),
        }
    }
}

impl fmt::Display for CacheLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Gradle => "gradle",
            Self::Maven => "maven",
        })
    }
}

/// Which kind of cache the generator is running against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationMode {
    Maven,
    Npm,
}

impl fmt::Display for MigrationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Maven => "maven",
            Self::Npm => "npm",
        })
    }
}

/// Group-id prefixes to keep. An empty filter keeps everything.
///
/// # Examples
///
/// ```
/// use cachelift_core::GroupFilter;
///
/// let filter = GroupFilter::parse("com.acme, org.internal,,");
/// assert_eq!(filter.prefixes().len(), 2);
/// assert!(filter.matches("com.acme.billing"));
/// assert!(!filter.matches("org.apache.commons"));
///
/// assert!(GroupFilter::default().matches("anything"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupFilter {
    prefixes: Vec<String>,
}

impl GroupFilter {
    pub fn new(prefixes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            prefixes: prefixes
                .into_iter()
                .map(Into::into)
                .map(|p: String| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    /// Parses a comma separated prefix list.
    pub fn parse(list: &str) -> Self {
        Self::new(list.split(','))
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    pub fn matches(&self, group_id: &str) -> bool {
        self.prefixes.is_empty() || self.prefixes.iter().any(|p| group_id.starts_with(p))
    }
}

/// Login pair rendered as `login:password` in generated commands.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

impl Credentials {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }
}

impl fmt::Display for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.login, self.password)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct MigrationConfig {
    pub group_filter: GroupFilter,
    pub maven_upload_url: Option<String>,
    pub npm_upload_url: Option<String>,
    /// Used to download tarballs from the source npm registry
    pub source: Credentials,
    /// Used for every upload to the destination repository
    pub destination: Credentials,
    /// Relative paths are resolved against the scanned root
    pub output_file: PathBuf,
    pub upload_mode: UploadMode,
    pub repository_id: String,
    pub cache_layout: CacheLayout,
    pub insecure_tls: bool,
    pub settings_file: String,
    pub call_prefix: bool,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            group_filter: GroupFilter::default(),
            maven_upload_url: None,
            npm_upload_url: None,
            source: Credentials::default(),
            destination: Credentials::default(),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            upload_mode: UploadMode::default(),
            repository_id: String::new(),
            cache_layout: CacheLayout::default(),
            insecure_tls: false,
            settings_file: DEFAULT_SETTINGS_FILE.to_string(),
            call_prefix: false,
        }
    }
}

impl MigrationConfig {
    /// Checks that the endpoint needed by `mode` is configured.
    pub fn validate(&self, mode: MigrationMode) -> Result<(), ConfigError> {
        if self.output_file.as_os_str().is_empty() {
            return Err(ConfigError::Missing { key: "outputFile" });
        }
        match mode {
            MigrationMode::Maven => {
                require(self.maven_upload_url.as_deref(), "mavenUploadUrl")?;
            }
            MigrationMode::Npm => {
                require(self.npm_upload_url.as_deref(), "npmUploadUrl")?;
            }
        }
        Ok(())
    }

    /// Destination Maven endpoint, empty when unset.
    pub fn maven_url(&self) -> &str {
        self.maven_upload_url.as_deref().unwrap_or_default()
    }

    pub fn npm_url(&self) -> &str {
        self.npm_upload_url.as_deref().unwrap_or_default()
    }
}

fn require(value: Option<&str>, key: &'static str) -> Result<(), ConfigError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(ConfigError::Missing { key }),
    }
}

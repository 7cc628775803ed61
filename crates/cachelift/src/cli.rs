//! Command-line arguments.
//!
//! Every option can also come from the environment (or a `.env` file loaded
//! before parsing), which is how the tool is usually driven from CI.

use cachelift_core::config::{DEFAULT_OUTPUT_FILE, DEFAULT_SETTINGS_FILE};
use cachelift_core::{CacheLayout, Credentials, GroupFilter, MigrationConfig, UploadMode};
use clap::Parser;
use clap::builder::BoolishValueParser;
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    " ",
    env!("BUILD_TIME"),
    ")"
);

/// Generate a script that re-publishes a local package cache to another repository
#[derive(Parser, Debug)]
#[command(
    name = "cachelift",
    version,
    long_version = LONG_VERSION,
    about = "Generate a script that re-publishes a local package cache to another repository",
    long_about = "cachelift scans a Maven local repository, a Gradle module cache, or an npm \
                  project with a package-lock.json and writes a batch script of curl / mvn \
                  deploy:deploy-file commands that upload every artifact to a private \
                  repository manager.\n\n\
                  Examples:\n  \
                  cachelift ~/.m2/repository --maven-upload-url https://nexus/repository/releases\n  \
                  cachelift . --cache-layout gradle --upload-mode curl\n  \
                  NPM_UPLOAD_URL=https://nexus/service/rest/v1/components?repository=npm cachelift"
)]
pub struct CliArgs {
    #[arg(value_name = "ROOT", help = "Directory to scan (defaults to current directory)")]
    pub root: Option<PathBuf>,

    #[arg(
        long,
        env = "GROUP_FILTER",
        value_name = "PREFIXES",
        help = "Comma separated groupId prefixes to keep"
    )]
    pub group_filter: Option<String>,

    #[arg(long, env = "MAVEN_UPLOAD_URL", value_name = "URL")]
    pub maven_upload_url: Option<String>,

    #[arg(long, env = "NPM_UPLOAD_URL", value_name = "URL")]
    pub npm_upload_url: Option<String>,

    #[arg(long, env = "SOURCE_LOGIN", default_value = "", hide_default_value = true)]
    pub source_login: String,

    #[arg(
        long,
        env = "SOURCE_PASS",
        default_value = "",
        hide_default_value = true,
        hide_env_values = true
    )]
    pub source_pass: String,

    #[arg(long, env = "DEST_LOGIN", default_value = "", hide_default_value = true)]
    pub dest_login: String,

    #[arg(
        long,
        env = "DEST_PASS",
        default_value = "",
        hide_default_value = true,
        hide_env_values = true
    )]
    pub dest_pass: String,

    #[arg(
        short = 'o',
        long,
        env = "OUTPUT_FILE",
        default_value = DEFAULT_OUTPUT_FILE,
        help = "Script path, relative to ROOT unless absolute"
    )]
    pub output_file: PathBuf,

    #[arg(
        long,
        env = "UPLOAD_MODE",
        default_value = "deploy",
        help = "curl (PUT every file) or deploy (mvn deploy:deploy-file)"
    )]
    pub upload_mode: UploadMode,

    #[arg(long, env = "REPOSITORY_ID", default_value = "", hide_default_value = true)]
    pub repository_id: String,

    #[arg(long, env = "CACHE_LAYOUT", default_value = "maven", help = "maven or gradle")]
    pub cache_layout: CacheLayout,

    #[arg(
        long,
        env = "INSECURE_TLS",
        value_parser = BoolishValueParser::new(),
        help = "Disable certificate checks in mvn deploy commands"
    )]
    pub insecure_tls: bool,

    #[arg(long, env = "SETTINGS_FILE", default_value = DEFAULT_SETTINGS_FILE)]
    pub settings_file: String,

    #[arg(
        long,
        env = "CALL_PREFIX",
        value_parser = BoolishValueParser::new(),
        help = "Prefix mvn commands with `call` so the batch script continues after each one"
    )]
    pub call_prefix: bool,

    #[arg(short = 'v', long, help = "Enable debug logging")]
    pub verbose: bool,
}

impl CliArgs {
    pub fn root(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn to_config(&self) -> MigrationConfig {
        MigrationConfig {
            group_filter: self
                .group_filter
                .as_deref()
                .map(GroupFilter::parse)
                .unwrap_or_default(),
            maven_upload_url: self.maven_upload_url.clone(),
            npm_upload_url: self.npm_upload_url.clone(),
            source: Credentials::new(&self.source_login, &self.source_pass),
            destination: Credentials::new(&self.dest_login, &self.dest_pass),
            output_file: self.output_file.clone(),
            upload_mode: self.upload_mode,
            repository_id: self.repository_id.clone(),
            cache_layout: self.cache_layout,
            insecure_tls: self.insecure_tls,
            settings_file: self.settings_file.clone(),
            call_prefix: self.call_prefix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_to_config() {
        let args = CliArgs::try_parse_from([
            "cachelift",
            "/srv/m2",
            "--group-filter",
            "com.acme,ru.bank",
            "--maven-upload-url",
            "https://nexus/repository/releases",
            "--dest-login",
            "deployer",
            "--dest-pass",
            "pw",
            "--upload-mode",
            "curl",
            "--cache-layout",
            "gradle",
            "--insecure-tls",
            "-o",
            "upload.bat",
        ])
        .unwrap();

        assert_eq!(args.root(), PathBuf::from("/srv/m2"));
        let config = args.to_config();
        assert_eq!(config.group_filter.prefixes(), ["com.acme", "ru.bank"]);
        assert_eq!(config.maven_url(), "https://nexus/repository/releases");
        assert_eq!(config.destination, Credentials::new("deployer", "pw"));
        assert_eq!(config.upload_mode, UploadMode::Curl);
        assert_eq!(config.cache_layout, CacheLayout::Gradle);
        assert!(config.insecure_tls);
        assert_eq!(config.output_file, PathBuf::from("upload.bat"));
    }

    #[test]
    fn test_invalid_upload_mode_rejected() {
        let err = CliArgs::try_parse_from(["cachelift", "--upload-mode", "ftp"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_command_definition() {
        use clap::CommandFactory;
        CliArgs::command().debug_assert();
    }
}

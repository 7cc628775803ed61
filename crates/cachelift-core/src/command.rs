//! Upload command templates.
//!
//! Each variant renders to exactly one line of the generated script. The
//! argument order matches what repository managers and existing migration
//! scripts expect, so keep it stable.

use crate::config::Credentials;
use crate::model::ArtifactKey;
use std::fmt;
use std::path::PathBuf;

const INSECURE_TLS_FLAGS: &str = "-Dmaven.wagon.http.ssl.insecure=true \
     -Dmaven.wagon.http.ssl.allowall=true \
     -Dmaven.wagon.http.ssl.ignore.validity.dates=true";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Authenticated PUT of a single file into the Maven repository
    CurlUpload {
        url: String,
        file: PathBuf,
        credentials: Credentials,
    },
    DeployFile(DeployFile),
    /// Fetch an npm tarball from the source registry
    NpmDownload { url: String, credentials: Credentials },
    /// Multipart upload of a downloaded tarball as an npm asset
    NpmPublish {
        file: String,
        url: String,
        credentials: Credentials,
    },
}

/// Parameters of one `mvn deploy:deploy-file` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployFile {
    pub repository_id: String,
    pub key: ArtifactKey,
    pub url: String,
    /// Artifact payload (`-Dfile`)
    pub file: PathBuf,
    /// Descriptor (`-DpomFile`)
    pub pom_file: PathBuf,
    pub settings_file: String,
    pub insecure_tls: bool,
    pub call_prefix: bool,
}

impl Command {
    /// Builds the direct-upload command for one file.
    ///
    /// The target is `<base>/<groupId>/<artifactId>/<version>/<fileName>`.
    pub fn curl_upload(
        base_url: &str,
        key: &ArtifactKey,
        file_name: &str,
        file: impl Into<PathBuf>,
        credentials: &Credentials,
    ) -> Self {
        let url = format!(
            "{}/{}/{}/{}/{}",
            base_url.trim_end_matches('/'),
            key.group_id,
            key.artifact_id,
            key.version,
            file_name
        );
        Self::CurlUpload {
            url,
            file: file.into(),
            credentials: credentials.clone(),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CurlUpload {
                url,
                file,
                credentials,
            } => write!(
                f,
                "curl {url} --upload-file {} -k -u {credentials} --request PUT",
                file.display()
            ),
            Self::DeployFile(deploy) => fmt::Display::fmt(deploy, f),
            Self::NpmDownload { url, credentials } => {
                write!(f, "curl -k -u {credentials} -O {url}")
            }
            Self::NpmPublish {
                file,
                url,
                credentials,
            } => write!(f, "curl -k -u {credentials} -F npm.asset=@{file} {url}"),
        }
    }
}

impl fmt::Display for DeployFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.call_prefix {
            f.write_str("call ")?;
        }
        f.write_str("mvn deploy:deploy-file")?;
        if self.insecure_tls {
            write!(f, " {INSECURE_TLS_FLAGS}")?;
        }
        write!(
            f,
            " -DrepositoryId={} -DgroupId={} -DartifactId={} -Dversion={} -Durl={} -Dfile={} -DpomFile={} -s {}",
            self.repository_id,
            self.key.group_id,
            self.key.artifact_id,
            self.key.version,
            self.url,
            self.file.display(),
            self.pom_file.display(),
            self.settings_file
        )
    }
}

impl From<DeployFile> for Command {
    fn from(deploy: DeployFile) -> Self {
        Self::DeployFile(deploy)
    }
}

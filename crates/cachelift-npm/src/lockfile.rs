//! Line scanner for `package-lock.json`.
//!
//! The lock file is not parsed as JSON. Every line whose trimmed text starts
//! with `resolved` is taken as a tarball location, which works for all
//! lockfile versions npm has produced so far.

use cachelift_core::{
    Command, CoreError, MigrationConfig, ResolvedPackage, Result, SkipReason, Skipped,
};
use std::path::Path;

pub const LOCK_FILE_NAME: &str = "package-lock.json";

/// Packages found in a lock file, in file order, and the lines rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LockScan {
    pub packages: Vec<ResolvedPackage>,
    pub skipped: Vec<Skipped>,
}

/// Scans lock-file content for `resolved` entries.
///
/// # Examples
///
/// ```
/// use cachelift_npm::scan_lock_file;
///
/// let scan = scan_lock_file(r#"    "resolved": "https://registry.npmjs.org/ms/-/ms-2.1.3.tgz","#);
/// assert_eq!(scan.packages[0].url, "https://registry.npmjs.org/ms/-/ms-2.1.3.tgz");
/// assert_eq!(scan.packages[0].file_name, "ms-2.1.3.tgz");
/// ```
pub fn scan_lock_file(content: &str) -> LockScan {
    let mut scan = LockScan::default();

    for (idx, line) in content.lines().enumerate() {
        let row = line.trim().trim_matches('"');
        if !row.starts_with("resolved") {
            continue;
        }

        match parse_resolved(row) {
            Ok(package) => {
                tracing::debug!("{} -> {}", package.url, package.file_name);
                scan.packages.push(package);
            }
            Err(reason) => {
                let location = format!("{LOCK_FILE_NAME}:{}", idx + 1);
                tracing::debug!("skipping {location}: {reason}");
                scan.skipped.push(Skipped::new(location, reason));
            }
        }
    }

    scan
}

/// Reads and scans a lock file. A read failure is fatal.
pub fn read_lock_file(path: &Path) -> Result<LockScan> {
    let content = std::fs::read_to_string(path).map_err(|e| CoreError::io(path, e))?;
    Ok(scan_lock_file(&content))
}

fn parse_resolved(row: &str) -> std::result::Result<ResolvedPackage, SkipReason> {
    let segments: Vec<&str> = row.split(':').collect();
    let [_key, scheme, rest] = segments.as_slice() else {
        return Err(SkipReason::MalformedResolved {
            segments: segments.len(),
        });
    };

    let scheme = scheme.trim().trim_matches('"');
    let rest = rest.trim().trim_end_matches(',').trim_matches('"');
    let url = format!("{scheme}:{rest}");
    let file_name = url.rsplit('/').next().unwrap_or_default().to_string();

    Ok(ResolvedPackage { url, file_name })
}

/// Download commands for every package, then one publish per file.
pub fn plan_npm(scan: &LockScan, config: &MigrationConfig) -> Vec<Command> {
    let downloads = scan.packages.iter().map(|p| Command::NpmDownload {
        url: p.url.clone(),
        credentials: config.source.clone(),
    });
    let publishes = scan.packages.iter().map(|p| Command::NpmPublish {
        file: p.file_name.clone(),
        url: config.npm_url().to_string(),
        credentials: config.destination.clone(),
    });

    downloads.chain(publishes).collect()
}

//! Directory walk collecting candidate artifact files.

use cachelift_core::{CoreError, Result};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Directories never descended into.
const PRUNED_DIRS: &[&str] = &[".git", ".idea", "__MACOSX"];

const ARTIFACT_EXTENSIONS: &[&str] = &["pom", "jar"];

/// Returns every `.pom`/`.jar` under `root`, relative to it.
///
/// Entries are visited in file-name order so the generated script is stable
/// across runs and platforms.
pub fn collect_artifact_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_pruned(e))
    {
        let entry = entry.map_err(|e| CoreError::Walk {
            root: root.to_path_buf(),
            message: e.to_string(),
        })?;

        if entry.file_type().is_file() && is_artifact(entry.path()) {
            let rel_path = entry
                .path()
                .strip_prefix(root)
                .unwrap_or(entry.path())
                .to_path_buf();
            files.push(rel_path);
        }
    }

    tracing::info!(
        "Found {} artifact files under {}",
        files.len(),
        root.display()
    );
    Ok(files)
}

fn is_pruned(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| PRUNED_DIRS.contains(&name))
}

fn is_artifact(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ARTIFACT_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "x").unwrap();
    }

    #[test]
    fn test_collects_relative_sorted() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        touch(root, "org/b/1.0/b-1.0.pom");
        touch(root, "com/a/1.0/a-1.0.jar");
        touch(root, "com/a/1.0/a-1.0.pom");
        touch(root, "com/a/1.0/a-1.0.jar.sha1");
        touch(root, "com/a/1.0/_remote.repositories");

        let files = collect_artifact_files(root).unwrap();
        assert_eq!(
            files,
            vec![
                PathBuf::from("com/a/1.0/a-1.0.jar"),
                PathBuf::from("com/a/1.0/a-1.0.pom"),
                PathBuf::from("org/b/1.0/b-1.0.pom"),
            ]
        );
    }

    #[test]
    fn test_pruned_directories() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        touch(root, ".git/objects/x.jar");
        touch(root, ".idea/libraries/y.pom");
        touch(root, "__MACOSX/com/a/a.jar");
        touch(root, "com/a/1.0/a-1.0.pom");

        let files = collect_artifact_files(root).unwrap();
        assert_eq!(files, vec![PathBuf::from("com/a/1.0/a-1.0.pom")]);
    }

    #[test]
    fn test_pruned_name_as_root_still_walked() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path().join(".idea");
        touch(&root, "lib/lib.jar");

        let files = collect_artifact_files(&root).unwrap();
        assert_eq!(files, vec![PathBuf::from("lib/lib.jar")]);
    }

    #[test]
    fn test_missing_root_is_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let err = collect_artifact_files(&temp_dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, CoreError::Walk { .. }));
    }
}

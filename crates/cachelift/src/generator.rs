//! Orchestrates a scan and writes the migration script.

use crate::walk::collect_artifact_files;
use cachelift_core::{
    ArtifactIndex, CacheLayout, Command, MigrationConfig, MigrationMode, Result, ScanReport,
    ScriptWriter, UploadMode,
};
use cachelift_gradle::extract_gradle_records;
use cachelift_maven::{extract_maven_records, plan_curl_uploads, plan_deploys};
use cachelift_npm::{LOCK_FILE_NAME, plan_npm, read_lock_file};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Commands for one scan, not yet written anywhere.
#[derive(Debug)]
pub struct Plan {
    pub mode: MigrationMode,
    pub commands: Vec<Command>,
    pub report: ScanReport,
}

#[derive(Debug)]
pub struct GenerationSummary {
    pub mode: MigrationMode,
    pub script: PathBuf,
    /// Lines written, including the trailing `pause`
    pub lines: usize,
    pub report: ScanReport,
}

pub struct MigrationScriptGenerator {
    config: MigrationConfig,
}

impl MigrationScriptGenerator {
    pub fn new(config: MigrationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MigrationConfig {
        &self.config
    }

    /// npm mode when `root` holds a lock file, Maven/Gradle mode otherwise.
    pub fn detect_mode(root: &Path) -> MigrationMode {
        if root.join(LOCK_FILE_NAME).is_file() {
            MigrationMode::Npm
        } else {
            MigrationMode::Maven
        }
    }

    /// Scans `root` and builds the command list without writing the script.
    pub fn plan(&self, root: &Path) -> Result<Plan> {
        let mode = Self::detect_mode(root);
        tracing::info!("Scanning {} in {} mode", root.display(), mode);

        match mode {
            MigrationMode::Npm => self.plan_npm(root),
            MigrationMode::Maven => self.plan_maven(root),
        }
    }

    /// Validates the configuration, plans, and writes the script under `root`.
    pub fn generate(&self, root: &Path) -> Result<GenerationSummary> {
        let mode = Self::detect_mode(root);
        self.config.validate(mode)?;

        let plan = self.plan(root)?;
        let script = root.join(&self.config.output_file);

        let mut writer = ScriptWriter::create(&script)?;
        writer.push_all(&plan.commands)?;
        let lines = writer.finish()?;

        tracing::info!(
            "Wrote {} commands to {} ({} kept, {} skipped)",
            plan.commands.len(),
            script.display(),
            plan.report.kept.len(),
            plan.report.skipped.len()
        );

        Ok(GenerationSummary {
            mode: plan.mode,
            script,
            lines,
            report: plan.report,
        })
    }

    fn plan_npm(&self, root: &Path) -> Result<Plan> {
        let scan = read_lock_file(&root.join(LOCK_FILE_NAME))?;
        let mut report = ScanReport::new();

        for package in &scan.packages {
            report.keep(&package.file_name);
        }
        report.extend_skipped(scan.skipped.iter().cloned());

        Ok(Plan {
            mode: MigrationMode::Npm,
            commands: plan_npm(&scan, &self.config),
            report,
        })
    }

    fn plan_maven(&self, root: &Path) -> Result<Plan> {
        let files = collect_artifact_files(root)?;
        let filter = &self.config.group_filter;

        let extraction = match self.config.cache_layout {
            CacheLayout::Gradle => extract_gradle_records(&files, filter),
            CacheLayout::Maven => extract_maven_records(root, &files, filter),
        };

        let mut report = ScanReport::new();
        report.extend_skipped(extraction.skipped);

        let index: ArtifactIndex = extraction.records.into_iter().collect();
        tracing::debug!(
            "{} files grouped into {} coordinates",
            index.file_count(),
            index.len()
        );

        let commands = match self.config.upload_mode {
            UploadMode::Curl => plan_curl_uploads(&index, &self.config),
            UploadMode::Deploy => {
                let deploy = plan_deploys(&index, &self.config);
                report.extend_skipped(deploy.skipped);
                deploy.commands
            }
        };

        let rejected: HashSet<PathBuf> = report.skipped.iter().map(|s| s.path.clone()).collect();
        for (_, records) in index.groups() {
            for record in records {
                if !rejected.contains(&record.file_path) {
                    report.keep(&record.file_path);
                }
            }
        }

        Ok(Plan {
            mode: MigrationMode::Maven,
            commands,
            report,
        })
    }
}

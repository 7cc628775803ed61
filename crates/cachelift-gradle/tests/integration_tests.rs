//! Gradle cache paths flowing into the shared deploy planner.

use cachelift_core::{ArtifactIndex, ArtifactKey, GroupFilter, MigrationConfig, SkipReason};
use cachelift_gradle::extract_gradle_records;
use cachelift_maven::plan_deploys;
use std::path::PathBuf;

fn paths(list: &[&str]) -> Vec<PathBuf> {
    list.iter().map(PathBuf::from).collect()
}

#[test]
fn test_cache_entries_to_deploy_commands() {
    // pom and jar sit under different hash directories in the cache
    let files = paths(&[
        "com.acme/billing/2.4.1/0a1b2c/billing-2.4.1.jar",
        "com.acme/billing/2.4.1/9f8e7d/billing-2.4.1.pom",
        "org.slf4j/slf4j-api/2.0.9/5d6e7f/slf4j-api-2.0.9.pom",
        "com/acme/lib/1.0/hash/lib-1.0.jar",
    ]);

    let extraction = extract_gradle_records(&files, &GroupFilter::default());
    assert_eq!(extraction.records.len(), 3);
    assert_eq!(extraction.skipped.len(), 1);
    assert_eq!(
        extraction.skipped[0].reason,
        SkipReason::UnexpectedLayout { segments: 6 }
    );

    let index: ArtifactIndex = extraction.records.into_iter().collect();
    assert_eq!(index.len(), 2);
    assert_eq!(
        index
            .get(&ArtifactKey::new("com.acme", "billing", "2.4.1"))
            .map(<[_]>::len),
        Some(2)
    );

    let config = MigrationConfig {
        maven_upload_url: Some("https://nexus.local/repository/maven-releases".into()),
        repository_id: "nexus".into(),
        ..MigrationConfig::default()
    };
    let plan = plan_deploys(&index, &config);
    assert!(plan.skipped.is_empty());

    let lines: Vec<String> = plan.commands.iter().map(ToString::to_string).collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("-Dfile=com.acme/billing/2.4.1/0a1b2c/billing-2.4.1.jar"));
    assert!(lines[0].contains("-DpomFile=com.acme/billing/2.4.1/9f8e7d/billing-2.4.1.pom"));
    assert!(lines[1].contains("-DgroupId=org.slf4j"));
}

#[test]
fn test_filter_by_group_prefix() {
    let files = paths(&[
        "ru.bank.core/ledger/1.0/aa/ledger-1.0.pom",
        "com.google.guava/guava/33.0/bb/guava-33.0.pom",
    ]);

    let extraction = extract_gradle_records(&files, &GroupFilter::parse("ru.bank"));
    assert_eq!(extraction.records.len(), 1);
    assert_eq!(extraction.records[0].key.artifact_id, "ledger");
    assert!(matches!(
        extraction.skipped[0].reason,
        SkipReason::FilteredOut { .. }
    ));
}

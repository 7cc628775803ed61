//! Turns grouped artifacts into upload commands.

use cachelift_core::{
    ArtifactIndex, ArtifactKey, ArtifactRecord, Command, DeployFile, MigrationConfig, SkipReason,
    Skipped,
};

/// One `curl --upload-file` per recorded file.
///
/// Keys come out in first-seen order, files within a key in discovery order.
pub fn plan_curl_uploads(index: &ArtifactIndex, config: &MigrationConfig) -> Vec<Command> {
    index
        .groups()
        .flat_map(|(key, files)| {
            files.iter().map(move |record| {
                Command::curl_upload(
                    config.maven_url(),
                    key,
                    &record.file_name,
                    record.file_path.clone(),
                    &config.destination,
                )
            })
        })
        .collect()
}

/// Commands and rejected files produced by [`plan_deploys`].
#[derive(Debug, Default)]
pub struct DeployPlan {
    pub commands: Vec<Command>,
    pub skipped: Vec<Skipped>,
}

/// One `mvn deploy:deploy-file` per coordinate triple.
///
/// - a single file is both the payload and its descriptor;
/// - two files must be one `.jar` (payload) and one descriptor;
/// - anything else yields no command and every file of the group is skipped.
pub fn plan_deploys(index: &ArtifactIndex, config: &MigrationConfig) -> DeployPlan {
    let mut plan = DeployPlan::default();

    for (key, files) in index.groups() {
        let pair = match files {
            [only] => Ok((only, only)),
            [a, b] => match (a.is_jar(), b.is_jar()) {
                (true, false) => Ok((a, b)),
                (false, true) => Ok((b, a)),
                _ => Err(SkipReason::AmbiguousPair),
            },
            _ => Err(SkipReason::TooManyFiles { count: files.len() }),
        };

        match pair {
            Ok((payload, descriptor)) => {
                plan.commands
                    .push(deploy_command(key, payload, descriptor, config));
            }
            Err(reason) => {
                tracing::warn!("No deploy command for {}: {}", key, reason);
                plan.skipped.extend(
                    files
                        .iter()
                        .map(|f| Skipped::new(f.file_path.clone(), reason.clone())),
                );
            }
        }
    }

    plan
}

fn deploy_command(
    key: &ArtifactKey,
    payload: &ArtifactRecord,
    descriptor: &ArtifactRecord,
    config: &MigrationConfig,
) -> Command {
    DeployFile {
        repository_id: config.repository_id.clone(),
        key: key.clone(),
        url: config.maven_url().to_string(),
        file: payload.file_path.clone(),
        pom_file: descriptor.file_path.clone(),
        settings_file: config.settings_file.clone(),
        insecure_tls: config.insecure_tls,
        call_prefix: config.call_prefix,
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cachelift_core::Credentials;
    use std::path::{Path, PathBuf};

    fn config() -> MigrationConfig {
        MigrationConfig {
            maven_upload_url: Some("https://nexus.local/repository/releases".into()),
            destination: Credentials::new("deployer", "pw"),
            repository_id: "releases".into(),
            ..MigrationConfig::default()
        }
    }

    fn record(version: &str, file: &str) -> ArtifactRecord {
        ArtifactRecord::new(ArtifactKey::new("com.acme", "lib", version), file)
    }

    fn deploy_of(cmd: &Command) -> &DeployFile {
        match cmd {
            Command::DeployFile(d) => d,
            other => panic!("expected deploy command, got {other:?}"),
        }
    }

    #[test]
    fn test_jar_and_pom_paired() {
        let index: ArtifactIndex = [record("1.0", "d/lib-1.0.pom"), record("1.0", "d/lib-1.0.jar")]
            .into_iter()
            .collect();

        let plan = plan_deploys(&index, &config());
        assert!(plan.skipped.is_empty());
        assert_eq!(plan.commands.len(), 1);

        let deploy = deploy_of(&plan.commands[0]);
        assert_eq!(deploy.file, PathBuf::from("d/lib-1.0.jar"));
        assert_eq!(deploy.pom_file, PathBuf::from("d/lib-1.0.pom"));
        assert_eq!(deploy.repository_id, "releases");
        assert_eq!(deploy.url, "https://nexus.local/repository/releases");
    }

    #[test]
    fn test_single_file_is_its_own_descriptor() {
        let index: ArtifactIndex = [record("1.0", "d/lib-1.0.pom")].into_iter().collect();

        let plan = plan_deploys(&index, &config());
        let deploy = deploy_of(&plan.commands[0]);
        assert_eq!(deploy.file, deploy.pom_file);
        assert_eq!(
            plan.commands[0].to_string(),
            "mvn deploy:deploy-file -DrepositoryId=releases -DgroupId=com.acme -DartifactId=lib \
             -Dversion=1.0 -Durl=https://nexus.local/repository/releases -Dfile=d/lib-1.0.pom \
             -DpomFile=d/lib-1.0.pom -s settings.xml"
        );
    }

    #[test]
    fn test_three_files_skipped() {
        let index: ArtifactIndex = [
            record("1.0", "a/lib-1.0.pom"),
            record("1.0", "b/lib-1.0.jar"),
            record("1.0", "c/lib-1.0.jar"),
        ]
        .into_iter()
        .collect();

        let plan = plan_deploys(&index, &config());
        assert!(plan.commands.is_empty());
        assert_eq!(plan.skipped.len(), 3);
        assert!(
            plan.skipped
                .iter()
                .all(|s| s.reason == SkipReason::TooManyFiles { count: 3 })
        );
    }

    #[test]
    fn test_two_jars_ambiguous() {
        let index: ArtifactIndex = [record("1.0", "a/lib-1.0.jar"), record("1.0", "b/lib-1.0.jar")]
            .into_iter()
            .collect();

        let plan = plan_deploys(&index, &config());
        assert!(plan.commands.is_empty());
        assert_eq!(plan.skipped[0].reason, SkipReason::AmbiguousPair);
        assert_eq!(plan.skipped[0].path, Path::new("a/lib-1.0.jar"));
    }

    #[test]
    fn test_versions_deployed_separately() {
        let index: ArtifactIndex = [
            record("1.0", "lib-1.0.pom"),
            record("2.0", "lib-2.0.pom"),
            record("1.0", "lib-1.0.jar"),
        ]
        .into_iter()
        .collect();

        let plan = plan_deploys(&index, &config());
        assert_eq!(plan.commands.len(), 2);
        assert_eq!(deploy_of(&plan.commands[0]).key.version, "1.0");
        assert_eq!(deploy_of(&plan.commands[1]).key.version, "2.0");
    }

    #[test]
    fn test_insecure_flag_passed_through() {
        let index: ArtifactIndex = [record("1.0", "lib-1.0.pom")].into_iter().collect();
        let config = MigrationConfig {
            insecure_tls: true,
            ..config()
        };

        let plan = plan_deploys(&index, &config);
        assert!(
            plan.commands[0]
                .to_string()
                .contains("-Dmaven.wagon.http.ssl.insecure=true")
        );
    }

    #[test]
    fn test_curl_uploads_every_file() {
        let index: ArtifactIndex = [
            record("1.0", "d/lib-1.0.pom"),
            record("1.0", "d/lib-1.0.jar"),
            record("2.0", "e/lib-2.0.jar"),
        ]
        .into_iter()
        .collect();

        let commands = plan_curl_uploads(&index, &config());
        let lines: Vec<String> = commands.iter().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            vec![
                "curl https://nexus.local/repository/releases/com.acme/lib/1.0/lib-1.0.pom \
                 --upload-file d/lib-1.0.pom -k -u deployer:pw --request PUT",
                "curl https://nexus.local/repository/releases/com.acme/lib/1.0/lib-1.0.jar \
                 --upload-file d/lib-1.0.jar -k -u deployer:pw --request PUT",
                "curl https://nexus.local/repository/releases/com.acme/lib/2.0/lib-2.0.jar \
                 --upload-file e/lib-2.0.jar -k -u deployer:pw --request PUT",
            ]
        );
    }
}

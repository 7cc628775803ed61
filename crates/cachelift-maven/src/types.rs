//! Coordinate types read from POM files.

use cachelift_core::ArtifactKey;

/// `groupId` / `artifactId` / `version` of one XML block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CoordinateFields {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
}

impl CoordinateFields {
    pub fn is_complete(&self) -> bool {
        !is_blank(self.group_id.as_deref())
            && !is_blank(self.artifact_id.as_deref())
            && !is_blank(self.version.as_deref())
    }
}

/// Coordinates declared by a POM: the project's own and its `<parent>`'s.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PomCoordinates {
    pub project: CoordinateFields,
    pub parent: CoordinateFields,
}

impl PomCoordinates {
    /// Resolves the project coordinates, filling blank fields from `<parent>`.
    ///
    /// The parent is consulted per field and only when the project value is
    /// blank. On failure returns the names of fields that stay blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use cachelift_maven::{CoordinateFields, PomCoordinates};
    ///
    /// let pom = PomCoordinates {
    ///     project: CoordinateFields {
    ///         group_id: None,
    ///         artifact_id: Some("billing-api".into()),
    ///         version: None,
    ///     },
    ///     parent: CoordinateFields {
    ///         group_id: Some("com.acme".into()),
    ///         artifact_id: Some("acme-parent".into()),
    ///         version: Some("7".into()),
    ///     },
    /// };
    ///
    /// let key = pom.resolve().unwrap();
    /// assert_eq!(key.to_string(), "com.acme:billing-api:7");
    /// ```
    pub fn resolve(&self) -> std::result::Result<ArtifactKey, Vec<&'static str>> {
        let project = &self.project;
        let parent = &self.parent;
        let group_id = pick(project.group_id.as_deref(), parent.group_id.as_deref());
        let artifact_id = pick(project.artifact_id.as_deref(), parent.artifact_id.as_deref());
        let version = pick(project.version.as_deref(), parent.version.as_deref());

        match (group_id, artifact_id, version) {
            (Some(g), Some(a), Some(v)) => Ok(ArtifactKey::new(g, a, v)),
            (g, a, v) => {
                let mut missing = Vec::new();
                if g.is_none() {
                    missing.push("groupId");
                }
                if a.is_none() {
                    missing.push("artifactId");
                }
                if v.is_none() {
                    missing.push("version");
                }
                Err(missing)
            }
        }
    }
}

fn pick<'a>(own: Option<&'a str>, parent: Option<&'a str>) -> Option<&'a str> {
    if is_blank(own) {
        parent.filter(|v| !v.trim().is_empty())
    } else {
        own
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

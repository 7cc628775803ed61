//! Maven local repository support.
//!
//! This crate reads coordinates out of POM files, pairs jars with their
//! POM, and plans the upload commands (direct `curl` PUTs or
//! `mvn deploy:deploy-file`) for every coordinate triple found.

pub mod error;
pub mod layout;
pub mod parser;
pub mod plan;
pub mod types;

pub use error::{MavenError, Result};
pub use layout::{PomIndex, extract_maven_records};
pub use parser::{parse_pom_bytes, parse_pom_coordinates, read_pom_coordinates};
pub use plan::{DeployPlan, plan_curl_uploads, plan_deploys};
pub use types::{CoordinateFields, PomCoordinates};

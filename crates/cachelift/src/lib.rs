//! cachelift: turn a local package cache into an upload script.
//!
//! The binary wires [`cli::CliArgs`] into a [`generator::MigrationScriptGenerator`];
//! the modules are public so the pipeline can be driven from tests or other tools.

pub mod cli;
pub mod generator;
pub mod walk;

pub use generator::{GenerationSummary, MigrationScriptGenerator, Plan};
pub use walk::collect_artifact_files;

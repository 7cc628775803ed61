use anyhow::Context;
use cachelift::cli::CliArgs;
use cachelift::generator::MigrationScriptGenerator;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DOTENV_FILE: &str = ".env";

fn main() -> anyhow::Result<()> {
    // Must run before parsing so `.env` values reach clap's `env` fallbacks.
    // Only the working directory is consulted, never its parents.
    let dotenv = dotenvy::from_path(DOTENV_FILE);

    let args = CliArgs::parse();
    init_logging(args.verbose);

    match dotenv {
        Ok(()) => tracing::debug!("Loaded environment from {DOTENV_FILE}"),
        Err(e) if e.not_found() => {}
        Err(e) => return Err(e).context(format!("failed to load {DOTENV_FILE}")),
    }

    let root = args.root();
    let generator = MigrationScriptGenerator::new(args.to_config());
    let summary = generator
        .generate(&root)
        .with_context(|| format!("failed to generate migration script for {}", root.display()))?;

    if !summary.report.skipped.is_empty() {
        tracing::warn!(
            "{} entries skipped, rerun with -v to list them",
            summary.report.skipped.len()
        );
    }
    tracing::info!(
        "{} mode: {} lines written to {}",
        summary.mode,
        summary.lines,
        summary.script.display()
    );

    Ok(())
}

/// Logs go to stderr; RUST_LOG overrides the level chosen by `-v`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

//! Command implementations

mod analytics;
mod claims;
mod config;
mod options;
mod summary;

use crate::cli::{Cli, Commands};
use crate::output::OutputWriter;
use anyhow::{Context, Result};
use fra_core::config::{CliConfigOverrides, LayeredConfig};
use fra_core::DatasetStore;

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let config = resolve_config(&cli)?;

    if let Commands::Config = cli.command {
        return config::execute(&config, &output);
    }

    let store = load_store(&config, &output)?;

    match cli.command {
        Commands::Claims(args) => claims::list(args, &store, &output),
        Commands::Claim(args) => claims::show(args, &store, &output),
        Commands::Export(args) => claims::export(args, &store, &output),
        Commands::Summary(args) => summary::rollup(args, &store, &output),
        Commands::Timeline(args) => summary::timeline(args, &store, &output),
        Commands::Performance => summary::performance(&store, &output),
        Commands::Options => options::execute(&store, &output),
        Commands::Analytics => analytics::execute(&store, &output),
        Commands::Config => config::execute(&config, &output),
    }
}

/// Defaults, then `--config`, then `FRA_*` variables, then the file flags
fn resolve_config(cli: &Cli) -> Result<LayeredConfig> {
    let mut config = LayeredConfig::resolve(cli.config.as_deref())
        .context("Failed to load configuration")?;

    config.update_from_cli(CliConfigOverrides {
        claims_file: cli.claims_file.clone(),
        analytics_file: cli.analytics_file.clone(),
    });

    Ok(config)
}

/// Unlike the server, the CLI reports a load failure instead of serving
/// an empty dataset
fn load_store(config: &LayeredConfig, output: &OutputWriter) -> Result<DatasetStore> {
    let claims_file = &config.claims_file.value;
    let analytics_file = &config.analytics_file.value;

    tracing::debug!(
        claims = %claims_file.display(),
        analytics = %analytics_file.display(),
        "Loading FRA data"
    );

    let store = DatasetStore::try_load(claims_file, analytics_file).with_context(|| {
        format!(
            "Failed to load claims from {} and {}",
            claims_file.display(),
            analytics_file.display()
        )
    })?;

    if store.is_empty() {
        output.warning(format!("{} contains no claims", claims_file.display()));
    }

    Ok(store)
}

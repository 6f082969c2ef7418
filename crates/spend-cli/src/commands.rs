use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use spend_cli::config::SpendConfig;
use spend_cli::pipeline::{RunOutcome, RunRequest, run};
use spend_cli::publication::default_period;
use tracing::debug;

use crate::cli::RunArgs;
use crate::summary::print_aliases;

pub fn load_config(path: Option<&Path>) -> Result<SpendConfig> {
    match path {
        Some(path) => {
            let config = SpendConfig::load(path)?;
            debug!(path = %path.display(), aliases = config.aliases.len(), "loaded config");
            Ok(config)
        }
        None => Ok(SpendConfig::default()),
    }
}

pub fn run_month(args: &RunArgs, config: &SpendConfig) -> Result<RunOutcome> {
    let registry = config.alias_registry().context("build alias registry")?;
    let processed_at = Utc::now();
    let period = args.month.unwrap_or_else(|| {
        let period = default_period(processed_at.date_naive());
        debug!(%period, "no month given; using previous month");
        period
    });

    let request = RunRequest {
        period,
        input: args.input.clone(),
        output_root: args.output_root.clone(),
        source_url: args.source_url.clone(),
        publication_url: args.publication_url.clone(),
        content_type: args.content_type.clone(),
        sheet: args.sheet.clone(),
        processed_at,
    };
    run(&request, &registry, &config.dataset)
}

pub fn run_aliases(config: &SpendConfig) -> Result<()> {
    let registry = config.alias_registry().context("build alias registry")?;
    print_aliases(&registry);
    Ok(())
}

//! Application runner logic
//!
//! Handles special CLI flags, then drives one audit: load the family,
//! extract side bearings, build the report and write it out.

use anyhow::{Context, Result};
use tracing::info;

use crate::analysis::{read_side_bearings, StrokeLabels};
use crate::core::cli::CliArgs;
use crate::core::config_file::ConfigFile;
use crate::core::settings::AuditConfig;
use crate::font_source::ufo::load_sources;
use crate::logging;
use crate::report::{self, Report};

/// Run the application with the given CLI arguments.
pub fn run_app(cli_args: CliArgs) -> Result<()> {
    if cli_args.new_config {
        return ConfigFile::initialize_config_directory()
            .context("Failed to initialize config directory");
    }

    cli_args.validate().map_err(anyhow::Error::msg)?;
    let _guard = logging::init(cli_args.verbose, cli_args.log_file)?;

    let config = AuditConfig::resolve(&cli_args, ConfigFile::load().as_ref());
    let report = audit(&config)?;
    report::write_json(&report, config.output.as_deref(), config.pretty)
        .context("Failed to write report")?;
    Ok(())
}

/// Load, measure and compare; everything but output.
pub fn audit(config: &AuditConfig) -> Result<Report> {
    let font = load_sources(&config.sources).context("Failed to load font sources")?;

    let labels = match &config.labels {
        Some(path) => Some(
            StrokeLabels::load(path)
                .with_context(|| format!("Failed to load stroke labels from {}", path.display()))?,
        ),
        None => None,
    };

    info!("Reading side bearings for {}", config.weights.join(", "));
    let table = read_side_bearings(&font, &config.weights)?;
    Ok(report::build(&font, &table, labels.as_ref(), &config.report))
}

//! Resolved run configuration
//!
//! Every setting comes from, in priority order:
//! 1. CLI argument
//! 2. Config file setting (~/.config/spacing-audit/settings.json)
//! 3. Built-in default

use std::path::PathBuf;
use tracing::debug;

use super::cli::CliArgs;
use super::config_file::ConfigFile;
use crate::geometry::Direction;
use crate::report::ReportOptions;

/// Weights analyzed when neither the CLI nor the settings file names any
pub const DEFAULT_WEIGHTS: [&str; 3] = ["ExtraLight", "Regular", "Heavy"];

/// Everything one audit run needs, with no process-wide state behind it
#[derive(Debug, Clone, PartialEq)]
pub struct AuditConfig {
    pub sources: Vec<PathBuf>,
    pub weights: Vec<String>,
    pub labels: Option<PathBuf>,
    pub report: ReportOptions,
    pub output: Option<PathBuf>,
    pub pretty: bool,
}

impl AuditConfig {
    pub fn resolve(cli: &CliArgs, file: Option<&ConfigFile>) -> Self {
        let weights = match (&cli.weights, file.and_then(|f| f.weights.as_ref())) {
            (Some(weights), _) => {
                debug!("Using weights from CLI: {:?}", weights);
                weights.clone()
            }
            (None, Some(weights)) => {
                debug!("Using weights from config file: {:?}", weights);
                weights.clone()
            }
            (None, None) => DEFAULT_WEIGHTS.iter().map(|w| w.to_string()).collect(),
        };
        let weights = weights
            .into_iter()
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();

        let rank_directions = if !cli.rank.is_empty() {
            cli.rank.clone()
        } else {
            file.and_then(|f| f.rank_directions.clone())
                .unwrap_or_else(|| ReportOptions::default().rank_directions)
        };

        Self {
            sources: cli.sources.clone(),
            weights,
            labels: cli
                .labels
                .clone()
                .or_else(|| file.and_then(|f| f.labels.clone())),
            report: ReportOptions {
                all_ranges: cli.all_ranges || file.and_then(|f| f.all_ranges).unwrap_or(false),
                rank_directions,
            },
            output: cli.output.clone(),
            pretty: cli.pretty || file.and_then(|f| f.pretty).unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_settings() {
        let config = AuditConfig::resolve(&CliArgs::default(), None);
        assert_eq!(config.weights, vec!["ExtraLight", "Regular", "Heavy"]);
        assert_eq!(config.report.rank_directions, vec![Direction::Lsb]);
        assert!(!config.report.all_ranges);
        assert!(!config.pretty);
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let file = ConfigFile {
            weights: Some(vec!["Thin".into(), "Black".into()]),
            labels: Some(PathBuf::from("file-labels.json")),
            rank_directions: Some(vec![Direction::Bsb]),
            all_ranges: Some(true),
            pretty: None,
        };
        let cli = CliArgs {
            weights: Some(vec![" Light".into(), "".into(), "Bold ".into()]),
            rank: vec![Direction::Rsb],
            ..Default::default()
        };
        let config = AuditConfig::resolve(&cli, Some(&file));
        assert_eq!(config.weights, vec!["Light", "Bold"]);
        assert_eq!(config.report.rank_directions, vec![Direction::Rsb]);
        assert_eq!(config.labels, Some(PathBuf::from("file-labels.json")));
        assert!(config.report.all_ranges);
    }

    #[test]
    fn test_config_file_fills_gaps() {
        let file = ConfigFile {
            weights: Some(vec!["Thin".into()]),
            rank_directions: Some(vec![Direction::Tsb, Direction::Bsb]),
            ..Default::default()
        };
        let config = AuditConfig::resolve(&CliArgs::default(), Some(&file));
        assert_eq!(config.weights, vec!["Thin"]);
        assert_eq!(config.report.rank_directions, vec![Direction::Tsb, Direction::Bsb]);
    }
}

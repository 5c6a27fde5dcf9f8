//! Command line interface for spacing-audit
//!
//! Handles parsing command line arguments and provides validation for
//! user inputs before any font is loaded.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::geometry::Direction;

/// spacing-audit CLI arguments
///
/// Examples:
///   spacing-audit Family.designspace                     # Audit all masters
///   spacing-audit Light.ufo Regular.ufo Bold.ufo         # Audit loose UFOs
///   spacing-audit Family.designspace -w Light,Bold       # Pick weights
///   spacing-audit Family.designspace -l labels.json      # Add stroke sheets
///   spacing-audit Family.designspace -r lsb,rsb -o out.json --pretty
///   spacing-audit --new-config                           # Write settings.json
#[derive(Parser, Debug, Clone, Default)]
#[clap(
    name = "spacing-audit",
    version,
    about = "Audit side-bearing consistency across the weights of a font family",
    long_about = "spacing-audit measures the side bearings of every glyph in every weight of a font family, finds the outermost strokes that define them, and compares how glyphs rank by spacing from one weight to the next. The result is a JSON report."
)]
pub struct CliArgs {
    /// Font sources to audit
    ///
    /// Either a single .designspace file, or one or more UFO directories
    /// (one master each).
    #[clap(
        value_name = "SOURCE",
        help = "Font sources (one .designspace or several .ufo)",
        long_help = "Font sources to audit. Accepts a single .designspace file whose sources become the masters, or one or more UFO directories, each treated as one master named by its style name."
    )]
    pub sources: Vec<PathBuf>,

    /// Weights (master names) to analyze, comma separated
    #[clap(
        long = "weights",
        short = 'w',
        value_delimiter = ',',
        help = "Comma separated master names to analyze",
        long_help = "Comma separated master names to analyze, in the order used for ranking pairs. Defaults to the settings file, then ExtraLight,Regular,Heavy."
    )]
    pub weights: Option<Vec<String>>,

    /// Stroke label file
    #[clap(
        long = "labels",
        short = 'l',
        help = "JSON file of stroke labels per glyph",
        long_help = "JSON file mapping each glyph string to the directions (lsb, rsb, tsb, bsb) that have a stroke worth reporting. Each value is true/false or a label text. Glyphs missing from the file are listed in the report."
    )]
    pub labels: Option<PathBuf>,

    /// Directions to rank glyphs by
    #[clap(
        long = "rank",
        short = 'r',
        value_delimiter = ',',
        value_parser = parse_direction,
        help = "Directions to compute ranking scores for (default lsb)"
    )]
    pub rank: Vec<Direction>,

    /// Report ranges in all four directions, not only labeled ones
    #[clap(long = "all-ranges", help = "Report outermost ranges in every direction")]
    pub all_ranges: bool,

    /// Output file for the JSON report
    #[clap(long = "output", short = 'o', help = "Write the report here instead of stdout")]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON report
    #[clap(long = "pretty", help = "Pretty-print the JSON report")]
    pub pretty: bool,

    /// More log output (-v debug, -vv trace)
    #[clap(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Also log to a daily file in the config directory
    #[clap(
        long = "log-file",
        help = "Also write logs to the config directory",
        long_help = "Also write logs to a daily rolling file in the spacing-audit config directory (logs/)."
    )]
    pub log_file: bool,

    /// Initialize the user configuration directory
    #[clap(
        long = "new-config",
        help = "Write a settings.json with defaults and exit",
        long_help = "Create the spacing-audit config directory with a settings.json holding the default weights and ranking directions, then exit."
    )]
    pub new_config: bool,
}

fn parse_direction(value: &str) -> Result<Direction, String> {
    value.parse().map_err(|e: crate::error::AuditError| e.to_string())
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    ///
    /// This ensures that all paths exist and are valid before any work
    /// starts, with clear messages for common mistakes.
    pub fn validate(&self) -> Result<(), String> {
        if self.new_config {
            return Ok(());
        }
        if self.sources.is_empty() {
            return Err("No font source given.\nPass a .designspace file or one or more .ufo directories.".to_string());
        }

        for path in &self.sources {
            if !path.exists() {
                return Err(format!(
                    "Font source does not exist: {}\nMake sure the path is correct and the file exists.",
                    path.display()
                ));
            }

            if path.is_dir() {
                let meta_info = path.join("metainfo.plist");
                if !meta_info.exists() {
                    return Err(format!(
                        "Not a valid UFO directory: missing metainfo.plist in {}\nMake sure this is a valid UFO directory.",
                        path.display()
                    ));
                }
            } else if path.extension().and_then(|s| s.to_str()) == Some("designspace") {
                if self.sources.len() > 1 {
                    return Err(format!(
                        "A designspace must be the only source: {}\nIts masters are read from the document itself.",
                        path.display()
                    ));
                }
            } else {
                return Err(format!(
                    "Unsupported font source: {}\nExpected a .designspace file or a UFO directory.",
                    path.display()
                ));
            }
        }

        if let Some(labels) = &self.labels {
            if !labels.is_file() {
                return Err(format!("Label file does not exist: {}", labels.display()));
            }
        }

        if let Some(weights) = &self.weights {
            if weights.iter().all(|w| w.trim().is_empty()) {
                return Err("--weights needs at least one master name".to_string());
            }
        }

        Ok(())
    }
}

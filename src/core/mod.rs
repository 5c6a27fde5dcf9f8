//! Core application functionality
//!
//! This module contains the application shell around the analysis:
//! - CLI parsing and validation
//! - User settings file
//! - Resolved run configuration
//! - The runner and process-level error handling

pub mod cli;
pub mod config_file;
pub mod platform;
pub mod runner;
pub mod settings;

// Re-export commonly used items
pub use cli::CliArgs;
pub use config_file::ConfigFile;
pub use runner::{audit, run_app};
pub use settings::AuditConfig;

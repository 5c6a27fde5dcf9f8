use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or analyzing a font family.
///
/// Geometric absence (undrawn layers, glyphs without labels) is data,
/// not an error, and never shows up here.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AuditError {
    #[error("invalid direction '{0}' (expected one of lsb, rsb, tsb, bsb)")]
    InvalidDirection(String),

    #[error("unsupported font source: {}", .0.display())]
    UnsupportedSource(PathBuf),

    #[error("failed to load designspace {}: {message}", .path.display())]
    DesignSpace { path: PathBuf, message: String },

    #[error("none of the requested weights ({}) match a master", .0.join(", "))]
    NoMatchingWeights(Vec<String>),

    #[error("failed to parse stroke labels: {0}")]
    Labels(#[from] serde_json::Error),

    #[error("norad error: {0}")]
    Norad(#[from] norad::error::FontLoadError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

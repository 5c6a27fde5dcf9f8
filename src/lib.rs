//! spacing-audit
//!
//! Side-bearing and outermost-stroke analysis across the weight axis of a
//! font family.
//!
//! ```no_run
//! use spacing_audit::analysis::{dist_between_rankings, read_side_bearings};
//! use spacing_audit::font_source::load_font;
//! use spacing_audit::geometry::Direction;
//! use std::path::Path;
//!
//! let font = load_font(Path::new("Family.designspace"))?;
//! let weights = vec!["ExtraLight".to_string(), "Regular".to_string(), "Heavy".to_string()];
//! let table = read_side_bearings(&font, &weights)?;
//! for score in dist_between_rankings(&table, Direction::Lsb) {
//!     println!("{} / {}: {:?}", score.first, score.second, score.tau);
//! }
//! # Ok::<(), spacing_audit::AuditError>(())
//! ```

pub mod analysis;
pub mod core;
pub mod error;
pub mod font_source;
pub mod geometry;
pub mod logging;
pub mod report;
#[cfg(test)]
mod tests;

pub use error::AuditError;

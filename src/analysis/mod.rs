//! Spacing analysis over a loaded font
//!
//! - side bearings per glyph and weight
//! - stroke labels selecting which directions get range reports
//! - rank agreement of side bearings across weights

pub mod labels;
pub mod ranking;
pub mod side_bearings;

pub use labels::{LabelValue, StrokeLabels};
pub use ranking::{dist_between_rankings, kendall_tau, RankingDistance};
pub use side_bearings::{read_side_bearings, GlyphSideBearings, SideBearingTable, SideBearings};

//! Geometric primitives and the outermost-extent scanner

pub mod direction;
pub mod outermost;

// Re-export commonly used items
pub use direction::{compare_node_to_record, get_midpoint, Direction};
pub use outermost::{get_outermost_range, get_outermost_strokes, scan, OutermostRange, ScanResult, Stroke};

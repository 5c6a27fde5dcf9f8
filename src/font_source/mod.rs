//! Font source data structures and loading
//!
//! This module contains everything related to the font family being
//! audited: the owned outline model, per-master metrics, and the UFO /
//! designspace loader that builds them.

pub mod data;
pub mod metrics;
pub mod ufo;

// Explicit re-exports for public API
pub use data::{Font, Glyph, Layer, Master, Node, NodeKind, Path};
pub use metrics::MasterMetrics;
pub use ufo::load_font;

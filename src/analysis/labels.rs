//! Stroke labels
//!
//! A JSON lookup from glyph string to the directions worth reporting
//! stroke ranges for:
//!
//! ```json
//! { "A": { "lsb": "branch", "rsb": true, "tsb": false } }
//! ```
//!
//! A direction qualifies when its value is `true` or a non-empty string.

use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::AuditError;
use crate::geometry::Direction;

/// How many missing glyph names are spelled out in the warning
const MISSING_PREVIEW: usize = 10;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LabelValue {
    Flag(bool),
    Text(String),
}

impl LabelValue {
    pub fn qualifies(&self) -> bool {
        match self {
            LabelValue::Flag(flag) => *flag,
            LabelValue::Text(text) => !text.trim().is_empty(),
        }
    }

    /// Text shown next to the stroke, empty for plain flags
    pub fn text(&self) -> &str {
        match self {
            LabelValue::Flag(_) => "",
            LabelValue::Text(text) => text,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct StrokeLabels {
    glyphs: HashMap<String, BTreeMap<Direction, LabelValue>>,
}

impl StrokeLabels {
    pub fn load(path: &Path) -> Result<Self, AuditError> {
        let contents = fs::read_to_string(path)?;
        let labels = Self::from_json(&contents)?;
        debug!("Loaded stroke labels for {} glyphs from {:?}", labels.len(), path);
        Ok(labels)
    }

    pub fn from_json(contents: &str) -> Result<Self, AuditError> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn contains(&self, glyph: &str) -> bool {
        self.glyphs.contains_key(glyph)
    }

    /// The label for `glyph` in `direction`, if it qualifies
    pub fn label(&self, glyph: &str, direction: Direction) -> Option<&LabelValue> {
        self.glyphs
            .get(glyph)?
            .get(&direction)
            .filter(|value| value.qualifies())
    }

    /// Directions with a qualifying label for `glyph`, in report order
    pub fn directions(&self, glyph: &str) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|d| self.label(glyph, *d).is_some())
            .collect()
    }

    /// Glyphs from `glyphs` that have no entry at all, in input order
    pub fn missing<'a>(&self, glyphs: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        glyphs
            .into_iter()
            .filter(|g| !self.contains(g))
            .map(str::to_string)
            .collect()
    }
}

/// Surface glyphs skipped for lack of a label
pub fn warn_missing(missing: &[String]) {
    if missing.is_empty() {
        return;
    }
    let preview: Vec<&str> = missing.iter().take(MISSING_PREVIEW).map(String::as_str).collect();
    let more = missing.len().saturating_sub(preview.len());
    if more > 0 {
        warn!(
            "{} glyphs have no stroke label and were skipped: {} and {} more",
            missing.len(),
            preview.join(" "),
            more
        );
    } else {
        warn!(
            "{} glyphs have no stroke label and were skipped: {}",
            missing.len(),
            preview.join(" ")
        );
    }
}

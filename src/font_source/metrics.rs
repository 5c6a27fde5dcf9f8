//! Per-master vertical metrics
//!
//! Side bearings on the vertical axis are measured against the master's
//! baseline offset (the descender) and its full height.

use norad::FontInfo;
use std::collections::HashMap;

use super::data::{Font, Master};

/// Baseline offset and height of one master
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MasterMetrics {
    /// Offset of the bottom of the em box (the descender)
    pub baseline: f64,
    /// Ascender minus descender
    pub height: f64,
}

impl MasterMetrics {
    pub fn from_master(master: &Master) -> Self {
        Self {
            baseline: master.descender,
            height: master.ascender - master.descender,
        }
    }
}

/// Build the metrics table for the masters named in `weights`.
pub fn metrics_table(font: &Font, weights: &[String]) -> HashMap<String, MasterMetrics> {
    font.masters
        .iter()
        .filter(|m| weights.contains(&m.name))
        .map(|m| (m.name.clone(), MasterMetrics::from_master(m)))
        .collect()
}

/// Units per em from fontinfo, 1000 when missing
pub fn units_per_em(font_info: &FontInfo) -> f64 {
    font_info
        .units_per_em
        .map(|v| v.to_string().parse().unwrap_or(1000.0))
        .unwrap_or(1000.0)
}

/// Create a master from UFO fontinfo, using reasonable defaults based on
/// units per em when the vertical metrics are missing
pub fn master_from_font_info(name: impl Into<String>, font_info: &FontInfo) -> Master {
    let upm = units_per_em(font_info);
    Master {
        name: name.into(),
        ascender: font_info.ascender.unwrap_or(upm * 0.8),
        descender: font_info.descender.unwrap_or(-(upm * 0.2)),
    }
}

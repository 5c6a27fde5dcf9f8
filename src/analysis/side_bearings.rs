//! Side-bearing extraction
//!
//! Computes lsb/rsb/tsb/bsb for every glyph in every requested weight
//! from the layer's bounding box and its master's vertical metrics.

use kurbo::Rect;
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::error::AuditError;
use crate::font_source::metrics::{metrics_table, MasterMetrics};
use crate::font_source::Font;
use crate::geometry::Direction;

/// Spacing between a layer's ink and its metric boundaries
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SideBearings {
    pub lsb: f64,
    pub rsb: f64,
    pub tsb: f64,
    pub bsb: f64,
}

impl SideBearings {
    pub fn from_bounds(bounds: Rect, width: f64, metrics: MasterMetrics) -> Self {
        let lsb = bounds.x0;
        let rsb = width - lsb - bounds.width();
        let bsb = bounds.y0 - metrics.baseline;
        let tsb = metrics.height - bsb - bounds.height();
        Self { lsb, rsb, tsb, bsb }
    }

    pub fn get(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Lsb => self.lsb,
            Direction::Rsb => self.rsb,
            Direction::Tsb => self.tsb,
            Direction::Bsb => self.bsb,
        }
    }
}

/// Side bearings of one glyph, keyed by weight. Weights where the glyph
/// is not drawn have no entry.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphSideBearings {
    pub id: String,
    pub string: String,
    pub weights: HashMap<String, SideBearings>,
}

/// Side bearings for a whole font, weights in declared order and glyphs
/// in font order
#[derive(Clone, Debug, Default)]
pub struct SideBearingTable {
    weights: Vec<String>,
    glyphs: Vec<GlyphSideBearings>,
    index: HashMap<String, usize>,
}

impl SideBearingTable {
    pub fn new(weights: Vec<String>) -> Self {
        Self {
            weights,
            ..Default::default()
        }
    }

    /// Insert a glyph record. A record with the same string replaces the
    /// earlier one in place.
    pub fn insert(&mut self, record: GlyphSideBearings) {
        match self.index.get(&record.string) {
            Some(&i) => {
                warn!(
                    "Glyphs '{}' and '{}' share the string '{}', keeping the later one",
                    self.glyphs[i].id, record.id, record.string
                );
                self.glyphs[i] = record;
            }
            None => {
                self.index.insert(record.string.clone(), self.glyphs.len());
                self.glyphs.push(record);
            }
        }
    }

    pub fn weights(&self) -> &[String] {
        &self.weights
    }

    pub fn glyphs(&self) -> &[GlyphSideBearings] {
        &self.glyphs
    }

    pub fn glyph(&self, string: &str) -> Option<&GlyphSideBearings> {
        self.index.get(string).map(|&i| &self.glyphs[i])
    }

    pub fn get(&self, weight: &str, string: &str) -> Option<&SideBearings> {
        self.glyph(string)?.weights.get(weight)
    }

    /// Glyph strings drawn in every weight, in font order
    pub fn common_glyphs(&self) -> Vec<&str> {
        self.glyphs
            .iter()
            .filter(|g| self.weights.iter().all(|w| g.weights.contains_key(w)))
            .map(|g| g.string.as_str())
            .collect()
    }
}

/// Read the side bearings of every glyph for the masters named in `weights`.
pub fn read_side_bearings(font: &Font, weights: &[String]) -> Result<SideBearingTable, AuditError> {
    let metrics = metrics_table(font, weights);
    let present: Vec<String> = weights
        .iter()
        .filter(|w| {
            let found = metrics.contains_key(w.as_str());
            if !found {
                warn!("No master named '{}', skipping that weight", w);
            }
            found
        })
        .cloned()
        .collect();
    if present.is_empty() {
        return Err(AuditError::NoMatchingWeights(weights.to_vec()));
    }

    let mut table = SideBearingTable::new(present);
    for glyph in &font.glyphs {
        let mut record = GlyphSideBearings {
            id: glyph.id.clone(),
            string: glyph.string.clone(),
            weights: HashMap::new(),
        };
        for layer in &glyph.layers {
            let Some(&master) = metrics.get(&layer.master) else {
                continue;
            };
            let Some(bounds) = layer.bounds else {
                debug!("'{}' is not drawn in {}", glyph.string, layer.master);
                continue;
            };
            record.weights.insert(
                layer.master.clone(),
                SideBearings::from_bounds(bounds, layer.width, master),
            );
        }
        table.insert(record);
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font_source::{Glyph, Layer, Master, Node, Path};

    fn rect_layer(master: &str, width: f64, x: f64, y: f64, w: f64, h: f64) -> Layer {
        Layer::new(
            master,
            width,
            vec![Path::new(vec![
                Node::on_curve(x, y),
                Node::on_curve(x + w, y),
                Node::on_curve(x + w, y + h),
                Node::on_curve(x, y + h),
            ])],
        )
    }

    fn master(name: &str) -> Master {
        Master {
            name: name.into(),
            ascender: 750.0,
            descender: -50.0,
        }
    }

    fn weights(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_side_bearings_from_bounds() {
        let metrics = MasterMetrics::from_master(&master("Regular"));
        let sb = SideBearings::from_bounds(Rect::new(10.0, 20.0, 110.0, 220.0), 150.0, metrics);
        assert_eq!(sb, SideBearings { lsb: 10.0, rsb: 40.0, tsb: 530.0, bsb: 70.0 });
        // Ink width plus both side bearings is the advance
        assert_eq!(sb.lsb + 100.0 + sb.rsb, 150.0);
        assert_eq!(sb.get(Direction::Tsb), 530.0);
    }

    #[test]
    fn test_read_side_bearings() {
        let font = Font {
            masters: vec![master("Light"), master("Regular"), master("Bold")],
            glyphs: vec![
                Glyph {
                    id: "A".into(),
                    string: "A".into(),
                    layers: vec![
                        rect_layer("Light", 150.0, 10.0, 20.0, 100.0, 200.0),
                        rect_layer("Regular", 160.0, 12.0, 20.0, 110.0, 200.0),
                        rect_layer("Bold", 170.0, 14.0, 20.0, 120.0, 200.0),
                    ],
                },
                Glyph {
                    id: "B".into(),
                    string: "B".into(),
                    // Not drawn yet in Light
                    layers: vec![
                        Layer::new("Light", 500.0, vec![]),
                        rect_layer("Regular", 300.0, 30.0, 0.0, 200.0, 700.0),
                    ],
                },
            ],
        };

        let table = read_side_bearings(&font, &weights(&["Light", "Regular"])).unwrap();
        assert_eq!(table.weights(), ["Light", "Regular"]);
        assert_eq!(table.get("Light", "A").unwrap().rsb, 40.0);
        assert_eq!(table.get("Regular", "A").unwrap().lsb, 12.0);
        assert!(table.get("Bold", "A").is_none());
        assert!(table.get("Light", "B").is_none());
        assert_eq!(table.get("Regular", "B").unwrap().bsb, 50.0);
        assert_eq!(table.common_glyphs(), vec!["A"]);
        // Undrawn glyphs keep their record
        assert_eq!(table.glyphs().len(), 2);
    }

    #[test]
    fn test_unknown_weights_are_skipped() {
        let font = Font {
            masters: vec![master("Regular")],
            glyphs: vec![],
        };
        let table = read_side_bearings(&font, &weights(&["Thin", "Regular"])).unwrap();
        assert_eq!(table.weights(), ["Regular"]);

        let err = read_side_bearings(&font, &weights(&["Thin"])).unwrap_err();
        assert!(matches!(err, AuditError::NoMatchingWeights(_)));
    }

    #[test]
    fn test_duplicate_strings_replace_in_place() {
        let mut table = SideBearingTable::new(weights(&["Regular"]));
        for id in ["a", "b", "a.alt"] {
            table.insert(GlyphSideBearings {
                id: id.into(),
                string: if id == "b" { "b".into() } else { "a".into() },
                weights: HashMap::new(),
            });
        }
        let ids: Vec<&str> = table.glyphs().iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["a.alt", "b"]);
        assert_eq!(table.glyph("a").unwrap().id, "a.alt");
    }
}

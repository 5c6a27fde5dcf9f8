//! Outermost-extent scanner
//!
//! A single pass over a layer's on-curve nodes that finds the most
//! extreme coordinate in a direction and groups the nodes sitting on it
//! into strokes. A stroke is a maximal run of consecutive tying on-curve
//! nodes within one path; runs never continue across a path boundary.

use kurbo::Point;
use serde::Serialize;
use std::cmp::Ordering;

use super::direction::{compare_node_to_record, get_midpoint, Direction};
use crate::font_source::Layer;

/// One run of nodes lying on the outermost coordinate
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Stroke {
    pub start: Point,
    pub end: Point,
    /// Midpoint of the run along the cross axis
    pub midpoint: f64,
    /// (min, max) of the cross-axis coordinate over every node in the run
    pub range: (f64, f64),
}

/// Outcome of scanning one layer in one direction
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ScanResult {
    /// Outermost coordinate, 0 when the layer has no on-curve nodes
    pub record: f64,
    /// Strokes in discovery order
    pub strokes: Vec<Stroke>,
}

impl ScanResult {
    /// Stroke midpoints in discovery order
    pub fn midpoints(&self) -> Vec<f64> {
        self.strokes.iter().map(|s| s.midpoint).collect()
    }

    /// No on-curve node reached the boundary; not the same as zero width
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}

/// Cross-axis extent covered by the outermost strokes
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OutermostRange {
    pub min: f64,
    pub max: f64,
    pub strokes: Vec<Stroke>,
}

impl OutermostRange {
    pub fn pair(&self) -> (f64, f64) {
        (self.min, self.max)
    }
}

/// Stroke being grown while consecutive nodes tie the record
struct OpenStroke {
    start: Point,
    end: Point,
    min: f64,
    max: f64,
}

impl OpenStroke {
    fn begin(node: Point, direction: Direction) -> Self {
        let cross = direction.cross_coordinate(node);
        Self {
            start: node,
            end: node,
            min: cross,
            max: cross,
        }
    }

    fn extend(&mut self, node: Point, direction: Direction) {
        let cross = direction.cross_coordinate(node);
        self.end = node;
        self.min = self.min.min(cross);
        self.max = self.max.max(cross);
    }

    fn close(self, direction: Direction) -> Stroke {
        Stroke {
            start: self.start,
            end: self.end,
            midpoint: get_midpoint(self.start, self.end, direction),
            range: (self.min, self.max),
        }
    }
}

/// Find the outermost coordinate of `layer` in `direction` and the strokes
/// that reach it.
pub fn scan(layer: &Layer, direction: Direction) -> ScanResult {
    let mut record: Option<f64> = None;
    let mut strokes: Vec<Stroke> = Vec::new();
    let mut open: Option<OpenStroke> = None;

    for path in &layer.paths {
        for node in path.nodes.iter().filter(|n| n.is_on_curve()) {
            let point = node.position;
            let comparison = match record {
                // The first on-curve node always sets the record
                None => {
                    record = Some(direction.coordinate(point));
                    Ordering::Greater
                }
                Some(current) => {
                    let (comparison, updated) = compare_node_to_record(point, current, direction);
                    record = Some(updated);
                    comparison
                }
            };

            match comparison {
                Ordering::Less => {
                    if let Some(stroke) = open.take() {
                        strokes.push(stroke.close(direction));
                    }
                }
                Ordering::Greater => {
                    strokes.clear();
                    open = Some(OpenStroke::begin(point, direction));
                }
                Ordering::Equal => match open.as_mut() {
                    Some(stroke) => stroke.extend(point, direction),
                    None => open = Some(OpenStroke::begin(point, direction)),
                },
            }
        }

        if let Some(stroke) = open.take() {
            strokes.push(stroke.close(direction));
        }
    }

    ScanResult {
        record: record.unwrap_or(0.0),
        strokes,
    }
}

/// Cross-axis (min, max) over all outermost strokes, with the strokes
/// themselves. `None` when no on-curve node exists.
pub fn get_outermost_range(layer: &Layer, direction: Direction) -> Option<OutermostRange> {
    let result = scan(layer, direction);
    let (min, max) = result
        .strokes
        .iter()
        .map(|s| s.range)
        .reduce(|(lo, hi), (min, max)| (lo.min(min), hi.max(max)))?;
    Some(OutermostRange {
        min,
        max,
        strokes: result.strokes,
    })
}

/// Midpoints of the strokes touching the boundary
pub fn get_outermost_strokes(layer: &Layer, direction: Direction) -> Vec<f64> {
    scan(layer, direction).midpoints()
}

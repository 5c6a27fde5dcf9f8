//! Owned outline model for a multi-master font
//!
//! Glyphs own their layers, layers own their paths and nodes. Masters
//! are referenced by name and looked up on the [`Font`], so there are
//! no back-pointers anywhere in the tree.

use kurbo::{BezPath, Point, Rect, Shape};
use serde::{Deserialize, Serialize};

/// Node type, mirroring the UFO point types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// First point of an open contour
    Move,
    /// End of a straight segment
    Line,
    /// End of a cubic segment
    Curve,
    /// End of a quadratic segment
    QCurve,
    /// Control point
    OffCurve,
}

impl NodeKind {
    /// Check if this node sits on the outline (not a control point)
    pub fn is_on_curve(self) -> bool {
        !matches!(self, NodeKind::OffCurve)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    pub position: Point,
    pub kind: NodeKind,
}

impl Node {
    pub fn new(x: f64, y: f64, kind: NodeKind) -> Self {
        Self {
            position: Point::new(x, y),
            kind,
        }
    }

    /// An on-curve node ending a straight segment
    pub fn on_curve(x: f64, y: f64) -> Self {
        Self::new(x, y, NodeKind::Line)
    }

    pub fn off_curve(x: f64, y: f64) -> Self {
        Self::new(x, y, NodeKind::OffCurve)
    }

    pub fn is_on_curve(&self) -> bool {
        self.kind.is_on_curve()
    }
}

/// A closed contour in declared node order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    pub nodes: Vec<Node>,
}

impl Path {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Build the outline this path describes.
    ///
    /// The path is rotated to start at its first on-curve node so the
    /// closing segment is handled like any other. A contour made only of
    /// control points is read as a TrueType quadratic loop with implied
    /// on-curve midpoints.
    pub fn to_bezpath(&self) -> BezPath {
        let mut path = BezPath::new();
        let Some(&last) = self.nodes.last() else {
            return path;
        };

        let mut pending: Vec<Point> = Vec::new();
        match self.nodes.iter().position(Node::is_on_curve) {
            Some(start) => {
                let first = self.nodes[start];
                path.move_to(first.position);
                let rest = self.nodes[start + 1..].iter().chain(&self.nodes[..=start]);
                for node in rest {
                    if node.is_on_curve() {
                        push_segment(&mut path, &mut pending, node.kind, node.position);
                    } else {
                        pending.push(node.position);
                    }
                }
            }
            None => {
                let first = self.nodes[0].position;
                let implied = first.midpoint(last.position);
                path.move_to(implied);
                pending.extend(self.nodes.iter().map(|n| n.position));
                push_segment(&mut path, &mut pending, NodeKind::QCurve, implied);
            }
        }
        path.close_path();
        path
    }
}

/// Append the segment ending at `end`, consuming the pending control points.
fn push_segment(path: &mut BezPath, pending: &mut Vec<Point>, kind: NodeKind, end: Point) {
    match (kind, pending.as_slice()) {
        (_, []) => path.line_to(end),
        (_, [cp]) => path.quad_to(*cp, end),
        (NodeKind::Curve, [cp1, cp2]) => path.curve_to(*cp1, *cp2, end),
        (_, controls) => {
            for (i, cp) in controls.iter().enumerate() {
                let seg_end = match controls.get(i + 1) {
                    Some(next) => cp.midpoint(*next),
                    None => end,
                };
                path.quad_to(*cp, seg_end);
            }
        }
    }
    pending.clear();
}

/// One glyph's outline for one master
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    /// Name of the master (weight) this layer belongs to
    pub master: String,
    /// Advance width
    pub width: f64,
    /// Tight bounding box of the outline, `None` when nothing is drawn
    pub bounds: Option<Rect>,
    pub paths: Vec<Path>,
}

impl Layer {
    /// Create a layer, deriving its bounds from the paths
    pub fn new(master: impl Into<String>, width: f64, paths: Vec<Path>) -> Self {
        let bounds = outline_bounds(&paths);
        Self {
            master: master.into(),
            width,
            bounds,
            paths,
        }
    }

    /// On-curve node count across all paths
    pub fn on_curve_count(&self) -> usize {
        self.paths
            .iter()
            .flat_map(|p| p.nodes.iter())
            .filter(|n| n.is_on_curve())
            .count()
    }
}

/// Union of the bounding boxes of every path that draws something
pub fn outline_bounds(paths: &[Path]) -> Option<Rect> {
    paths
        .iter()
        .map(Path::to_bezpath)
        .filter(|bez| bez.segments().next().is_some())
        .map(|bez| bez.bounding_box())
        .reduce(|acc, rect| acc.union(rect))
}

#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
    /// Stable identifier (the glyph name)
    pub id: String,
    /// Display string: the first code point, or the glyph name
    pub string: String,
    /// One layer per master, in master order
    pub layers: Vec<Layer>,
}

impl Glyph {
    pub fn layer(&self, master: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.master == master)
    }
}

/// A named design variant and its vertical metrics
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Master {
    pub name: String,
    pub ascender: f64,
    pub descender: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Font {
    pub masters: Vec<Master>,
    pub glyphs: Vec<Glyph>,
}

impl Font {
    pub fn master(&self, name: &str) -> Option<&Master> {
        self.masters.iter().find(|m| m.name == name)
    }

    pub fn glyph(&self, string: &str) -> Option<&Glyph> {
        self.glyphs.iter().find(|g| g.string == string)
    }
}

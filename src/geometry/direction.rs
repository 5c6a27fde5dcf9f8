//! Scan directions and the comparison primitives built on them
//!
//! Every side bearing is measured along one axis with one sign. The
//! helpers here hide that so the scanner can stay direction-agnostic.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::AuditError;

/// One of the four side-bearing directions
///
/// ```text
///            Tsb (larger y)
///   Lsb (smaller x)   Rsb (larger x)
///            Bsb (smaller y)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Lsb,
    Rsb,
    Tsb,
    Bsb,
}

impl Direction {
    /// All directions in report order
    pub const ALL: [Direction; 4] = [Direction::Lsb, Direction::Rsb, Direction::Tsb, Direction::Bsb];

    /// True for lsb/rsb, which compare x coordinates
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Lsb | Direction::Rsb)
    }

    /// The coordinate compared when scanning in this direction
    pub fn coordinate(self, point: Point) -> f64 {
        if self.is_horizontal() {
            point.x
        } else {
            point.y
        }
    }

    /// The coordinate on the axis perpendicular to the scan
    pub fn cross_coordinate(self, point: Point) -> f64 {
        if self.is_horizontal() {
            point.y
        } else {
            point.x
        }
    }

    /// Compare two scanned coordinates. `Greater` means `value` lies
    /// further out than `other` in this direction.
    pub fn extremity(self, value: f64, other: f64) -> Ordering {
        // NaN never ties and never improves
        let Some(ordering) = value.partial_cmp(&other) else {
            return Ordering::Less;
        };
        match self {
            Direction::Rsb | Direction::Tsb => ordering,
            Direction::Lsb | Direction::Bsb => ordering.reverse(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Lsb => "lsb",
            Direction::Rsb => "rsb",
            Direction::Tsb => "tsb",
            Direction::Bsb => "bsb",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = AuditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lsb" => Ok(Direction::Lsb),
            "rsb" => Ok(Direction::Rsb),
            "tsb" => Ok(Direction::Tsb),
            "bsb" => Ok(Direction::Bsb),
            _ => Err(AuditError::InvalidDirection(s.to_string())),
        }
    }
}

/// Compare a node against the current record in `direction`.
///
/// Returns `Greater` with the node's coordinate as the new record when the
/// node is strictly more extreme, `Equal` on an exact tie and `Less`
/// otherwise (record unchanged). Equality is exact; font coordinates are
/// integers or fixed precision.
pub fn compare_node_to_record(node: Point, record: f64, direction: Direction) -> (Ordering, f64) {
    let value = direction.coordinate(node);
    match direction.extremity(value, record) {
        Ordering::Greater => (Ordering::Greater, value),
        other => (other, record),
    }
}

/// Midpoint of a stroke along the axis perpendicular to `direction`.
pub fn get_midpoint(start: Point, end: Point, direction: Direction) -> f64 {
    (direction.cross_coordinate(start) + direction.cross_coordinate(end)) / 2.0
}

//! Document model: tablets, their parts, and split lines.
//!
//! A `Tablet` is created by one drawing gesture and owns one or more
//! `TabletPart`s. Parts are the unit of movement and the unit the split engine
//! cuts. A `SplitLine` is a single infinite horizontal or vertical line; its
//! coordinate lives in the variant, so a vertical line always carries `x` and
//! a horizontal line always carries `y`.
//!
//! All coordinates are canvas-local with the origin at the top-left and may be
//! negative after a part has been dragged off the origin.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::CORNER_RADIUS_RATIO;

/// Unique identifier for a tablet.
pub type TabletId = String;

/// Unique identifier for a part. Split children extend their parent's id.
pub type PartId = String;

/// A point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A rectangular sub-region of a tablet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabletPart {
    /// Unique identifier for this part.
    pub id: PartId,
    /// The tablet this part belongs to. Used for lookup only.
    pub tablet_id: TabletId,
    /// Left edge in canvas coordinates.
    pub x: f64,
    /// Top edge in canvas coordinates.
    pub y: f64,
    /// Current width; always positive.
    pub width: f64,
    /// Current height; always positive.
    pub height: f64,
    /// Fill colour as a CSS colour string.
    pub color: String,
    /// Width of the tablet when it was drawn. Never changes.
    pub original_width: f64,
    /// Height of the tablet when it was drawn. Never changes.
    pub original_height: f64,
}

impl TabletPart {
    /// Right edge (`x + width`).
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Whether `pt` lies inside the part. Left/top edges are inclusive,
    /// right/bottom edges exclusive, so adjacent split halves never both match.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x < self.right() && pt.y >= self.y && pt.y < self.bottom()
    }

    /// Cosmetic corner radius, derived from the original size so split
    /// children keep the rounding of the tablet they came from.
    #[must_use]
    pub fn corner_radius(&self) -> f64 {
        self.original_width.min(self.original_height) * CORNER_RADIUS_RATIO
    }
}

/// A top-level rectangle composed of one or more parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tablet {
    /// Unique identifier for this tablet.
    pub id: TabletId,
    /// Fill colour shared by every part.
    pub color: String,
    /// Width at the moment the tablet was committed.
    pub original_width: f64,
    /// Height at the moment the tablet was committed.
    pub original_height: f64,
    /// Parts in creation order. Never empty.
    pub parts: Vec<TabletPart>,
}

impl Tablet {
    /// Build a freshly committed tablet whose single part covers the whole
    /// rectangle. The part id is `{id}-part-0`.
    #[must_use]
    pub fn with_single_part(id: TabletId, color: String, x: f64, y: f64, width: f64, height: f64) -> Self {
        let part = TabletPart {
            id: format!("{id}-part-0"),
            tablet_id: id.clone(),
            x,
            y,
            width,
            height,
            color: color.clone(),
            original_width: width,
            original_height: height,
        };
        Self { id, color, original_width: width, original_height: height, parts: vec![part] }
    }

    /// Look up a part by id.
    #[must_use]
    pub fn part(&self, id: &str) -> Option<&TabletPart> {
        self.parts.iter().find(|p| p.id == id)
    }

    /// Look up a part by id for mutation.
    pub fn part_mut(&mut self, id: &str) -> Option<&mut TabletPart> {
        self.parts.iter_mut().find(|p| p.id == id)
    }
}

/// Direction of a split line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Line runs top to bottom at a fixed `x`.
    #[default]
    Vertical,
    /// Line runs left to right at a fixed `y`.
    Horizontal,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertical => f.write_str("vertical"),
            Self::Horizontal => f.write_str("horizontal"),
        }
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vertical" => Ok(Self::Vertical),
            "horizontal" => Ok(Self::Horizontal),
            other => Err(format!("unknown orientation: {other}")),
        }
    }
}

/// A single infinite line used once to partition every part it crosses.
///
/// Serialised as `{"type":"vertical","x":50.0}` or `{"type":"horizontal","y":12.0}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SplitLine {
    /// Cuts parts into `-top` and `-bottom` halves at `y`.
    Horizontal { y: f64 },
    /// Cuts parts into `-left` and `-right` halves at `x`.
    Vertical { x: f64 },
}

impl SplitLine {
    #[must_use]
    pub fn vertical(x: f64) -> Self {
        Self::Vertical { x }
    }

    #[must_use]
    pub fn horizontal(y: f64) -> Self {
        Self::Horizontal { y }
    }

    /// Build the line a tap at `pt` produces for the given orientation.
    #[must_use]
    pub fn through(orientation: Orientation, pt: Point) -> Self {
        match orientation {
            Orientation::Vertical => Self::Vertical { x: pt.x },
            Orientation::Horizontal => Self::Horizontal { y: pt.y },
        }
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        match self {
            Self::Vertical { .. } => Orientation::Vertical,
            Self::Horizontal { .. } => Orientation::Horizontal,
        }
    }

    /// The line's single coordinate (`x` for vertical, `y` for horizontal).
    #[must_use]
    pub fn position(&self) -> f64 {
        match *self {
            Self::Vertical { x } => x,
            Self::Horizontal { y } => y,
        }
    }
}

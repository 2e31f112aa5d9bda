#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::doc::{PartId, Point, Tablet, TabletId};

/// Result of a hit test.
#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    pub tablet_id: TabletId,
    pub part_id: PartId,
    /// Top-left of the hit part at the time of the test.
    pub origin: Point,
}

/// Find the part under `pt`. Later tablets and later parts are drawn on top,
/// so the search runs back to front.
#[must_use]
pub fn hit_test(tablets: &[Tablet], pt: Point) -> Option<Hit> {
    tablets.iter().rev().find_map(|tablet| {
        tablet.parts.iter().rev().find(|p| p.contains(pt)).map(|part| Hit {
            tablet_id: tablet.id.clone(),
            part_id: part.id.clone(),
            origin: Point::new(part.x, part.y),
        })
    })
}

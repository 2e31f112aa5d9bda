//! Read-only scene snapshot for the host renderer.
//!
//! The renderer never sees the store. It receives a `Scene` built from a
//! `TabletState`: every part as a rounded rectangle, the draft rectangle while
//! a drag is large enough to show, and the split line overlay.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use serde::Serialize;

use crate::consts::DRAFT_OPACITY;
use crate::doc::{PartId, SplitLine, TabletId};
use crate::draw::meets_min_size;
use crate::store::TabletState;

/// One part, ready to paint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartShape {
    pub tablet_id: TabletId,
    pub part_id: PartId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
    pub corner_radius: f64,
}

/// The translucent rectangle shown while a tablet is being drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DraftShape {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
    pub opacity: f64,
}

/// Everything visible on the canvas at one instant.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scene {
    /// Parts in paint order, bottom first.
    pub parts: Vec<PartShape>,
    pub draft: Option<DraftShape>,
    pub split_line: Option<SplitLine>,
}

impl Scene {
    #[must_use]
    pub fn from_state(state: &TabletState) -> Self {
        let parts = state
            .tablets
            .iter()
            .flat_map(|tablet| tablet.parts.iter())
            .map(|part| PartShape {
                tablet_id: part.tablet_id.clone(),
                part_id: part.id.clone(),
                x: part.x,
                y: part.y,
                width: part.width,
                height: part.height,
                color: part.color.clone(),
                corner_radius: part.corner_radius(),
            })
            .collect();

        let draft = state
            .current_tablet()
            .filter(|c| meets_min_size(c.original_width, c.original_height))
            .map(|c| DraftShape {
                x: c.x,
                y: c.y,
                width: c.original_width,
                height: c.original_height,
                color: c.color.clone(),
                opacity: DRAFT_OPACITY,
            });

        Self { parts, draft, split_line: state.split_line }
    }

    /// Serialise the scene for a host that paints from JSON.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Implemented by the host to paint a scene.
pub trait Renderer {
    fn render(&mut self, scene: &Scene);
}

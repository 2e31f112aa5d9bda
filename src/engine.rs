//! Gesture engine: turns pointer and tap events into store transitions.
//!
//! The host forwards canvas-local pointer events. A pointer-down on a part
//! starts a part drag; anywhere else it starts drawing a tablet. Taps drop a
//! split line and ask the host to schedule the split via
//! [`Action::ScheduleSplit`], which carries the line captured at tap time.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use tracing::debug;

use crate::color::ColorPicker;
use crate::config::Config;
use crate::doc::{Orientation, PartId, Point, SplitLine, TabletId};
use crate::draw::DragRect;
use crate::hit::hit_test;
use crate::render::Scene;
use crate::store::{Effect, SharedStore, Transition};

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A drag committed a new tablet.
    TabletCreated(TabletId),
    /// A drag ended without producing a tablet.
    DrawDiscarded,
    /// A part is being dragged; paint it at `(x, y)` until the drag ends.
    PartDragPreview { tablet_id: TabletId, part_id: PartId, x: f64, y: f64 },
    /// A part drag ended and the part now sits at its new position.
    PartMoved { tablet_id: TabletId, part_id: PartId },
    /// Split with this line once the configured delay has elapsed.
    ScheduleSplit(SplitLine),
    /// The scene changed and should be repainted.
    RenderNeeded,
}

/// The gesture currently being tracked between pointer-down and pointer-up.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// The user is dragging out a new tablet.
    Drawing {
        /// Where the drag started.
        anchor: Point,
    },
    /// The user is moving an existing part.
    DraggingPart {
        tablet_id: TabletId,
        part_id: PartId,
        /// Pointer position at pointer-down.
        grab: Point,
        /// Part top-left at pointer-down.
        origin: Point,
    },
}

pub struct Engine {
    store: SharedStore,
    input: InputState,
    colors: ColorPicker,
    split_orientation: Orientation,
}

impl Engine {
    #[must_use]
    pub fn new(store: SharedStore, config: &Config) -> Self {
        Self::with_colors(store, config, ColorPicker::new())
    }

    #[must_use]
    pub fn with_colors(store: SharedStore, config: &Config, colors: ColorPicker) -> Self {
        Self { store, input: InputState::Idle, colors, split_orientation: config.split_orientation }
    }

    /// The store this engine dispatches to.
    #[must_use]
    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Snapshot of what should be on screen now.
    #[must_use]
    pub fn scene(&self) -> Scene {
        self.store.with(|store| Scene::from_state(store.state()))
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        // A missed pointer-up leaves the previous draft open.
        if let InputState::Drawing { .. } = std::mem::take(&mut self.input) {
            debug!("abandoning unfinished draw");
            self.store.dispatch(Transition::CancelDrawing);
        }

        let hit = self.store.with(|store| hit_test(&store.state().tablets, pt));
        if let Some(hit) = hit {
            debug!(tablet_id = %hit.tablet_id, part_id = %hit.part_id, "part drag started");
            self.input = InputState::DraggingPart {
                tablet_id: hit.tablet_id,
                part_id: hit.part_id,
                grab: pt,
                origin: hit.origin,
            };
            return Vec::new();
        }

        let color = self.colors.next_color();
        self.store.dispatch(Transition::StartDrawing { x: pt.x, y: pt.y, color });
        self.input = InputState::Drawing { anchor: pt };
        Vec::new()
    }

    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        match &self.input {
            InputState::Idle => Vec::new(),
            InputState::Drawing { anchor } => {
                let rect = DragRect::between(*anchor, pt);
                if !rect.meets_min_size() {
                    return Vec::new();
                }
                let effect = self.store.dispatch(Transition::UpdateDrawing {
                    x: rect.x,
                    y: rect.y,
                    width: rect.width,
                    height: rect.height,
                });
                if effect == Effect::DrawUpdated { vec![Action::RenderNeeded] } else { Vec::new() }
            }
            InputState::DraggingPart { tablet_id, part_id, grab, origin } => {
                let to = dragged_to(*origin, *grab, pt);
                vec![Action::PartDragPreview {
                    tablet_id: tablet_id.clone(),
                    part_id: part_id.clone(),
                    x: to.x,
                    y: to.y,
                }]
            }
        }
    }

    pub fn on_pointer_up(&mut self, pt: Point) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Idle => Vec::new(),
            InputState::Drawing { anchor } => {
                // Commit where the draft was last shown, not where the pointer ended up.
                let effect = self.store.with(|store| {
                    let at = store.state().current_tablet().map_or(anchor, |draft| Point::new(draft.x, draft.y));
                    store.dispatch(Transition::FinishDrawing { x: at.x, y: at.y })
                });
                match effect {
                    Effect::TabletCreated(id) => vec![Action::TabletCreated(id), Action::RenderNeeded],
                    _ => vec![Action::DrawDiscarded, Action::RenderNeeded],
                }
            }
            InputState::DraggingPart { tablet_id, part_id, grab, origin } => {
                let to = dragged_to(origin, grab, pt);
                let effect = self.store.dispatch(Transition::MovePart { tablet_id, part_id, x: to.x, y: to.y });
                match effect {
                    Effect::PartMoved { tablet_id, part_id } => {
                        vec![Action::PartMoved { tablet_id, part_id }, Action::RenderNeeded]
                    }
                    _ => vec![Action::RenderNeeded],
                }
            }
        }
    }

    /// The platform aborted the gesture. Draws are discarded and part drags
    /// snap back without a move.
    pub fn on_pointer_cancel(&mut self) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Idle => Vec::new(),
            InputState::Drawing { .. } => {
                self.store.dispatch(Transition::CancelDrawing);
                vec![Action::DrawDiscarded, Action::RenderNeeded]
            }
            InputState::DraggingPart { .. } => vec![Action::RenderNeeded],
        }
    }

    /// Drop a split line through `pt` and request the delayed split.
    pub fn on_tap(&mut self, pt: Point) -> Vec<Action> {
        let line = SplitLine::through(self.split_orientation, pt);
        self.store.dispatch(Transition::SetSplitLine(Some(line)));
        vec![Action::RenderNeeded, Action::ScheduleSplit(line)]
    }
}

fn dragged_to(origin: Point, grab: Point, pointer: Point) -> Point {
    Point::new(origin.x + (pointer.x - grab.x), origin.y + (pointer.y - grab.y))
}

//! Draw session: the state machine between a drag's start and its end.
//!
//! `DrawSession::Idle` has no draft. `start` moves to `Drawing` with a
//! zero-sized draft anchored at the pointer. `update` resizes the draft but
//! only once it clears the `MIN_TABLET_WIDTH` x `MIN_TABLET_HEIGHT` gate, so a
//! partial-size tablet is never visible. `commit` and `cancel` always return
//! to `Idle`; `commit` hands back a `FinishedDraw` only when the draft passed
//! the gate.

#[cfg(test)]
#[path = "draw_test.rs"]
mod draw_test;

use tracing::debug;

use crate::consts::{MIN_TABLET_HEIGHT, MIN_TABLET_WIDTH};
use crate::doc::Point;

/// Whether a rectangle is large enough to be shown and committed.
#[must_use]
pub fn meets_min_size(width: f64, height: f64) -> bool {
    width >= MIN_TABLET_WIDTH && height >= MIN_TABLET_HEIGHT
}

/// A drag rectangle normalised to a top-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DragRect {
    /// The rectangle spanned by a drag from `anchor` to `pointer`, in any direction.
    #[must_use]
    pub fn between(anchor: Point, pointer: Point) -> Self {
        Self {
            x: anchor.x.min(pointer.x),
            y: anchor.y.min(pointer.y),
            width: (pointer.x - anchor.x).abs(),
            height: (pointer.y - anchor.y).abs(),
        }
    }

    #[must_use]
    pub fn meets_min_size(&self) -> bool {
        meets_min_size(self.width, self.height)
    }
}

/// The tablet being drawn. It has no id until it is committed.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentTablet {
    /// Colour picked when the drag started.
    pub color: String,
    /// Where the drag started.
    pub start_x: f64,
    /// Where the drag started.
    pub start_y: f64,
    /// Top-left of the last accepted update.
    pub x: f64,
    /// Top-left of the last accepted update.
    pub y: f64,
    /// Width of the last accepted update; zero until one is accepted.
    pub original_width: f64,
    /// Height of the last accepted update; zero until one is accepted.
    pub original_height: f64,
}

/// Geometry of a draft that passed the size gate on commit.
#[derive(Debug, Clone, PartialEq)]
pub struct FinishedDraw {
    pub color: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// The draw session state machine.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DrawSession {
    /// No drag in progress.
    #[default]
    Idle,
    /// A drag is in progress.
    Drawing(CurrentTablet),
}

impl DrawSession {
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing(_))
    }

    /// The draft being drawn, if any.
    #[must_use]
    pub fn current(&self) -> Option<&CurrentTablet> {
        match self {
            Self::Idle => None,
            Self::Drawing(current) => Some(current),
        }
    }

    /// Begin a drag at `(x, y)`. An active drag is replaced, not queued.
    pub fn start(&mut self, x: f64, y: f64, color: String) {
        if self.is_drawing() {
            debug!(x, y, "draw restarted over an active session");
        }
        *self = Self::Drawing(CurrentTablet {
            color,
            start_x: x,
            start_y: y,
            x,
            y,
            original_width: 0.0,
            original_height: 0.0,
        });
    }

    /// Resize the draft. Returns `false` when idle or when the size is below
    /// the gate; neither case changes anything.
    pub fn update(&mut self, x: f64, y: f64, width: f64, height: f64) -> bool {
        let Self::Drawing(current) = self else {
            return false;
        };
        if !meets_min_size(width, height) {
            return false;
        }
        current.x = x;
        current.y = y;
        current.original_width = width;
        current.original_height = height;
        true
    }

    /// End the drag with the finishing position `(x, y)`.
    ///
    /// Always returns the session to `Idle`. Yields the finished geometry only
    /// when the draft is at least `MIN_TABLET_WIDTH` x `MIN_TABLET_HEIGHT`.
    pub fn commit(&mut self, x: f64, y: f64) -> Option<FinishedDraw> {
        let Self::Drawing(current) = std::mem::take(self) else {
            return None;
        };
        if !meets_min_size(current.original_width, current.original_height) {
            debug!(
                width = current.original_width,
                height = current.original_height,
                "draw discarded below minimum size"
            );
            return None;
        }
        Some(FinishedDraw {
            color: current.color,
            x,
            y,
            width: current.original_width,
            height: current.original_height,
        })
    }

    /// Abandon the drag. Same as a commit that fails the size gate.
    pub fn cancel(&mut self) {
        if self.is_drawing() {
            debug!("draw cancelled");
        }
        *self = Self::Idle;
    }
}

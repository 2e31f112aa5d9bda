//! Store: the single state value and the transitions that mutate it.
//!
//! DESIGN
//! ======
//! `TabletState` holds the committed tablets, the draw session and the active
//! split line. `Transition` lists the only ways to change it, and
//! `Store::dispatch` applies one at a time in delivery order. There is exactly
//! one draw session and one pending split line; nothing is global.
//!
//! `SharedStore` puts the `Store` behind a mutex so the gesture engine and the
//! delayed split can both reach it. Every transition runs under a single lock
//! acquisition, so a reader never observes a half-applied split or move.
//!
//! Tablet ids come from an `IdSource` owned by the store. The default mints
//! UUID v4 strings; `SequentialIds` gives predictable ids for hosts that want
//! them.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, info};
use uuid::Uuid;

use crate::doc::{PartId, SplitLine, Tablet, TabletId};
use crate::draw::{CurrentTablet, DrawSession};
use crate::mover::move_part;
use crate::split::split_tablets;

// =============================================================================
// IDS
// =============================================================================

/// Mints tablet ids. Each call must return an id not returned before.
pub trait IdSource: Send {
    fn next_tablet_id(&mut self) -> TabletId;
}

/// Random UUID v4 ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_tablet_id(&mut self) -> TabletId {
        Uuid::new_v4().to_string()
    }
}

/// Monotonic `tablet-1`, `tablet-2`, ... ids.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    issued: u64,
}

impl IdSource for SequentialIds {
    fn next_tablet_id(&mut self) -> TabletId {
        self.issued += 1;
        format!("tablet-{}", self.issued)
    }
}

// =============================================================================
// STATE
// =============================================================================

/// Everything a renderer needs to paint the canvas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabletState {
    /// Committed tablets in creation order.
    pub tablets: Vec<Tablet>,
    /// The in-progress drag, if any.
    pub draw: DrawSession,
    /// The line shown before a split fires.
    pub split_line: Option<SplitLine>,
}

impl TabletState {
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.draw.is_drawing()
    }

    #[must_use]
    pub fn current_tablet(&self) -> Option<&CurrentTablet> {
        self.draw.current()
    }

    #[must_use]
    pub fn tablet(&self, id: &str) -> Option<&Tablet> {
        self.tablets.iter().find(|t| t.id == id)
    }

    /// Total number of parts across all tablets.
    #[must_use]
    pub fn part_count(&self) -> usize {
        self.tablets.iter().map(|t| t.parts.len()).sum()
    }
}

// =============================================================================
// TRANSITIONS
// =============================================================================

/// The named mutations the store accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    StartDrawing { x: f64, y: f64, color: String },
    UpdateDrawing { x: f64, y: f64, width: f64, height: f64 },
    FinishDrawing { x: f64, y: f64 },
    CancelDrawing,
    MovePart { tablet_id: TabletId, part_id: PartId, x: f64, y: f64 },
    SetSplitLine(Option<SplitLine>),
    SplitTablets(SplitLine),
}

/// What a transition changed.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// The transition had no visible effect.
    Ignored,
    DrawStarted,
    DrawUpdated,
    /// A drag ended without producing a tablet.
    DrawDiscarded,
    TabletCreated(TabletId),
    PartMoved { tablet_id: TabletId, part_id: PartId },
    SplitLineSet(Option<SplitLine>),
    /// A split ran; counts are parts before and after.
    SplitApplied { parts_before: usize, parts_after: usize },
}

// =============================================================================
// STORE
// =============================================================================

/// Owns the state and applies transitions to it.
pub struct Store {
    state: TabletState,
    ids: Box<dyn IdSource>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// An empty store minting UUID ids.
    #[must_use]
    pub fn new() -> Self {
        Self::with_ids(UuidIds)
    }

    /// An empty store using `ids` to mint tablet ids.
    #[must_use]
    pub fn with_ids(ids: impl IdSource + 'static) -> Self {
        Self { state: TabletState::default(), ids: Box::new(ids) }
    }

    /// Read-only view of the current state.
    #[must_use]
    pub fn state(&self) -> &TabletState {
        &self.state
    }

    /// Apply one transition.
    pub fn dispatch(&mut self, transition: Transition) -> Effect {
        match transition {
            Transition::StartDrawing { x, y, color } => self.start_drawing(x, y, color),
            Transition::UpdateDrawing { x, y, width, height } => self.update_drawing(x, y, width, height),
            Transition::FinishDrawing { x, y } => self.finish_drawing(x, y),
            Transition::CancelDrawing => self.cancel_drawing(),
            Transition::MovePart { tablet_id, part_id, x, y } => self.move_part(&tablet_id, &part_id, x, y),
            Transition::SetSplitLine(line) => self.set_split_line(line),
            Transition::SplitTablets(line) => self.split_tablets(line),
        }
    }

    pub fn start_drawing(&mut self, x: f64, y: f64, color: String) -> Effect {
        debug!(x, y, %color, "draw started");
        self.state.draw.start(x, y, color);
        Effect::DrawStarted
    }

    pub fn update_drawing(&mut self, x: f64, y: f64, width: f64, height: f64) -> Effect {
        if self.state.draw.update(x, y, width, height) { Effect::DrawUpdated } else { Effect::Ignored }
    }

    /// Commit the draft at `(x, y)` if it meets the minimum size.
    pub fn finish_drawing(&mut self, x: f64, y: f64) -> Effect {
        if !self.state.draw.is_drawing() {
            return Effect::Ignored;
        }
        let Some(finished) = self.state.draw.commit(x, y) else {
            return Effect::DrawDiscarded;
        };
        let id = self.ids.next_tablet_id();
        let tablet = Tablet::with_single_part(
            id.clone(),
            finished.color,
            finished.x,
            finished.y,
            finished.width,
            finished.height,
        );
        info!(tablet_id = %id, x, y, width = finished.width, height = finished.height, "tablet created");
        self.state.tablets.push(tablet);
        Effect::TabletCreated(id)
    }

    pub fn cancel_drawing(&mut self) -> Effect {
        if !self.state.draw.is_drawing() {
            return Effect::Ignored;
        }
        self.state.draw.cancel();
        Effect::DrawDiscarded
    }

    pub fn move_part(&mut self, tablet_id: &str, part_id: &str, x: f64, y: f64) -> Effect {
        if move_part(&mut self.state.tablets, tablet_id, part_id, x, y) {
            Effect::PartMoved { tablet_id: tablet_id.to_owned(), part_id: part_id.to_owned() }
        } else {
            debug!(%tablet_id, %part_id, "move target not found");
            Effect::Ignored
        }
    }

    pub fn set_split_line(&mut self, line: Option<SplitLine>) -> Effect {
        self.state.split_line = line;
        Effect::SplitLineSet(line)
    }

    /// Split every tablet against `line`, then clear the active split line.
    pub fn split_tablets(&mut self, line: SplitLine) -> Effect {
        let parts_before = self.state.part_count();
        let (tablets, summary) = split_tablets(&self.state.tablets, line);
        self.state.tablets = tablets;
        self.state.split_line = None;
        let parts_after = self.state.part_count();
        info!(
            orientation = %line.orientation(),
            position = line.position(),
            split = summary.split,
            absorbed = summary.absorbed,
            untouched = summary.untouched,
            "split applied"
        );
        Effect::SplitApplied { parts_before, parts_after }
    }
}

// =============================================================================
// SHARED STORE
// =============================================================================

/// Cloneable handle to a `Store` shared between the gesture engine and timers.
#[derive(Clone, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<Store>>,
}

impl SharedStore {
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self { inner: Arc::new(Mutex::new(store)) }
    }

    /// Run `f` with exclusive access to the store.
    ///
    /// A poisoned lock is recovered with its inner value.
    pub fn with<R>(&self, f: impl FnOnce(&mut Store) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Apply one transition atomically.
    pub fn dispatch(&self, transition: Transition) -> Effect {
        self.with(|store| store.dispatch(transition))
    }

    /// Copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> TabletState {
        self.with(|store| store.state().clone())
    }
}

//! Tablet drawing and splitting core.
//!
//! A user drags out rectangular "tablets" on a 2D canvas, then taps to drop a
//! split line that partitions every part of every tablet it crosses. Parts can
//! afterwards be dragged independently. This crate owns the data model, the
//! draw-to-commit state machine, the split engine and the part mutator, plus
//! the thin adapters a host needs around them: a gesture engine that turns
//! pointer events into store transitions, a delayed split scheduler, and a
//! read-only scene snapshot for painting. Platform event wiring and the actual
//! drawing stay in the host.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`doc`] | Tablets, parts, split lines and points |
//! | [`draw`] | Draw session state machine (`Idle` / `Drawing`) |
//! | [`split`] | Pure split engine with sliver absorption |
//! | [`mover`] | Moves a single part by tablet/part id |
//! | [`store`] | State, transitions, id minting and the shared store handle |
//! | [`hit`] | Finds the top-most part under a point |
//! | [`engine`] | Gesture adapter returning [`engine::Action`]s for the host |
//! | [`scheduler`] | Fires a captured split line after a short delay |
//! | [`render`] | Scene snapshot and the [`render::Renderer`] seam |
//! | [`color`] | Random tablet colours |
//! | [`config`] | Environment-driven configuration |
//! | [`logging`] | Tracing subscriber bootstrap |
//! | [`consts`] | Size gates, split floors and other policy constants |

pub mod color;
pub mod config;
pub mod consts;
pub mod doc;
pub mod draw;
pub mod engine;
pub mod hit;
pub mod logging;
pub mod mover;
pub mod render;
pub mod scheduler;
pub mod split;
pub mod store;

pub use config::{Config, ConfigError};
pub use doc::{Orientation, PartId, Point, SplitLine, Tablet, TabletId, TabletPart};
pub use draw::{CurrentTablet, DragRect, DrawSession, FinishedDraw};
pub use engine::{Action, Engine};
pub use render::{Renderer, Scene};
pub use scheduler::SplitScheduler;
pub use store::{Effect, SharedStore, Store, TabletState, Transition};

//! Shared numeric constants for the tablet core.

// ── Drawing ─────────────────────────────────────────────────────

/// Minimum width a drag must reach before it is shown or committed.
pub const MIN_TABLET_WIDTH: f64 = 40.0;

/// Minimum height a drag must reach before it is shown or committed.
pub const MIN_TABLET_HEIGHT: f64 = 20.0;

/// Opacity of the in-progress draft rectangle.
pub const DRAFT_OPACITY: f64 = 0.7;

// ── Splitting ───────────────────────────────────────────────────

/// Narrowest side a vertical split may leave; anything thinner is a sliver.
pub const MIN_SPLIT_WIDTH: f64 = 20.0;

/// Shortest side a horizontal split may leave; anything shorter is a sliver.
pub const MIN_SPLIT_HEIGHT: f64 = 10.0;

/// Delay between a tap and the split it triggers, so the line is visible briefly.
pub const DEFAULT_SPLIT_DELAY_MS: u64 = 100;

// ── Rendering ───────────────────────────────────────────────────

/// Corner radius as a fraction of the smaller original side of a part.
pub const CORNER_RADIUS_RATIO: f64 = 0.1;

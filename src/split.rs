//! Split engine: partitions every part of every tablet against one line.
//!
//! DESIGN
//! ======
//! Each part is evaluated on its own. A line strictly inside a part (never on
//! an edge) cuts it in two when both sides reach the floor for that axis
//! (`MIN_SPLIT_WIDTH` for vertical lines, `MIN_SPLIT_HEIGHT` for horizontal
//! ones). When one side would be a sliver the part is not split; it is
//! trimmed to the larger side instead, and ties keep the left/top side.
//! Parts the line misses pass through untouched.
//!
//! A tablet always keeps at least one part. If recombination ever yields no
//! parts the tablet's original parts are kept.

#[cfg(test)]
#[path = "split_test.rs"]
mod split_test;

use crate::consts::{MIN_SPLIT_HEIGHT, MIN_SPLIT_WIDTH};
use crate::doc::{SplitLine, Tablet, TabletPart};

/// What the engine did to a single part.
#[derive(Debug, Clone, PartialEq)]
pub enum PartSplit {
    /// The line does not cross the part.
    Untouched(TabletPart),
    /// One side was a sliver; the part was trimmed to the larger side.
    Absorbed(TabletPart),
    /// The part was cut into left/right or top/bottom halves.
    Split(TabletPart, TabletPart),
}

impl PartSplit {
    fn push_into(self, out: &mut Vec<TabletPart>) {
        match self {
            Self::Untouched(part) | Self::Absorbed(part) => out.push(part),
            Self::Split(first, second) => {
                out.push(first);
                out.push(second);
            }
        }
    }
}

/// Counts of what a split pass did, for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitSummary {
    /// Parts cut in two.
    pub split: usize,
    /// Parts trimmed because one side was a sliver.
    pub absorbed: usize,
    /// Parts the line missed.
    pub untouched: usize,
}

/// How a line falls across one axis of a part.
enum Cut {
    Outside,
    Both { first: f64, second: f64 },
    KeepFirst(f64),
    KeepSecond(f64),
}

/// Cut the span `[start, start + extent)` at `at`, applying `floor` to both sides.
fn cut(start: f64, extent: f64, at: f64, floor: f64) -> Cut {
    let end = start + extent;
    if !(at > start && at < end) {
        return Cut::Outside;
    }
    let first = at - start;
    let second = end - at;
    if first >= floor && second >= floor {
        Cut::Both { first, second }
    } else if first >= second {
        Cut::KeepFirst(first)
    } else {
        Cut::KeepSecond(second)
    }
}

/// Evaluate one part against `line`.
#[must_use]
pub fn split_part(part: &TabletPart, line: SplitLine) -> PartSplit {
    match line {
        SplitLine::Vertical { x } => match cut(part.x, part.width, x, MIN_SPLIT_WIDTH) {
            Cut::Outside => PartSplit::Untouched(part.clone()),
            Cut::Both { first, second } => PartSplit::Split(
                TabletPart { id: format!("{}-left", part.id), width: first, ..part.clone() },
                TabletPart { id: format!("{}-right", part.id), x, width: second, ..part.clone() },
            ),
            Cut::KeepFirst(width) => PartSplit::Absorbed(TabletPart { width, ..part.clone() }),
            Cut::KeepSecond(width) => PartSplit::Absorbed(TabletPart { x, width, ..part.clone() }),
        },
        SplitLine::Horizontal { y } => match cut(part.y, part.height, y, MIN_SPLIT_HEIGHT) {
            Cut::Outside => PartSplit::Untouched(part.clone()),
            Cut::Both { first, second } => PartSplit::Split(
                TabletPart { id: format!("{}-top", part.id), height: first, ..part.clone() },
                TabletPart { id: format!("{}-bottom", part.id), y, height: second, ..part.clone() },
            ),
            Cut::KeepFirst(height) => PartSplit::Absorbed(TabletPart { height, ..part.clone() }),
            Cut::KeepSecond(height) => PartSplit::Absorbed(TabletPart { y, height, ..part.clone() }),
        },
    }
}

/// Split every part of one tablet, tallying outcomes into `summary`.
#[must_use]
pub fn split_tablet(tablet: &Tablet, line: SplitLine, summary: &mut SplitSummary) -> Tablet {
    let mut parts = Vec::with_capacity(tablet.parts.len() * 2);
    for part in &tablet.parts {
        let outcome = split_part(part, line);
        match outcome {
            PartSplit::Untouched(_) => summary.untouched += 1,
            PartSplit::Absorbed(_) => summary.absorbed += 1,
            PartSplit::Split(..) => summary.split += 1,
        }
        outcome.push_into(&mut parts);
    }
    if parts.is_empty() {
        parts.clone_from(&tablet.parts);
    }
    Tablet { parts, ..tablet.clone() }
}

/// Split every tablet against `line`, returning the new tablet set and a summary.
#[must_use]
pub fn split_tablets(tablets: &[Tablet], line: SplitLine) -> (Vec<Tablet>, SplitSummary) {
    let mut summary = SplitSummary::default();
    let tablets = tablets.iter().map(|t| split_tablet(t, line, &mut summary)).collect();
    (tablets, summary)
}

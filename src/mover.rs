//! Part mutator: repositions a single part.

#[cfg(test)]
#[path = "mover_test.rs"]
mod mover_test;

use crate::doc::Tablet;

/// Move part `part_id` of tablet `tablet_id` so its top-left is `(x, y)`.
///
/// Only that part's `x` and `y` change. Returns `false` when either id is
/// unknown; that is a silent miss, since drag updates routinely race against
/// splits that rename parts.
pub fn move_part(tablets: &mut [Tablet], tablet_id: &str, part_id: &str, x: f64, y: f64) -> bool {
    let Some(part) = tablets
        .iter_mut()
        .find(|t| t.id == tablet_id)
        .and_then(|t| t.part_mut(part_id))
    else {
        return false;
    };
    part.x = x;
    part.y = y;
    true
}

//! Row-target resolution: decides whether the floating visual has crossed
//! far enough into a neighboring row to commit a reorder.

use crate::table::TableHost;
use rowlift_core::Vec2;

/// Resolve where the dragged row should move, if anywhere.
///
/// The row under the pointer is the proposal, remapped through the host's
/// `target_index_for_move` (which receives the session's *initial* index).
/// A differing candidate commits only once the pointer has penetrated the
/// candidate's rect deeper than the height difference between the row the
/// session currently occupies and the candidate, and only if the host
/// reports the candidate movable. The penetration threshold is what keeps
/// unequal-height rows from swapping on every sample at the boundary.
///
/// Returns the destination index; the caller must apply the host mutation
/// and the session's index update together, in the same tick.
pub fn resolve_move(
    host: &dyn TableHost,
    pointer: Vec2,
    initial: usize,
    current: usize,
) -> Option<usize> {
    let proposed = host.row_at_position(pointer)?;
    let candidate = host.target_index_for_move(initial, proposed);
    if candidate == current || candidate >= host.row_count() {
        return None;
    }

    let current_height = host.row_rect(current).h;
    let candidate_rect = host.row_rect(candidate);
    let y_in_cell = pointer.y - candidate_rect.y;

    let crossed = y_in_cell > current_height - candidate_rect.h;
    (crossed && host.can_move_row(candidate)).then_some(candidate)
}

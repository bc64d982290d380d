//! Naked pairs.

use deduku_core::{Board, Group, Position, PositionSet};

use crate::{
    event::{DeductionEvent, DeductionObserver},
    technique::Technique,
};

/// Searches `group` for a cell matching `pos`'s two-candidate mask exactly;
/// on a match, removes both digits from every other unassigned cell of the
/// group. Returns `true` if any mask changed.
pub(crate) fn apply(
    board: &mut Board,
    pos: Position,
    group: Group,
    observer: &mut dyn DeductionObserver,
) -> bool {
    let cell = board.cell(pos);
    if cell.is_assigned() || cell.candidate_count() != 2 {
        return false;
    }
    let pair = cell.candidates();

    let partner = group.cells().into_iter().find(|&other| {
        if other == pos {
            return false;
        }
        let other_cell = board.cell(other);
        !other_cell.is_assigned() && other_cell.candidates() == pair
    });
    let Some(partner) = partner else {
        return false;
    };

    let mut removed = PositionSet::new();
    for other in group.cells() {
        if other == pos || other == partner || board.cell(other).is_assigned() {
            continue;
        }
        if board.eliminate_candidates(other, pair) {
            removed.insert(other);
        }
    }
    if removed.is_empty() {
        return false;
    }
    observer.on_event(&DeductionEvent::Eliminated {
        technique: Technique::NakedPair,
        positions: removed,
        digits: pair,
        group: Some(group.kind()),
    });
    true
}

//! Naked triples.

use deduku_core::{Board, Group, Position, PositionSet};

use crate::{
    event::{DeductionEvent, DeductionObserver},
    technique::Technique,
};

/// Searches `group` for two more cells that, together with `pos`, confine
/// exactly three candidates to three cells; on a find, removes those digits
/// from every other unassigned cell of the group. Returns `true` if any
/// mask changed.
///
/// The pivot cell must hold two or three candidates. Matching cells are
/// taken in slot order: the first two whose masks intersect the pivot's and
/// whose pairwise union with it stays within three digits.
pub(crate) fn apply(
    board: &mut Board,
    pos: Position,
    group: Group,
    observer: &mut dyn DeductionObserver,
) -> bool {
    let cell = board.cell(pos);
    if cell.is_assigned() {
        return false;
    }
    let pivot = cell.candidates();
    if !(2..=3).contains(&pivot.len()) {
        return false;
    }

    let mut matches = [None; 2];
    let mut match_count = 0;
    for other in group.cells() {
        if other == pos {
            continue;
        }
        let other_cell = board.cell(other);
        if other_cell.is_assigned() {
            continue;
        }
        let mask = other_cell.candidates();
        if mask.intersection(pivot).is_empty() || mask.union(pivot).len() > 3 {
            continue;
        }
        matches[match_count] = Some(other);
        match_count += 1;
        if match_count == 2 {
            break;
        }
    }
    let (Some(first), Some(second)) = (matches[0], matches[1]) else {
        return false;
    };

    let triple = pivot
        | board.cell(first).candidates()
        | board.cell(second).candidates();
    if triple.len() != 3 {
        return false;
    }

    let mut removed = PositionSet::new();
    for other in group.cells() {
        if other == pos || other == first || other == second {
            continue;
        }
        if board.cell(other).is_assigned() {
            continue;
        }
        if board.eliminate_candidates(other, triple) {
            removed.insert(other);
        }
    }
    if removed.is_empty() {
        return false;
    }
    observer.on_event(&DeductionEvent::Eliminated {
        technique: Technique::NakedTriple,
        positions: removed,
        digits: triple,
        group: Some(group.kind()),
    });
    true
}

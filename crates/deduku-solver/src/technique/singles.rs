//! Naked and hidden singles.
//!
//! The workhorse technique: if a cell has exactly one remaining candidate
//! (naked single), or holds a candidate that no other unassigned cell of one
//! of its groups still permits (hidden single), that value is assigned and
//! propagated.

use deduku_core::{Board, CandidateSet, Digit, Group, Position};

use crate::{
    event::{DeductionEvent, DeductionObserver},
    technique::Technique,
};

/// Tries to assign `pos` as a naked single, then as a hidden single within
/// `group`. Returns the assigned digit, if any.
pub(crate) fn apply(
    board: &mut Board,
    pos: Position,
    group: Group,
    observer: &mut dyn DeductionObserver,
) -> Option<Digit> {
    let cell = board.cell(pos);
    if cell.is_assigned() {
        return None;
    }

    if let Some(digit) = cell.candidates().as_single() {
        board.assign(pos, digit, false);
        observer.on_event(&DeductionEvent::Assigned {
            technique: Technique::Singles,
            position: pos,
            digit,
            group: None,
        });
        return Some(digit);
    }

    // Union of what every other unassigned cell in the group still permits.
    // Whatever remains of this cell's mask after subtracting that union can
    // go nowhere else in the group.
    let mut others = CandidateSet::new();
    for other in group.cells() {
        if other == pos {
            continue;
        }
        let other_cell = board.cell(other);
        if !other_cell.is_assigned() {
            others |= other_cell.candidates();
        }
    }
    let digit = board.candidates_at(pos).difference(others).as_single()?;
    board.assign(pos, digit, false);
    observer.on_event(&DeductionEvent::Assigned {
        technique: Technique::Singles,
        position: pos,
        digit,
        group: Some(group.kind()),
    });
    Some(digit)
}

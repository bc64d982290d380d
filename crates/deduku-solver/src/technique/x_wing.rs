//! X-Wing.
//!
//! When a value is admitted by exactly two unassigned cells of a line, and a
//! later line of the same orientation admits it at exactly the same two
//! cross indices, the value is pinned to one diagonal of that rectangle and
//! can be removed from the two cross lines everywhere else.

use deduku_core::{Board, CandidateSet, Digit, Group, GroupKind, Position, PositionSet};
use tinyvec::ArrayVec;

use crate::{
    event::{DeductionEvent, DeductionObserver},
    technique::Technique,
};

/// Runs the X-Wing search over all nine lines of one orientation (rows or
/// columns). Returns `true` if any mask changed.
pub(crate) fn apply(
    board: &mut Board,
    orientation: GroupKind,
    observer: &mut dyn DeductionObserver,
) -> bool {
    debug_assert!(orientation != GroupKind::Box);
    let lines: &[Group; 9] = match orientation {
        GroupKind::Row => &Group::ROWS,
        GroupKind::Column => &Group::COLUMNS,
        GroupKind::Box => return false,
    };

    // Admitting-cell counts per (line, value), taken before any elimination
    // of this sweep. Later lines are only considered while both of their
    // recorded cells still admit the value.
    let mut counts = [[0u8; 9]; 9];
    for (li, line) in lines.iter().enumerate() {
        for pos in line.cells() {
            let cell = board.cell(pos);
            if cell.is_assigned() {
                continue;
            }
            for digit in cell.candidates() {
                counts[li][usize::from(digit.value() - 1)] += 1;
            }
        }
    }

    let mut changed = false;
    for li in 0..9 {
        for digit in Digit::ALL {
            if counts[li][usize::from(digit.value() - 1)] != 2 {
                continue;
            }
            let Some((slot1, slot2)) = admitting_pair(board, lines[li], digit) else {
                continue;
            };

            let mut partner = None;
            for (lj, line) in lines.iter().enumerate().skip(li + 1) {
                if counts[lj][usize::from(digit.value() - 1)] != 2 {
                    continue;
                }
                if admits(board, line.cell_at(slot1), digit)
                    && admits(board, line.cell_at(slot2), digit)
                {
                    partner = Some(lj);
                    break;
                }
            }
            let Some(lj) = partner else {
                continue;
            };

            let mut removed = PositionSet::new();
            for (lk, line) in lines.iter().enumerate() {
                if lk == li || lk == lj {
                    continue;
                }
                for slot in [slot1, slot2] {
                    let pos = line.cell_at(slot);
                    if board.cell(pos).is_assigned() {
                        continue;
                    }
                    if board.eliminate_candidate(pos, digit) {
                        removed.insert(pos);
                    }
                }
            }
            if !removed.is_empty() {
                observer.on_event(&DeductionEvent::Eliminated {
                    technique: Technique::XWing,
                    positions: removed,
                    digits: CandidateSet::from_elem(digit),
                    group: Some(orientation),
                });
                changed = true;
            }
        }
    }
    changed
}

/// Returns the two slots of `line` whose unassigned cells still admit
/// `digit`, or `None` if the count is no longer exactly two (an earlier
/// firing of this sweep may have removed one).
fn admitting_pair(board: &Board, line: Group, digit: Digit) -> Option<(u8, u8)> {
    let mut slots: ArrayVec<[u8; 9]> = ArrayVec::new();
    for slot in 0..9u8 {
        if admits(board, line.cell_at(slot), digit) {
            slots.push(slot);
        }
    }
    if slots.len() == 2 {
        Some((slots[0], slots[1]))
    } else {
        None
    }
}

fn admits(board: &Board, pos: Position, digit: Digit) -> bool {
    let cell = board.cell(pos);
    !cell.is_assigned() && cell.is_candidate(digit)
}

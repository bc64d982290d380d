//! Pointing (number claiming).
//!
//! The box-internal inverse of box-line reduction: a value whose candidates
//! within a box all sit on one of the box's three row (or column) segments
//! must land on that segment, so the segment's full line claims it and the
//! value is removed from the line outside the box.

use deduku_core::{Board, CandidateSet, Group, GroupKind, PositionSet};

use crate::{
    event::{DeductionEvent, DeductionObserver},
    technique::Technique,
};

/// Runs number claiming for one box. Returns `true` if any mask changed.
pub(crate) fn apply(
    board: &mut Board,
    box_group: Group,
    observer: &mut dyn DeductionObserver,
) -> bool {
    debug_assert!(box_group.kind() == GroupKind::Box);

    // Candidate unions of the box's three row segments and three column
    // segments, over unassigned cells only. Box slot k sits on segment row
    // k / 3 and segment column k % 3.
    let mut row_segments = [CandidateSet::EMPTY; 3];
    let mut col_segments = [CandidateSet::EMPTY; 3];
    for slot in 0..9u8 {
        let cell = board.cell(box_group.cell_at(slot));
        if cell.is_assigned() {
            continue;
        }
        row_segments[usize::from(slot / 3)] |= cell.candidates();
        col_segments[usize::from(slot % 3)] |= cell.candidates();
    }

    let mut changed = false;
    for seg in 0..3usize {
        let claimed =
            row_segments[seg].difference(row_segments[(seg + 1) % 3] | row_segments[(seg + 2) % 3]);
        if claimed.is_empty() {
            continue;
        }
        #[expect(clippy::cast_possible_truncation)]
        let anchor = box_group.cell_at(3 * seg as u8);
        let line = Group::ROWS[usize::from(anchor.row())];
        changed |= claim(board, claimed, box_group, line, observer);
    }
    for seg in 0..3usize {
        let claimed =
            col_segments[seg].difference(col_segments[(seg + 1) % 3] | col_segments[(seg + 2) % 3]);
        if claimed.is_empty() {
            continue;
        }
        #[expect(clippy::cast_possible_truncation)]
        let anchor = box_group.cell_at(seg as u8);
        let line = Group::COLUMNS[usize::from(anchor.col())];
        changed |= claim(board, claimed, box_group, line, observer);
    }
    changed
}

/// Removes each claimed digit from the unassigned cells of `line` outside
/// `box_group`.
fn claim(
    board: &mut Board,
    digits: CandidateSet,
    box_group: Group,
    line: Group,
    observer: &mut dyn DeductionObserver,
) -> bool {
    let mut any = false;
    for digit in digits {
        let mut removed = PositionSet::new();
        for pos in line.cells() {
            if box_group.contains(pos) || board.cell(pos).is_assigned() {
                continue;
            }
            if board.eliminate_candidate(pos, digit) {
                removed.insert(pos);
            }
        }
        if !removed.is_empty() {
            observer.on_event(&DeductionEvent::Eliminated {
                technique: Technique::Pointing,
                positions: removed,
                digits: CandidateSet::from_elem(digit),
                group: Some(line.kind()),
            });
            any = true;
        }
    }
    any
}

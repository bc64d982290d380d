//! Box-line reduction.

use deduku_core::{Board, CandidateSet, Digit, Group, GroupKind, PositionSet};

use crate::{
    event::{DeductionEvent, DeductionObserver},
    technique::Technique,
};

/// For each value not yet assigned in `line` (a row or column): if every
/// unassigned line cell still admitting the value sits in the same box, the
/// value must land in that box on this line, so it is removed from the box's
/// cells outside the line. Returns `true` if any mask changed.
pub(crate) fn apply(
    board: &mut Board,
    line: Group,
    observer: &mut dyn DeductionObserver,
) -> bool {
    debug_assert!(line.kind() != GroupKind::Box);

    let mut placed = CandidateSet::new();
    for pos in line.cells() {
        if let Some(digit) = board.cell(pos).value() {
            placed.insert(digit);
        }
    }

    let mut changed = false;
    for digit in !placed {
        let Some(box_index) = confining_box(board, line, digit) else {
            continue;
        };
        let box_group = Group::BOXES[box_index as usize];
        let mut removed = PositionSet::new();
        for pos in box_group.cells() {
            if line.contains(pos) || board.cell(pos).is_assigned() {
                continue;
            }
            if board.eliminate_candidate(pos, digit) {
                removed.insert(pos);
            }
        }
        if !removed.is_empty() {
            observer.on_event(&DeductionEvent::Eliminated {
                technique: Technique::BoxLine,
                positions: removed,
                digits: CandidateSet::from_elem(digit),
                group: Some(line.kind()),
            });
            changed = true;
        }
    }
    changed
}

/// Returns the single box holding every unassigned cell of `line` that still
/// admits `digit`, or `None` if there is no such cell or they span boxes.
fn confining_box(board: &Board, line: Group, digit: Digit) -> Option<u8> {
    let mut confined: Option<u8> = None;
    for pos in line.cells() {
        let cell = board.cell(pos);
        if cell.is_assigned() || !cell.is_candidate(digit) {
            continue;
        }
        match confined {
            None => confined = Some(pos.box_index()),
            Some(index) if index != pos.box_index() => return None,
            Some(_) => {}
        }
    }
    confined
}

#[cfg(test)]
mod tests {
    use deduku_core::{Digit::*, Position};

    use super::*;
    use crate::testing::TechniqueTester;

    #[test]
    fn test_row_confined_digit_cleared_from_box() {
        TechniqueTester::new_empty()
            .setup(|board| {
                // In row 0, digit 5 survives only at columns 0-2 (box 0).
                for col in 3..9 {
                    board.eliminate_candidate(Position::new(0, col), D5);
                }
            })
            .apply(|board, observer| apply(board, Group::Row { row: 0 }, observer))
            .assert_removed_includes(Position::new(1, 0), [D5])
            .assert_removed_includes(Position::new(2, 2), [D5])
            // The line's own cells keep the digit.
            .assert_no_change(Position::new(0, 0))
            .assert_no_change(Position::new(0, 1));
    }

    #[test]
    fn test_column_confined_digit_cleared_from_box() {
        TechniqueTester::new_empty()
            .setup(|board| {
                // In column 4, digit 8 survives only at rows 6-8 (box 7).
                for row in 0..6 {
                    board.eliminate_candidate(Position::new(row, 4), D8);
                }
            })
            .apply(|board, observer| apply(board, Group::Column { col: 4 }, observer))
            .assert_removed_includes(Position::new(6, 3), [D8])
            .assert_removed_includes(Position::new(8, 5), [D8])
            .assert_no_change(Position::new(7, 4));
    }

    #[test]
    fn test_value_spanning_boxes_is_skipped() {
        TechniqueTester::new_empty()
            .setup(|board| {
                // Digit 5 survives at columns 1 and 7 of row 0: two boxes.
                for col in 0..9 {
                    if col != 1 && col != 7 {
                        board.eliminate_candidate(Position::new(0, col), D5);
                    }
                }
            })
            .apply(|board, observer| apply(board, Group::Row { row: 0 }, observer))
            .assert_no_change(Position::new(1, 1))
            .assert_no_change(Position::new(1, 7));
    }

    #[test]
    fn test_assigned_value_is_skipped() {
        // Digit 3 is already assigned in the row; no reduction runs for it.
        let tester = TechniqueTester::new_empty()
            .setup(|board| {
                board.assign(Position::new(0, 0), D3, true);
                // Every other digit spans boxes, so nothing else fires
                // either.
            })
            .apply(|board, observer| apply(board, Group::Row { row: 0 }, observer));
        tester.assert_no_events();
    }

    #[test]
    fn test_event_payload() {
        let tester = TechniqueTester::new_empty()
            .setup(|board| {
                for col in 3..9 {
                    board.eliminate_candidate(Position::new(4, col), D2);
                }
            })
            .apply(|board, observer| apply(board, Group::Row { row: 4 }, observer));

        let events = tester.events();
        assert_eq!(events.len(), 1);
        let DeductionEvent::Eliminated {
            technique,
            positions,
            digits,
            group,
        } = events[0]
        else {
            panic!("expected an elimination event, got {:?}", events[0]);
        };
        assert_eq!(technique, Technique::BoxLine);
        assert_eq!(digits, CandidateSet::from_elem(D2));
        assert_eq!(group, Some(GroupKind::Row));
        // Box 3 cells in rows 3 and 5 lost the digit; row 4 kept it.
        assert_eq!(positions.len(), 6);
        for pos in positions {
            assert_eq!(pos.box_index(), 3);
            assert_ne!(pos.row(), 4);
        }
    }

    #[test]
    fn test_nothing_admitting_no_change() {
        let tester = TechniqueTester::new_empty()
            .setup(|board| {
                // Digit 9 eliminated from the whole of row 2 by hand.
                for col in 0..9 {
                    board.eliminate_candidate(Position::new(2, col), D9);
                }
            })
            .apply(|board, observer| apply(board, Group::Row { row: 2 }, observer));
        // No admitting cell, so digit 9 fires nothing; other digits span
        // boxes and fire nothing either.
        tester.assert_no_events();
    }
}

//! Test utilities for technique implementations.
//!
//! [`TechniqueTester`] tracks an initial and a current board, lets a test
//! apply technique calls, and offers chained assertions about placements
//! and candidate removals, reporting failures at the caller's location.

use std::str::FromStr as _;

use deduku_core::{Board, CandidateSet, Digit, DigitGrid, Position};

use crate::event::{DeductionEvent, DeductionObserver, EventLog};

pub(crate) struct TechniqueTester {
    initial: Board,
    current: Board,
    events: EventLog,
}

impl TechniqueTester {
    /// Creates a tester over an empty board (all candidates everywhere).
    pub(crate) fn new_empty() -> Self {
        Self::new(Board::new())
    }

    /// Creates a tester from a prepared board.
    pub(crate) fn new(board: Board) -> Self {
        Self {
            initial: board.clone(),
            current: board,
            events: EventLog::new(),
        }
    }

    /// Creates a tester from a grid string (see [`DigitGrid`]).
    ///
    /// # Panics
    ///
    /// Panics if the string does not parse as a grid.
    #[track_caller]
    pub(crate) fn from_str(s: &str) -> Self {
        let grid = DigitGrid::from_str(s).unwrap();
        let mut board = Board::new();
        board.load(grid.cells()).unwrap();
        Self::new(board)
    }

    /// Mutates the board before the technique under test runs.
    ///
    /// The mutated state becomes the new baseline for the removal
    /// assertions.
    pub(crate) fn setup(mut self, f: impl FnOnce(&mut Board)) -> Self {
        f(&mut self.current);
        self.initial = self.current.clone();
        self
    }

    /// Applies a technique call, recording its events.
    pub(crate) fn apply<R>(
        mut self,
        f: impl FnOnce(&mut Board, &mut dyn DeductionObserver) -> R,
    ) -> Self {
        let _ = f(&mut self.current, &mut self.events);
        self
    }

    /// Returns the events recorded so far, in emission order.
    pub(crate) fn events(&self) -> &[DeductionEvent] {
        self.events.events()
    }

    /// Asserts that no event was emitted.
    #[track_caller]
    pub(crate) fn assert_no_events(&self) {
        assert!(
            self.events.is_empty(),
            "expected no events, got {:?}",
            self.events.events()
        );
    }

    /// Asserts that a cell went from undecided to holding `digit`.
    #[track_caller]
    pub(crate) fn assert_placed(self, pos: Position, digit: Digit) -> Self {
        assert!(
            !self.initial.cell(pos).is_assigned(),
            "expected {pos} to start unassigned"
        );
        assert_eq!(
            self.current.value_at(pos),
            Some(digit),
            "expected {digit} placed at {pos}, candidates are {:?}",
            self.current.candidates_at(pos)
        );
        self
    }

    /// Asserts that all of `digits` were present initially and are gone now.
    ///
    /// Other candidates may have been removed too.
    #[track_caller]
    pub(crate) fn assert_removed_includes<C>(self, pos: Position, digits: C) -> Self
    where
        C: IntoIterator<Item = Digit>,
    {
        let digits = CandidateSet::from_iter(digits);
        let initial = self.initial.candidates_at(pos);
        let current = self.current.candidates_at(pos);
        assert_eq!(
            initial & digits,
            digits,
            "expected initial candidates at {pos} to include {digits:?}, but they are {initial:?}"
        );
        assert!(
            (current & digits).is_empty(),
            "expected all of {digits:?} removed from {pos}, but {current:?} remains"
        );
        self
    }

    /// Asserts that exactly `digits` were removed from a cell, no more and
    /// no less.
    #[track_caller]
    pub(crate) fn assert_removed_exact<C>(self, pos: Position, digits: C) -> Self
    where
        C: IntoIterator<Item = Digit>,
    {
        let digits = CandidateSet::from_iter(digits);
        let initial = self.initial.candidates_at(pos);
        let current = self.current.candidates_at(pos);
        let removed = initial.difference(current);
        assert_eq!(
            removed, digits,
            "expected exactly {digits:?} removed from {pos} (initial {initial:?}, current {current:?})"
        );
        self
    }

    /// Asserts that a cell's candidates and value did not change.
    #[track_caller]
    pub(crate) fn assert_no_change(self, pos: Position) -> Self {
        assert_eq!(
            self.initial.cell(pos),
            self.current.cell(pos),
            "expected no change at {pos}"
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use deduku_core::Digit::*;

    use super::*;

    #[test]
    fn test_from_str_loads_givens() {
        let tester = TechniqueTester::from_str(
            "
            53_ _7_ ___
            6__ 195 ___
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
        ",
        );
        assert_eq!(tester.current.value_at(Position::new(0, 0)), Some(D5));
        assert_eq!(tester.current.value_at(Position::new(8, 8)), Some(D9));
        assert_eq!(tester.current.value_at(Position::new(0, 2)), None);
    }

    #[test]
    #[should_panic(expected = "expected no change")]
    fn test_assert_no_change_catches_mutation() {
        TechniqueTester::new_empty()
            .apply(|board, _observer| board.eliminate_candidate(Position::new(0, 0), D1))
            .assert_no_change(Position::new(0, 0));
    }

    #[test]
    #[should_panic(expected = "expected all of")]
    fn test_assert_removed_includes_catches_survivors() {
        TechniqueTester::new_empty()
            .apply(|_board, _observer| ())
            .assert_removed_includes(Position::new(0, 0), [D1]);
    }

    #[test]
    fn test_assert_removed_exact() {
        TechniqueTester::new_empty()
            .apply(|board, _observer| {
                board.eliminate_candidate(Position::new(0, 0), D1);
                board.eliminate_candidate(Position::new(0, 0), D2);
            })
            .assert_removed_exact(Position::new(0, 0), [D1, D2]);
    }
}

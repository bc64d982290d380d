//! The board: owner of all 81 cells, assignment propagation, validation.

use derive_more::{Display, Error};

use crate::{
    candidates::CandidateSet,
    cell::Cell,
    digit::Digit,
    digit_grid::DigitGrid,
    group::Group,
    position::Position,
    position_set::PositionSet,
};

/// Error returned by [`Board::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum LoadError {
    /// The loader did not hand over exactly 81 entries.
    #[display("malformed input: expected 81 cells, got {count}")]
    MalformedInput {
        /// Number of entries actually provided.
        count: usize,
    },
}

/// The full `(value, candidates)` state of all 81 cells.
///
/// Snapshots serve two purposes: the scan loop compares consecutive
/// snapshots to detect a stalled pass, and external renderers read them to
/// draw candidate grids without reaching into the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    cells: [(Option<Digit>, CandidateSet); 81],
}

impl Snapshot {
    /// Returns the `(value, candidates)` pair at a position.
    #[must_use]
    pub fn get(&self, pos: Position) -> (Option<Digit>, CandidateSet) {
        self.cells[pos.index()]
    }
}

/// A 9×9 sudoku board.
///
/// The board is the single owner of all 81 [`Cell`]s; rows, columns, and
/// boxes are [`Group`] index views over it. Cells and group wiring are fixed
/// at construction, and only cell state (value, candidates, given flag)
/// changes afterwards.
///
/// Assignment goes through [`assign`](Self::assign), which performs one step
/// of candidate propagation across the three groups containing the cell. No
/// contradiction is detected during propagation; a board that went wrong
/// shows up through [`is_valid`](Self::is_valid) and
/// [`contradictions`](Self::contradictions).
///
/// # Examples
///
/// ```
/// use deduku_core::{Board, Digit, Position};
///
/// let mut board = Board::new();
/// board.assign(Position::new(0, 0), Digit::D5, false);
///
/// // One-step propagation removed 5 from the row, column, and box peers.
/// assert!(!board.cell(Position::new(0, 8)).is_candidate(Digit::D5));
/// assert!(!board.cell(Position::new(8, 0)).is_candidate(Digit::D5));
/// assert!(!board.cell(Position::new(2, 2)).is_candidate(Digit::D5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; 81],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates an empty board: every cell unassigned with all candidates.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [Cell::new(); 81],
        }
    }

    /// Resets every cell to the empty state.
    pub fn reset(&mut self) {
        self.cells = [Cell::new(); 81];
    }

    /// Returns the cell at a position.
    #[must_use]
    pub fn cell(&self, pos: Position) -> &Cell {
        &self.cells[pos.index()]
    }

    /// Returns the assigned value at a position, if any.
    #[must_use]
    pub fn value_at(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()].value()
    }

    /// Returns the candidate mask at a position.
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> CandidateSet {
        self.cells[pos.index()].candidates()
    }

    /// Assigns a digit to a cell and propagates one elimination step.
    ///
    /// The cell's candidate mask becomes the singleton for `digit`, and
    /// `digit` is removed from the candidate mask of every other cell
    /// sharing the cell's row, column, or box. Propagation does not cascade:
    /// a peer reduced to one candidate is left for the solving techniques to
    /// pick up. Re-assigning the same value is a no-op for the peers.
    ///
    /// No contradiction check happens here; assigning into an inconsistent
    /// neighborhood is only surfaced later by [`is_valid`](Self::is_valid).
    pub fn assign(&mut self, pos: Position, digit: Digit, given: bool) {
        let cell = &mut self.cells[pos.index()];
        cell.set_value(digit);
        cell.given = given;
        for group in Group::containing(pos) {
            for other in group.cells() {
                if other != pos {
                    self.cells[other.index()].eliminate(digit);
                }
            }
        }
    }

    /// Clears a cell's value, restoring its full candidate mask.
    ///
    /// Neighbors are left untouched; eliminations already propagated from
    /// the cleared value are not undone.
    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.index()].clear_value();
    }

    /// Removes a digit from a cell's candidate mask.
    ///
    /// Returns `true` if the mask actually changed.
    pub fn eliminate_candidate(&mut self, pos: Position, digit: Digit) -> bool {
        self.cells[pos.index()].eliminate(digit)
    }

    /// Removes a set of digits from a cell's candidate mask.
    ///
    /// Returns `true` if the mask actually changed.
    pub fn eliminate_candidates(&mut self, pos: Position, digits: CandidateSet) -> bool {
        self.cells[pos.index()].eliminate_all(digits)
    }

    /// Loads an initial puzzle: exactly 81 entries in row-major order.
    ///
    /// Each `Some` entry is assigned as a given through the propagator, so a
    /// later given immediately narrows the masks of earlier-loaded cells.
    /// The previous board state is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::MalformedInput`] if `entries` does not contain
    /// exactly 81 entries. Nothing is mutated in that case.
    pub fn load(&mut self, entries: &[Option<Digit>]) -> Result<(), LoadError> {
        if entries.len() != 81 {
            return Err(LoadError::MalformedInput {
                count: entries.len(),
            });
        }
        self.reset();
        for (index, entry) in entries.iter().enumerate() {
            if let Some(digit) = *entry {
                self.assign(Position::from_index(index), digit, true);
            }
        }
        Ok(())
    }

    /// Captures the `(value, candidates)` state of all 81 cells.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cells: std::array::from_fn(|index| {
                let cell = self.cells[index];
                (cell.value(), cell.candidates())
            }),
        }
    }

    /// Returns `true` if every cell holds a value.
    ///
    /// Completeness only; whether the filled values respect the sudoku
    /// constraints is [`is_valid`](Self::is_valid)'s job.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_assigned())
    }

    /// Returns `true` if no group holds the same assigned value twice.
    ///
    /// A partially filled board can be valid; this checks only what has
    /// been assigned so far.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        for group in Group::ALL {
            let mut seen = CandidateSet::new();
            for pos in group.cells() {
                if let Some(digit) = self.cells[pos.index()].value() {
                    if seen.contains(digit) {
                        return false;
                    }
                    seen.insert(digit);
                }
            }
        }
        true
    }

    /// Returns the unassigned cells whose candidate mask is empty.
    ///
    /// Such cells mean the board has been driven into a contradiction.
    /// Propagation never raises this eagerly; the query exists for callers
    /// that want the diagnostic.
    #[must_use]
    pub fn contradictions(&self) -> PositionSet {
        Position::all()
            .filter(|&pos| {
                let cell = self.cells[pos.index()];
                !cell.is_assigned() && cell.candidates().is_empty()
            })
            .collect()
    }

    /// Returns the set of unassigned positions.
    #[must_use]
    pub fn unassigned(&self) -> PositionSet {
        Position::all()
            .filter(|&pos| !self.cells[pos.index()].is_assigned())
            .collect()
    }

    /// Returns the assigned values as a [`DigitGrid`].
    #[must_use]
    pub fn to_digit_grid(&self) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for pos in Position::all() {
            grid.set(pos, self.cells[pos.index()].value());
        }
        grid
    }
}

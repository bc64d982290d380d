//! The fixed-point scan loop.

use deduku_core::{Board, Group, GroupKind, Position};
use derive_more::IsVariant;
use log::{debug, trace};

use crate::{
    event::{DeductionObserver, NullObserver},
    technique::{self, TechniqueSet},
};

/// The scan loop's state after a pass.
///
/// The loop keeps `Running` while passes change the board, and ends in one
/// of the two terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum SolveState {
    /// The last pass changed something; another pass is worth running.
    Running,
    /// A full pass changed nothing. Terminal.
    Stalled,
    /// Every cell is assigned. Terminal.
    Solved,
}

/// The result of driving the scan loop to a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// `true` if every cell ended up assigned.
    pub solved: bool,
    /// `true` if no group holds a duplicated assigned value. Reported
    /// regardless of `solved`: a stalled board can still be checked for
    /// consistency of what it has so far.
    pub valid: bool,
    /// Number of full passes executed.
    pub passes: usize,
}

/// Applies the deduction techniques in fixed order until the board is
/// solved or a pass changes nothing.
///
/// One pass works through every unassigned cell, giving singles a shot
/// against the cell's box, row, and column (moving on as soon as the cell is
/// assigned), then naked pairs and naked triples against the same three
/// groups. After the cell sweep, box-line reduction runs over every row and
/// then every column, pointing over every box, and X-Wing once for columns
/// and once for rows.
///
/// The technique order inside a pass is fixed; all techniques only remove
/// candidates or assign values, so the loop's total candidate count is
/// non-increasing and termination needs no pass ceiling.
///
/// # Examples
///
/// ```
/// use deduku_core::{Board, DigitGrid};
/// use deduku_solver::Solver;
///
/// let grid: DigitGrid = "
///     534 678 912
///     672 195 348
///     198 342 567
///     859 761 423
///     426 853 791
///     713 924 856
///     961 537 284
///     287 419 635
///     345 286 17_
/// "
/// .parse()?;
///
/// let mut board = Board::new();
/// board.load(grid.cells())?;
///
/// let outcome = Solver::new().solve(&mut board);
/// assert!(outcome.solved);
/// assert!(outcome.valid);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    techniques: TechniqueSet,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Creates a solver with every technique enabled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            techniques: TechniqueSet::all(),
        }
    }

    /// Creates a solver restricted to the given techniques.
    #[must_use]
    pub const fn with_techniques(techniques: TechniqueSet) -> Self {
        Self { techniques }
    }

    /// Returns the enabled techniques.
    #[must_use]
    pub const fn techniques(&self) -> TechniqueSet {
        self.techniques
    }

    /// Runs the scan loop to a terminal state, discarding events.
    pub fn solve(&self, board: &mut Board) -> Outcome {
        self.solve_with_observer(board, &mut NullObserver)
    }

    /// Runs the scan loop to a terminal state, reporting every deduction to
    /// `observer`.
    pub fn solve_with_observer(
        &self,
        board: &mut Board,
        observer: &mut dyn DeductionObserver,
    ) -> Outcome {
        let mut passes = 0;
        let mut previous = board.snapshot();
        let state = loop {
            if board.is_solved() {
                break SolveState::Solved;
            }
            self.pass(board, observer);
            passes += 1;
            if board.is_solved() {
                break SolveState::Solved;
            }
            let current = board.snapshot();
            if current == previous {
                break SolveState::Stalled;
            }
            trace!("pass {passes} made progress");
            previous = current;
        };
        let valid = board.is_valid();
        debug!("scan loop reached {state:?} after {passes} passes, valid: {valid}");
        Outcome {
            solved: state.is_solved(),
            valid,
            passes,
        }
    }

    /// One full pass over the board, in the fixed technique order.
    fn pass(&self, board: &mut Board, observer: &mut dyn DeductionObserver) {
        let enabled = self.techniques;

        for pos in Position::all() {
            if board.cell(pos).is_assigned() {
                continue;
            }
            if enabled.contains(TechniqueSet::SINGLES) {
                let mut assigned = None;
                for group in Group::containing(pos) {
                    assigned = technique::singles::apply(board, pos, group, observer);
                    if assigned.is_some() {
                        break;
                    }
                }
                if assigned.is_some() {
                    continue;
                }
            }
            if enabled.contains(TechniqueSet::NAKED_PAIR) {
                for group in Group::containing(pos) {
                    technique::naked_pair::apply(board, pos, group, observer);
                }
            }
            if enabled.contains(TechniqueSet::NAKED_TRIPLE) {
                for group in Group::containing(pos) {
                    technique::naked_triple::apply(board, pos, group, observer);
                }
            }
        }

        if enabled.contains(TechniqueSet::BOX_LINE) {
            for line in Group::ROWS {
                technique::box_line::apply(board, line, observer);
            }
            for line in Group::COLUMNS {
                technique::box_line::apply(board, line, observer);
            }
        }
        if enabled.contains(TechniqueSet::POINTING) {
            for box_group in Group::BOXES {
                technique::pointing::apply(board, box_group, observer);
            }
        }
        if enabled.contains(TechniqueSet::X_WING) {
            technique::x_wing::apply(board, GroupKind::Column, observer);
            technique::x_wing::apply(board, GroupKind::Row, observer);
        }
    }
}

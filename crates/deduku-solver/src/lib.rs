//! Logic-only sudoku solving.
//!
//! This crate drives a [`deduku_core::Board`] to a fixed point using six
//! human-style deduction techniques: singles (naked and hidden), naked
//! pairs, naked triples, box-line reduction, pointing, and X-Wing. There is
//! no search and no guessing: a puzzle beyond the technique menu stalls,
//! unsolved but with everything deduced so far intact.
//!
//! Every deduction is reported as a structured [`DeductionEvent`] to an
//! injectable [`DeductionObserver`], so callers can trace, render, or assert
//! on solver behavior without parsing log text.
//!
//! # Examples
//!
//! ```
//! use deduku_core::{Board, DigitGrid};
//! use deduku_solver::{EventLog, Solver, TechniqueSet};
//!
//! let grid: DigitGrid = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()?;
//!
//! let mut board = Board::new();
//! board.load(grid.cells())?;
//!
//! let mut log = EventLog::new();
//! let outcome = Solver::new().solve_with_observer(&mut board, &mut log);
//!
//! assert!(outcome.solved && outcome.valid);
//! assert!(!log.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    event::{DeductionEvent, DeductionObserver, EventLog, NullObserver},
    solver::{Outcome, SolveState, Solver},
    technique::{Technique, TechniqueSet},
};

mod event;
mod solver;
pub mod technique;

#[cfg(test)]
mod testing;

//! Core board model for the deduku solving engine.
//!
//! This crate provides the data structures the deduction engine works on:
//!
//! - [`digit`]: type-safe sudoku digits 1-9
//! - [`candidates`]: the per-cell 9-bit candidate mask ([`CandidateSet`])
//! - [`position`] / [`position_set`]: board coordinates and 81-bit
//!   position masks
//! - [`group`]: the 27 rows, columns, and boxes as index views
//! - [`cell`] / [`board`]: cell state and the board that owns all of it,
//!   including one-step assignment propagation, loading, validation, and
//!   snapshots
//! - [`digit_grid`]: the plain value grid used for parsing and rendering
//!
//! The board never searches or guesses; it only stores state and propagates
//! a single elimination step per assignment. Everything smarter lives in the
//! solver crate.
//!
//! # Examples
//!
//! ```
//! use deduku_core::{Board, Digit, DigitGrid, Position};
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
//! // Givens are marked and propagation has already narrowed the peers.
//! assert!(board.cell(Position::new(0, 0)).is_given());
//! assert!(!board.cell(Position::new(0, 2)).is_candidate(Digit::D5));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod board;
pub mod candidates;
pub mod cell;
pub mod digit;
pub mod digit_grid;
pub mod group;
pub mod position;
pub mod position_set;

pub use self::{
    board::{Board, LoadError, Snapshot},
    candidates::CandidateSet,
    cell::Cell,
    digit::Digit,
    digit_grid::{DigitGrid, ParseGridError},
    group::{Group, GroupKind},
    position::Position,
    position_set::PositionSet,
};

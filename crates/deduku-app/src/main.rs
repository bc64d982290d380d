//! Command-line front end for the deduku engine.
//!
//! Reads a puzzle file, runs the deduction solver, and prints the board
//! before and after along with the solve summary. With `--trace`, every
//! deduction event is printed as it happens. All file reading and board
//! rendering lives here; the engine itself only sees parsed grids and emits
//! structured events.

use std::{fs, path::PathBuf};

use anyhow::{Context as _, Result};
use clap::Parser;
use deduku_core::{Board, DigitGrid};
use deduku_solver::{DeductionEvent, DeductionObserver, NullObserver, Solver, TechniqueSet};

/// Solve a 9×9 sudoku by logical deduction, without guessing.
#[derive(Debug, Parser)]
#[command(name = "deduku", version, about)]
struct Args {
    /// Path to the puzzle file: digits 1-9 for givens, `.`, `_`, or `0` for
    /// blanks, whitespace ignored.
    puzzle: PathBuf,

    /// Print every deduction as it is made.
    #[arg(long)]
    trace: bool,

    /// Disable the X-Wing technique.
    #[arg(long)]
    no_x_wing: bool,
}

/// Prints deduction events as they arrive.
#[derive(Debug, Default)]
struct TraceObserver {
    count: usize,
}

impl DeductionObserver for TraceObserver {
    fn on_event(&mut self, event: &DeductionEvent) {
        self.count += 1;
        println!("  [{:4}] {event}", self.count);
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let text = fs::read_to_string(&args.puzzle)
        .with_context(|| format!("failed to read {}", args.puzzle.display()))?;
    let grid: DigitGrid = text
        .parse()
        .with_context(|| format!("failed to parse {}", args.puzzle.display()))?;

    let mut board = Board::new();
    board
        .load(grid.cells())
        .context("failed to load the puzzle")?;

    println!("{grid}");

    let mut techniques = TechniqueSet::all();
    if args.no_x_wing {
        techniques -= TechniqueSet::X_WING;
    }
    let solver = Solver::with_techniques(techniques);

    let outcome = if args.trace {
        let mut observer = TraceObserver::default();
        solver.solve_with_observer(&mut board, &mut observer)
    } else {
        solver.solve_with_observer(&mut board, &mut NullObserver)
    };

    println!("{}", board.to_digit_grid());
    if outcome.solved {
        println!("solved in {} passes", outcome.passes);
    } else {
        println!("stalled after {} passes, unsolved", outcome.passes);
        log::info!("{} cells remain open", board.unassigned().len());
    }
    if !outcome.valid {
        println!("warning: board is not valid");
    }

    std::process::exit(i32::from(!(outcome.solved && outcome.valid)));
}

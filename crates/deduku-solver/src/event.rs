//! Structured deduction events and the observer that receives them.
//!
//! Every technique reports what it did through [`DeductionEvent`]s delivered
//! to an injected [`DeductionObserver`]. This is the engine's only outward
//! notification channel: there is no free-text logging inside the solving
//! logic, so observers can assert on solver behavior without parsing
//! strings, and front ends can render the trace however they like.

use std::fmt::{self, Display, Write as _};

use deduku_core::{CandidateSet, Digit, GroupKind, Position, PositionSet};

use crate::technique::Technique;

/// One deduction made by a technique.
///
/// Events are emitted only for actual state changes: an `Assigned` event
/// means a cell received a value, an `Eliminated` event means at least one
/// candidate bit was really cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeductionEvent {
    /// A technique assigned a value to a cell.
    Assigned {
        /// The technique that made the assignment.
        technique: Technique,
        /// The assigned cell.
        position: Position,
        /// The assigned digit.
        digit: Digit,
        /// The group kind that justified the assignment, if the reasoning
        /// was group-local (a hidden single names its group; a naked single
        /// needs none).
        group: Option<GroupKind>,
    },
    /// A technique removed candidates from one or more cells.
    Eliminated {
        /// The technique that made the elimination.
        technique: Technique,
        /// The cells whose masks changed.
        positions: PositionSet,
        /// The digits removed from those masks.
        digits: CandidateSet,
        /// The group kind the elimination was reasoned over, if any.
        group: Option<GroupKind>,
    },
}

impl DeductionEvent {
    /// Returns the technique that produced this event.
    #[must_use]
    pub const fn technique(&self) -> Technique {
        match self {
            DeductionEvent::Assigned { technique, .. }
            | DeductionEvent::Eliminated { technique, .. } => *technique,
        }
    }
}

impl Display for DeductionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeductionEvent::Assigned {
                technique,
                position,
                digit,
                group,
            } => {
                write!(f, "{technique}: placed {digit} at {position}")?;
                if let Some(kind) = group {
                    write!(f, " ({kind})")?;
                }
                Ok(())
            }
            DeductionEvent::Eliminated {
                technique,
                positions,
                digits,
                group,
            } => {
                write!(f, "{technique}: removed {digits:?} from ")?;
                for (i, pos) in positions.into_iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{pos}")?;
                }
                if let Some(kind) = group {
                    f.write_char(' ')?;
                    write!(f, "({kind})")?;
                }
                Ok(())
            }
        }
    }
}

/// Receives deduction events as the solver makes progress.
pub trait DeductionObserver {
    /// Called once per deduction, in the order the solver made them.
    fn on_event(&mut self, event: &DeductionEvent);
}

/// An observer that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl DeductionObserver for NullObserver {
    fn on_event(&mut self, _event: &DeductionEvent) {}
}

/// An observer that records every event, for tests and tracing.
///
/// # Examples
///
/// ```
/// use deduku_core::Board;
/// use deduku_solver::{EventLog, Solver};
///
/// let mut board = Board::new();
/// let mut log = EventLog::new();
/// let outcome = Solver::new().solve_with_observer(&mut board, &mut log);
///
/// // An empty board offers nothing to deduce.
/// assert!(!outcome.solved);
/// assert!(log.is_empty());
/// ```
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    events: Vec<DeductionEvent>,
}

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Returns the recorded events in emission order.
    #[must_use]
    pub fn events(&self) -> &[DeductionEvent] {
        &self.events
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Forgets all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl DeductionObserver for EventLog {
    fn on_event(&mut self, event: &DeductionEvent) {
        self.events.push(*event);
    }
}

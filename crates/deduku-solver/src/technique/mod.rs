//! The deduction techniques.
//!
//! One module per technique, each a pure candidate-narrowing (or assigning)
//! rule over a cell and/or a group. Techniques never add a candidate back
//! and never detect board-level contradictions; they report progress
//! through their return value and describe it through deduction events.
//! The [`Solver`](crate::Solver) owns the order in which they run.

use std::fmt::{self, Display};

use bitflags::bitflags;

pub(crate) mod box_line;
pub(crate) mod naked_pair;
pub(crate) mod naked_triple;
pub(crate) mod pointing;
pub(crate) mod singles;
pub(crate) mod x_wing;

/// Identifies a deduction technique, in events and configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Technique {
    /// Naked single and hidden single, combined in one sweep.
    Singles,
    /// Two cells of a group sharing the same two candidates.
    NakedPair,
    /// Three cells of a group confined to the same three candidates.
    NakedTriple,
    /// A value confined to one box within a row or column.
    BoxLine,
    /// A value confined to one row or column segment within a box.
    Pointing,
    /// The X-Wing rectangle pattern across two lines.
    XWing,
}

impl Technique {
    /// All techniques, in the order the scan loop runs them.
    pub const ALL: [Self; 6] = [
        Self::Singles,
        Self::NakedPair,
        Self::NakedTriple,
        Self::BoxLine,
        Self::Pointing,
        Self::XWing,
    ];

    /// Returns the technique's display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Technique::Singles => "singles",
            Technique::NakedPair => "naked pair",
            Technique::NakedTriple => "naked triple",
            Technique::BoxLine => "box-line reduction",
            Technique::Pointing => "pointing",
            Technique::XWing => "x-wing",
        }
    }

    /// Returns the [`TechniqueSet`] flag selecting this technique.
    #[must_use]
    pub const fn flag(self) -> TechniqueSet {
        match self {
            Technique::Singles => TechniqueSet::SINGLES,
            Technique::NakedPair => TechniqueSet::NAKED_PAIR,
            Technique::NakedTriple => TechniqueSet::NAKED_TRIPLE,
            Technique::BoxLine => TechniqueSet::BOX_LINE,
            Technique::Pointing => TechniqueSet::POINTING,
            Technique::XWing => TechniqueSet::X_WING,
        }
    }
}

impl Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// The set of techniques a [`Solver`](crate::Solver) is allowed to use.
    ///
    /// Disabling a technique removes it from the pass without changing the
    /// order of the rest. The default is every technique.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TechniqueSet: u8 {
        /// Naked and hidden singles.
        const SINGLES = 1 << 0;
        /// Naked pairs.
        const NAKED_PAIR = 1 << 1;
        /// Naked triples.
        const NAKED_TRIPLE = 1 << 2;
        /// Box-line reduction.
        const BOX_LINE = 1 << 3;
        /// Pointing (number claiming).
        const POINTING = 1 << 4;
        /// X-Wing.
        const X_WING = 1 << 5;
    }
}

impl Default for TechniqueSet {
    fn default() -> Self {
        Self::all()
    }
}

impl From<Technique> for TechniqueSet {
    fn from(technique: Technique) -> Self {
        technique.flag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matches_flags() {
        let mut combined = TechniqueSet::empty();
        for technique in Technique::ALL {
            assert!(!combined.contains(technique.flag()));
            combined |= technique.flag();
        }
        assert_eq!(combined, TechniqueSet::all());
        assert_eq!(TechniqueSet::default(), TechniqueSet::all());
    }

    #[test]
    fn test_names_are_distinct() {
        for (i, a) in Technique::ALL.iter().enumerate() {
            for b in &Technique::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
        assert_eq!(Technique::XWing.to_string(), "x-wing");
    }
}

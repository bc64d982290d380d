//! Rows, columns, and boxes.
//!
//! A [`Group`] is one of the 27 fixed cell collections of the board: 9 rows,
//! 9 columns, and 9 boxes. Groups are index-based views over positions, not
//! owners of cells; the [`Board`](crate::Board) owns all cell storage, so
//! there are no reference cycles to manage.

use std::fmt::{self, Display};

use crate::{position::Position, position_set::PositionSet};

/// The kind of a group: row, column, or box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    /// A row.
    Row,
    /// A column.
    Column,
    /// A 3×3 box.
    Box,
}

impl Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GroupKind::Row => "row",
            GroupKind::Column => "column",
            GroupKind::Box => "box",
        };
        f.write_str(name)
    }
}

/// One of the 27 groups of the board.
///
/// Each group holds exactly 9 positions, addressed by a slot in the range
/// 0-8. The slot convention is fixed: slot *k* of a row is the cell at
/// column *k*, slot *k* of a column is the cell at row *k*, and slot *k* of
/// a box is the cell whose in-box slot is *k*. Box-line reduction and X-Wing
/// rely on this correspondence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    /// A row identified by its row index (0-8).
    Row {
        /// Row index (0-8).
        row: u8,
    },
    /// A column identified by its column index (0-8).
    Column {
        /// Column index (0-8).
        col: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl Group {
    /// All rows, indexed by row.
    pub const ROWS: [Self; 9] = {
        let mut table = [Self::Row { row: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            table[i] = Self::Row { row: i as u8 };
            i += 1;
        }
        table
    };

    /// All columns, indexed by column.
    pub const COLUMNS: [Self; 9] = {
        let mut table = [Self::Column { col: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            table[i] = Self::Column { col: i as u8 };
            i += 1;
        }
        table
    };

    /// All boxes, indexed by box.
    pub const BOXES: [Self; 9] = {
        let mut table = [Self::Box { index: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            table[i] = Self::Box { index: i as u8 };
            i += 1;
        }
        table
    };

    /// All 27 groups in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { row: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { row: i as u8 };
            all[i + 9] = Self::Column { col: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Returns the three groups containing a position, in box, row, column
    /// order.
    ///
    /// The ordering matches the order in which the scan loop plays each
    /// cell's groups through the techniques.
    #[must_use]
    pub const fn containing(pos: Position) -> [Self; 3] {
        [
            Self::Box {
                index: pos.box_index(),
            },
            Self::Row { row: pos.row() },
            Self::Column { col: pos.col() },
        ]
    }

    /// Returns the kind of this group.
    #[must_use]
    pub const fn kind(self) -> GroupKind {
        match self {
            Group::Row { .. } => GroupKind::Row,
            Group::Column { .. } => GroupKind::Column,
            Group::Box { .. } => GroupKind::Box,
        }
    }

    /// Returns the position at the given slot of this group.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not in the range 0-8.
    #[must_use]
    pub const fn cell_at(self, slot: u8) -> Position {
        assert!(slot < 9);
        match self {
            Group::Row { row } => Position::new(row, slot),
            Group::Column { col } => Position::new(slot, col),
            Group::Box { index } => Position::from_box(index, slot),
        }
    }

    /// Returns the nine positions of this group in slot order.
    #[must_use]
    pub fn cells(self) -> [Position; 9] {
        std::array::from_fn(|slot| {
            #[expect(clippy::cast_possible_truncation)]
            let slot = slot as u8;
            self.cell_at(slot)
        })
    }

    /// Returns the membership mask of this group.
    #[must_use]
    pub const fn positions(self) -> PositionSet {
        match self {
            Group::Row { row } => PositionSet::ROWS[row as usize],
            Group::Column { col } => PositionSet::COLUMNS[col as usize],
            Group::Box { index } => PositionSet::BOXES[index as usize],
        }
    }

    /// Returns `true` if the position belongs to this group.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        self.positions().contains(pos)
    }
}

impl Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Group::Row { row } => write!(f, "row {row}"),
            Group::Column { col } => write!(f, "column {col}"),
            Group::Box { index } => write!(f, "box {index}"),
        }
    }
}

//! Plain value grids: the parsed input and rendered output form.
//!
//! [`DigitGrid`] carries only assigned values, no candidate state. It is
//! what a loader parses puzzle text into before handing it to
//! [`Board::load`](crate::Board::load), and what renderers print.

use std::{
    fmt::{self, Display, Write as _},
    str::FromStr,
};

use derive_more::{Display as DeriveDisplay, Error};

use crate::{digit::Digit, position::Position};

/// Error returned when parsing a grid string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, DeriveDisplay, Error)]
pub enum ParseGridError {
    /// A character that is neither a digit, an empty-cell marker, nor
    /// whitespace.
    #[display("invalid character in grid: {character:?}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
    },
    /// The string did not describe exactly 81 cells.
    #[display("expected 81 cells in grid, got {count}")]
    WrongCellCount {
        /// Number of cells actually described.
        count: usize,
    },
}

/// A 9×9 grid of assigned values.
///
/// # Grid strings
///
/// [`FromStr`] accepts the digits `1`-`9` for filled cells and `.`, `_`, or
/// `0` for empty ones; all whitespace is ignored, so grids can be laid out
/// in 9 readable rows:
///
/// ```
/// use deduku_core::{Digit, DigitGrid, Position};
///
/// let grid: DigitGrid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
///
/// assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
/// assert_eq!(grid.get(Position::new(0, 2)), None);
/// # Ok::<(), deduku_core::ParseGridError>(())
/// ```
///
/// [`Display`] writes the same shape back out, with `_` for empty cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the value at a position, if any.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets or clears the value at a position.
    pub fn set(&mut self, pos: Position, value: Option<Digit>) {
        self.cells[pos.index()] = value;
    }

    /// Returns all 81 cells in row-major order.
    ///
    /// This is the shape [`Board::load`](crate::Board::load) consumes.
    #[must_use]
    pub const fn cells(&self) -> &[Option<Digit>; 81] {
        &self.cells
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, ParseGridError> {
        let mut cells = [None; 81];
        let mut count = 0;
        for character in s.chars() {
            if character.is_whitespace() {
                continue;
            }
            let value = match character {
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation)]
                    let value = character as u8 - b'0';
                    Some(Digit::from_value(value))
                }
                '.' | '_' | '0' => None,
                _ => return Err(ParseGridError::InvalidCharacter { character }),
            };
            if count < 81 {
                cells[count] = value;
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::WrongCellCount { count });
        }
        Ok(Self { cells })
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            for col in 0..9 {
                if col > 0 && col % 3 == 0 {
                    f.write_char(' ')?;
                }
                match self.get(Position::new(row, col)) {
                    Some(digit) => write!(f, "{digit}")?,
                    None => f.write_char('_')?,
                }
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::digit::Digit::*;

    use super::*;

    #[test]
    fn test_parse_compact_string() {
        let compact = format!("{}.", "1".repeat(80));
        let grid: DigitGrid = compact.parse().unwrap();
        assert_eq!(grid.get(Position::new(0, 0)), Some(D1));
        assert_eq!(grid.get(Position::new(8, 8)), None);
        assert_eq!(grid.filled_count(), 80);
    }

    #[test]
    fn test_parse_rejects_short_input() {
        let err = "123".parse::<DigitGrid>().unwrap_err();
        assert_eq!(err, ParseGridError::WrongCellCount { count: 3 });
    }

    #[test]
    fn test_parse_rejects_long_input() {
        let err = ".".repeat(82).parse::<DigitGrid>().unwrap_err();
        assert_eq!(err, ParseGridError::WrongCellCount { count: 82 });
    }

    #[test]
    fn test_parse_rejects_invalid_character() {
        let err = "x".repeat(81).parse::<DigitGrid>().unwrap_err();
        assert_eq!(err, ParseGridError::InvalidCharacter { character: 'x' });
    }

    #[test]
    fn test_display_round_trips() {
        let grid: DigitGrid = "
            53_ _7_ ___
            6__ 195 ___
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
        "
        .parse()
        .unwrap();

        let rendered = grid.to_string();
        assert!(rendered.starts_with("53_ _7_ ___\n"));
        let reparsed: DigitGrid = rendered.parse().unwrap();
        assert_eq!(reparsed, grid);
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = DigitGrid::new();
        let pos = Position::new(4, 4);
        grid.set(pos, Some(D9));
        assert_eq!(grid.get(pos), Some(D9));
        grid.set(pos, None);
        assert_eq!(grid.get(pos), None);
        assert_eq!(grid.filled_count(), 0);
    }
}

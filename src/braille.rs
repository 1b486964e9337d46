//! Six-dot braille cells in their textual 'O'/'.' notation
//!
//! A cell is written as six symbols, reading the 2x3 dot matrix row by row:
//!
//! ```text
//! +---+---+
//! | 1 | 4 |    "O.O.O." = dots 1, 2, 3
//! +---+---+
//! | 2 | 5 |
//! +---+---+
//! | 3 | 6 |
//! +---+---+
//! ```
//!
//! `'O'` marks a raised dot and `'.'` a flat one.

use std::str::FromStr;

use enumset::{EnumSet, EnumSetType};
use log::debug;

/// Number of symbols in the textual notation of one cell
pub const CELL_WIDTH: usize = 6;

/// Symbol for a raised dot
pub const RAISED: char = 'O';

/// Symbol for a flat dot
pub const FLAT: char = '.';

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("Invalid braille {character:?}")]
    InvalidBraille { character: Option<char> },
    #[error("Expected 6 braille symbols, got {0}")]
    InvalidLength(usize),
}

#[derive(EnumSetType, Debug)]
pub enum BrailleDot {
    Dot1,
    Dot2,
    Dot3,
    Dot4,
    Dot5,
    Dot6,
}

/// The dot at each symbol position of the textual notation
const POSITIONS: [BrailleDot; CELL_WIDTH] = [
    BrailleDot::Dot1,
    BrailleDot::Dot4,
    BrailleDot::Dot2,
    BrailleDot::Dot5,
    BrailleDot::Dot3,
    BrailleDot::Dot6,
];

/// A single braille cell, i.e. the set of its raised dots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell(EnumSet<BrailleDot>);

impl Cell {
    pub const fn new(dots: EnumSet<BrailleDot>) -> Self {
        Cell(dots)
    }

    /// A cell without any raised dots
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<BrailleDot> for Cell {
    fn from_iter<T: IntoIterator<Item = BrailleDot>>(iter: T) -> Self {
        Cell(EnumSet::from_iter(iter))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for dot in POSITIONS {
            let symbol = if self.0.contains(dot) { RAISED } else { FLAT };
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

impl FromStr for Cell {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let count = s.chars().count();
        if count != CELL_WIDTH {
            return Err(ParseError::InvalidLength(count));
        }
        s.chars()
            .zip(POSITIONS)
            .filter_map(|(symbol, dot)| match symbol {
                RAISED => Some(Ok(dot)),
                FLAT => None,
                invalid => Some(Err(ParseError::InvalidBraille {
                    character: Some(invalid),
                })),
            })
            .collect()
    }
}

/// Is `c` one of the two symbols of the cell notation?
pub fn is_braille_symbol(c: char) -> bool {
    matches!(c, RAISED | FLAT)
}

/// Iterator over the consecutive cells of a braille string
///
/// The input is cut into groups of [`CELL_WIDTH`] symbols. A trailing group with fewer symbols is
/// dropped.
#[derive(Debug, Clone)]
pub struct Cells<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Cells<'a> {
    type Item = Result<Cell, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let end = self
            .rest
            .char_indices()
            .nth(CELL_WIDTH)
            .map_or(self.rest.len(), |(i, _)| i);
        let (group, rest) = self.rest.split_at(end);
        self.rest = rest;
        if group.chars().count() < CELL_WIDTH {
            debug!("Dropping incomplete cell {:?}", group);
            return None;
        }
        Some(group.parse())
    }
}

/// Split `input` into cells of [`CELL_WIDTH`] symbols each
pub fn cells(input: &str) -> Cells<'_> {
    Cells { rest: input }
}

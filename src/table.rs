//! The alphabet table
//!
//! Maps the 26 lower case letters and the ten digits to braille cells and back. Digits reuse the
//! cells of the letters `a` to `j` (`1` to `9` followed by `0`), so a digit cell is only read as a
//! digit after a [`NUMBER_SIGN`]. Upper case letters are written as the [`CAPITAL_SIGN`] followed
//! by the cell of the lower case letter.

use std::{collections::HashMap, sync::LazyLock};

use enumset::{EnumSet, enum_set};

use crate::braille::{BrailleDot::*, Cell};

/// Indicates that the next cell is an upper case letter
pub const CAPITAL_SIGN: Cell = Cell::new(enum_set!(Dot6));

/// Indicates that the next cell is a digit
pub const NUMBER_SIGN: Cell = Cell::new(enum_set!(Dot3 | Dot4 | Dot5 | Dot6));

/// The empty cell
pub const SPACE: Cell = Cell::new(EnumSet::empty());

const LETTERS: [(char, Cell); 26] = [
    ('a', Cell::new(enum_set!(Dot1))),
    ('b', Cell::new(enum_set!(Dot1 | Dot2))),
    ('c', Cell::new(enum_set!(Dot1 | Dot4))),
    ('d', Cell::new(enum_set!(Dot1 | Dot4 | Dot5))),
    ('e', Cell::new(enum_set!(Dot1 | Dot5))),
    ('f', Cell::new(enum_set!(Dot1 | Dot2 | Dot4))),
    ('g', Cell::new(enum_set!(Dot1 | Dot2 | Dot4 | Dot5))),
    ('h', Cell::new(enum_set!(Dot1 | Dot2 | Dot5))),
    ('i', Cell::new(enum_set!(Dot2 | Dot4))),
    ('j', Cell::new(enum_set!(Dot2 | Dot4 | Dot5))),
    ('k', Cell::new(enum_set!(Dot1 | Dot3))),
    ('l', Cell::new(enum_set!(Dot1 | Dot2 | Dot3))),
    ('m', Cell::new(enum_set!(Dot1 | Dot3 | Dot4))),
    ('n', Cell::new(enum_set!(Dot1 | Dot3 | Dot4 | Dot5))),
    ('o', Cell::new(enum_set!(Dot1 | Dot3 | Dot5))),
    ('p', Cell::new(enum_set!(Dot1 | Dot2 | Dot3 | Dot4))),
    ('q', Cell::new(enum_set!(Dot1 | Dot2 | Dot3 | Dot4 | Dot5))),
    ('r', Cell::new(enum_set!(Dot1 | Dot2 | Dot3 | Dot5))),
    ('s', Cell::new(enum_set!(Dot2 | Dot3 | Dot4))),
    ('t', Cell::new(enum_set!(Dot2 | Dot3 | Dot4 | Dot5))),
    ('u', Cell::new(enum_set!(Dot1 | Dot3 | Dot6))),
    ('v', Cell::new(enum_set!(Dot1 | Dot2 | Dot3 | Dot6))),
    ('w', Cell::new(enum_set!(Dot2 | Dot4 | Dot5 | Dot6))),
    ('x', Cell::new(enum_set!(Dot1 | Dot3 | Dot4 | Dot6))),
    ('y', Cell::new(enum_set!(Dot1 | Dot3 | Dot4 | Dot5 | Dot6))),
    ('z', Cell::new(enum_set!(Dot1 | Dot3 | Dot5 | Dot6))),
];

/// The digits in the order of the letters whose cells they share
const DIGITS: [char; 10] = ['1', '2', '3', '4', '5', '6', '7', '8', '9', '0'];

/// The process wide alphabet table, compiled on first use
pub static TABLE: LazyLock<AlphabetTable> = LazyLock::new(AlphabetTable::compile);

/// Lookup tables between cells and characters in both directions
#[derive(Debug)]
pub struct AlphabetTable {
    letters: HashMap<Cell, char>,
    digits: HashMap<Cell, char>,
    letter_cells: HashMap<char, Cell>,
    digit_cells: HashMap<char, Cell>,
}

impl AlphabetTable {
    /// Build the forward tables and derive the reverse tables from them by inversion
    pub fn compile() -> Self {
        let letters: HashMap<Cell, char> =
            LETTERS.into_iter().map(|(c, cell)| (cell, c)).collect();
        let digits: HashMap<Cell, char> = LETTERS
            .into_iter()
            .zip(DIGITS)
            .map(|((_, cell), digit)| (cell, digit))
            .collect();

        let letter_cells = letters.iter().map(|(cell, c)| (*c, *cell)).collect();
        let digit_cells = digits.iter().map(|(cell, c)| (*c, *cell)).collect();

        AlphabetTable {
            letters,
            digits,
            letter_cells,
            digit_cells,
        }
    }

    /// The lower case letter for `cell`
    pub fn letter(&self, cell: &Cell) -> Option<char> {
        self.letters.get(cell).copied()
    }

    /// The digit for `cell`, only meaningful after a [`NUMBER_SIGN`]
    pub fn digit(&self, cell: &Cell) -> Option<char> {
        self.digits.get(cell).copied()
    }

    /// The cell for the lower case letter `c`
    pub fn letter_cell(&self, c: char) -> Option<Cell> {
        self.letter_cells.get(&c).copied()
    }

    pub fn digit_cell(&self, c: char) -> Option<Cell> {
        self.digit_cells.get(&c).copied()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn letter_notation() {
        let expected = [
            "O.....", "O.O...", "OO....", "OO.O..", "O..O..", "OOO...", "OOOO..", "O.OO..",
            ".OO...", ".OOO..", "O...O.", "O.O.O.", "OO..O.", "OO.OO.", "O..OO.", "OOO.O.",
            "OOOOO.", "O.OOO.", ".OO.O.", ".OOOO.", "O...OO", "O.O.OO", ".OOO.O", "OO..OO",
            "OO.OOO", "O..OOO",
        ];
        let table = AlphabetTable::compile();
        for (c, notation) in ('a'..='z').zip(expected) {
            assert_eq!(
                table.letter_cell(c).map(|cell| cell.to_string()),
                Some(notation.to_string())
            );
        }
        assert_eq!(CAPITAL_SIGN.to_string(), ".....O");
        assert_eq!(NUMBER_SIGN.to_string(), ".O.OOO");
        assert_eq!(SPACE.to_string(), "......");
    }

    #[test]
    fn letters_are_distinct() {
        let cells: HashSet<Cell> = LETTERS.iter().map(|(_, cell)| *cell).collect();
        assert_eq!(cells.len(), 26);
        assert!(!cells.contains(&CAPITAL_SIGN));
        assert!(!cells.contains(&NUMBER_SIGN));
        assert!(!cells.contains(&SPACE));
    }

    #[test]
    fn digits_share_first_ten_letters() {
        let table = AlphabetTable::compile();
        for (letter, digit) in "abcdefghij".chars().zip("1234567890".chars()) {
            assert_eq!(table.letter_cell(letter), table.digit_cell(digit));
        }
        assert_eq!(table.digit(&table.letter_cell('k').unwrap()), None);
        assert_eq!(table.digit(&NUMBER_SIGN), None);
    }

    #[test]
    fn lookup_both_directions() {
        let table = AlphabetTable::compile();
        for c in 'a'..='z' {
            let cell = table.letter_cell(c).unwrap();
            assert_eq!(table.letter(&cell), Some(c));
        }
        for d in '0'..='9' {
            let cell = table.digit_cell(d).unwrap();
            assert_eq!(table.digit(&cell), Some(d));
        }
        assert_eq!(table.letter_cell('A'), None);
        assert_eq!(table.letter(&CAPITAL_SIGN), None);
        assert_eq!(table.letter(&SPACE), None);
    }

    #[test]
    fn shared_table() {
        assert_eq!(TABLE.letter_cell('z'), Some(LETTERS[25].1));
    }
}

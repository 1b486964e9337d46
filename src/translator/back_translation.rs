//! State of a back-translation from braille cells to text
//!
//! The indicator cells do not produce any text themselves, they only change how the next cell is
//! read. [`Pending`] records which indicators are waiting for their cell and
//! [`Pending::advance`] is the transition for a single cell.

use log::debug;

use crate::{
    braille::Cell,
    table::{AlphabetTable, CAPITAL_SIGN, NUMBER_SIGN, SPACE},
};

/// Indicators that have been read but not yet applied
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pending {
    /// The next letter is upper case
    pub capital: bool,
    /// The next cell is a digit
    pub number: bool,
}

impl Pending {
    /// Consume `cell` and return the new state together with the character it translates to.
    ///
    /// A pending number applies to exactly one cell, a pending capital to exactly one letter. A
    /// space clears both. Cells without a translation yield no character but still consume the
    /// pending indicator.
    pub fn advance(self, cell: &Cell, table: &AlphabetTable) -> (Pending, Option<char>) {
        if *cell == CAPITAL_SIGN {
            (Pending { capital: true, ..self }, None)
        } else if *cell == NUMBER_SIGN {
            (Pending { number: true, ..self }, None)
        } else if *cell == SPACE {
            (Pending::default(), Some(' '))
        } else if self.number {
            let digit = table.digit(cell);
            if digit.is_none() {
                debug!("No digit for cell {}", cell);
            }
            (Pending { number: false, ..self }, digit)
        } else {
            let letter = table.letter(cell).map(|c| {
                if self.capital {
                    c.to_ascii_uppercase()
                } else {
                    c
                }
            });
            if letter.is_none() {
                debug!("No letter for cell {}", cell);
            }
            (Pending { capital: false, ..self }, letter)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(notation: &str) -> Cell {
        notation.parse().unwrap()
    }

    #[test]
    fn indicators_set_pending() {
        let table = AlphabetTable::compile();
        let (pending, c) = Pending::default().advance(&CAPITAL_SIGN, &table);
        assert_eq!(
            pending,
            Pending {
                capital: true,
                number: false
            }
        );
        assert_eq!(c, None);
        let (pending, c) = pending.advance(&NUMBER_SIGN, &table);
        assert_eq!(
            pending,
            Pending {
                capital: true,
                number: true
            }
        );
        assert_eq!(c, None);
    }

    #[test]
    fn capital_applies_to_one_letter() {
        let table = AlphabetTable::compile();
        let (pending, c) = Pending::default().advance(&CAPITAL_SIGN, &table);
        let (pending, a) = pending.advance(&cell("O....."), &table);
        assert_eq!((c, a), (None, Some('A')));
        let (pending, b) = pending.advance(&cell("O.O..."), &table);
        assert_eq!(b, Some('b'));
        assert_eq!(pending, Pending::default());
    }

    #[test]
    fn number_applies_to_one_cell() {
        let table = AlphabetTable::compile();
        let (pending, _) = Pending::default().advance(&NUMBER_SIGN, &table);
        let (pending, one) = pending.advance(&cell("O....."), &table);
        let (_, a) = pending.advance(&cell("O....."), &table);
        assert_eq!((one, a), (Some('1'), Some('a')));
    }

    #[test]
    fn number_keeps_pending_capital() {
        let table = AlphabetTable::compile();
        let pending = Pending {
            capital: true,
            number: true,
        };
        let (pending, zero) = pending.advance(&cell(".OOO.."), &table);
        assert_eq!(zero, Some('0'));
        let (_, b) = pending.advance(&cell("O.O..."), &table);
        assert_eq!(b, Some('B'));
    }

    #[test]
    fn space_clears_pending() {
        let table = AlphabetTable::compile();
        let pending = Pending {
            capital: true,
            number: true,
        };
        assert_eq!(
            pending.advance(&SPACE, &table),
            (Pending::default(), Some(' '))
        );
    }

    #[test]
    fn unknown_cell_consumes_pending() {
        let table = AlphabetTable::compile();
        // dots 1-2-4-5-6 is neither a letter nor a digit
        let unknown = cell("OOOO.O");
        let pending = Pending {
            capital: false,
            number: true,
        };
        assert_eq!(pending.advance(&unknown, &table), (Pending::default(), None));
        let pending = Pending {
            capital: true,
            number: false,
        };
        assert_eq!(pending.advance(&unknown, &table), (Pending::default(), None));
        // a letter cell that has no digit reading
        let (pending, c) = Pending {
            capital: false,
            number: true,
        }
        .advance(&cell("O...O."), &table);
        assert_eq!((pending, c), (Pending::default(), None));
    }
}

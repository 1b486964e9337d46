use log::{debug, trace};

use crate::{
    braille::{Cell, cells, is_braille_symbol},
    table::{AlphabetTable, CAPITAL_SIGN, NUMBER_SIGN, SPACE, TABLE},
    translator::{
        back_translation::Pending,
        indication::{Indication, numeric},
    },
};

pub mod back_translation;
pub mod indication;

/// The direction of a translation
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    /// Translate from text to braille
    Forward,
    /// Translate from braille to text
    Backward,
}

/// The script an input is written in
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Script {
    Braille,
    English,
}

impl Script {
    /// Classify `input` by its characters.
    ///
    /// An input consisting only of braille symbols is [`Script::Braille`], anything else is
    /// [`Script::English`]. Consequently the empty string is braille.
    pub fn detect(input: &str) -> Self {
        if input.chars().all(is_braille_symbol) {
            Script::Braille
        } else {
            Script::English
        }
    }

    /// The direction in which input of this script is translated
    pub fn direction(&self) -> Direction {
        match self {
            Script::Braille => Direction::Backward,
            Script::English => Direction::Forward,
        }
    }
}

/// Translates between English text and braille cells using an [`AlphabetTable`]
///
/// A translator holds no state between calls, so a single instance can be shared freely.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'t> {
    table: &'t AlphabetTable,
}

impl Translator<'static> {
    /// A translator using the process wide [`TABLE`]
    pub fn new() -> Self {
        Translator { table: &*TABLE }
    }
}

impl Default for Translator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> Translator<'t> {
    pub fn with_table(table: &'t AlphabetTable) -> Self {
        Translator { table }
    }

    /// Detect the script of `input` and translate it in the matching direction
    pub fn translate(&self, input: &str) -> String {
        let direction = Script::detect(input).direction();
        debug!("Translating {:?} in direction {:?}", input, direction);
        match direction {
            Direction::Forward => self.forward(input),
            Direction::Backward => self.backward(input),
        }
    }

    /// Translate English text to braille cells.
    ///
    /// Characters other than letters, digits and space are dropped.
    pub fn forward(&self, input: &str) -> String {
        self.encode(input).iter().map(Cell::to_string).collect()
    }

    /// Translate English text to a sequence of braille cells
    pub fn encode(&self, input: &str) -> Vec<Cell> {
        let mut numeric = numeric::Indicator::new();
        let mut output = Vec::new();
        for c in input.chars() {
            let indication = numeric.next(c);
            if c.is_ascii_digit() {
                if indication == Some(Indication::NumericStart) {
                    output.push(NUMBER_SIGN);
                }
                output.extend(self.table.digit_cell(c));
            } else if c.is_alphabetic() {
                let mut lower = c.to_lowercase();
                let cell = match (lower.next(), lower.next()) {
                    (Some(l), None) => self.table.letter_cell(l),
                    _ => None,
                };
                match cell {
                    Some(cell) => {
                        if Indication::for_letter(c) == Some(Indication::Uppercase) {
                            output.push(CAPITAL_SIGN);
                        }
                        output.push(cell);
                    }
                    None => debug!("No cell for letter {:?}", c),
                }
            } else if c == ' ' {
                output.push(SPACE);
            } else {
                debug!("Ignoring character {:?}", c);
            }
        }
        output
    }

    /// Translate braille cells in 'O'/'.' notation back to English text.
    ///
    /// The input is cut into cells of six symbols, an incomplete trailing cell is dropped. Cells
    /// that are not in the table are dropped as well.
    pub fn backward(&self, input: &str) -> String {
        let (_, output) = cells(input)
            .filter_map(|cell| {
                cell.inspect_err(|e| debug!("Ignoring cell: {}", e)).ok()
            })
            .fold(
                (Pending::default(), String::new()),
                |(pending, mut output), cell| {
                    let (pending, c) = pending.advance(&cell, self.table);
                    trace!("{} -> {:?}, {:?}", cell, c, pending);
                    output.extend(c);
                    (pending, output)
                },
            );
        output
    }
}

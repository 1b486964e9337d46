//! Braille indication
//!
//! Braille indicators are cells which are inserted into the braille text to change the meaning of
//! the cell that follows, such as capitalization or a digit instead of a letter.
//!
//! The numeric indication is handled with the help of a simple state machine that keeps track
//! whether a forward translation is currently in numeric mode. When given the next character to
//! translate it notifies the caller whether an indication is required by optionally returning an
//! [`Indication`]. Capitalization needs no state, every upper case letter gets its own
//! [`Indication::Uppercase`].

pub mod numeric;

/// Possible indication events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indication {
    NumericStart,
    Uppercase,
}

impl Indication {
    /// The indication needed in front of the letter `c`, if any
    pub fn for_letter(c: char) -> Option<Indication> {
        c.is_uppercase().then_some(Indication::Uppercase)
    }
}

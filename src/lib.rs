//! Translate between English text and six-dot braille written as 'O'/'.' cells.
//!
//! ```
//! assert_eq!(braille::translate("abc"), "O.....O.O...OO....");
//! assert_eq!(braille::translate("O.....O.O...OO...."), "abc");
//! ```

pub mod braille;
pub mod table;
pub mod translator;

pub use braille::{Cell, ParseError};
pub use translator::{Direction, Script, Translator};

/// Translate `input` to braille or back to English, depending on its script.
///
/// Input consisting only of 'O' and '.' is read as braille, everything else as English text.
pub fn translate(input: &str) -> String {
    Translator::new().translate(input)
}

//! Numeric Braille indication
//!
//! [`Indicator`] is a simple state machine to keep track of the state of a forward translation. As
//! soon as a digit is encountered the state is changed to [`State::Numeric`] and an
//! [`Indication::NumericStart`] is emitted. A letter or a space changes the state back to
//! [`State::Default`] without any indication. All other characters leave the state untouched.

use crate::translator::indication::Indication;

/// Possible states for the [`Indicator`] state machine
#[derive(Debug, Clone, Copy, Default, PartialEq)]
enum State {
    #[default]
    Default,
    Numeric,
}

/// A very simple state machine to keep track when a numeric indication is required
#[derive(Debug, Clone, Default)]
pub struct Indicator {
    state: State,
}

impl Indicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The transition method of the numeric indication state machine.
    ///
    /// Returns [`Indication::NumericStart`] when `c` is a digit that starts a sequence of digits
    /// and `None` otherwise.
    pub fn next(&mut self, c: char) -> Option<Indication> {
        match (self.state, c) {
            (State::Default, '0'..='9') => {
                self.state = State::Numeric;
                Some(Indication::NumericStart)
            }
            (State::Numeric, ' ') => {
                self.state = State::Default;
                None
            }
            (State::Numeric, c) if c.is_alphabetic() => {
                self.state = State::Default;
                None
            }
            _ => None,
        }
    }

    #[cfg(test)]
    fn is_numeric(&self) -> bool {
        self.state == State::Numeric
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single lowercase Latin letter, `'a'..='z'`.
///
/// This is the only key type a frequency table accepts, so the 26-letter
/// alphabet bound is carried by the type rather than checked at each use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Letter(char);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LetterError {
    #[error("Not a lowercase Latin letter: {0:?}")]
    NotLatinLetter(char),
}

impl Letter {
    pub const COUNT: usize = 26;

    /// Map a raw character onto the alphabet.
    ///
    /// With `case_fold` set, `A-Z` fold to `a-z`. Only ASCII folding is
    /// applied: characters whose Unicode lowercase happens to be ASCII
    /// (e.g. U+212A KELVIN SIGN) are not letters here.
    pub fn fold(c: char, case_fold: bool) -> Option<Letter> {
        let c = if case_fold { c.to_ascii_lowercase() } else { c };
        Letter::try_from(c).ok()
    }

    /// The full alphabet in ascending order.
    pub fn alphabet() -> impl Iterator<Item = Letter> {
        ('a'..='z').map(Letter)
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Letter {
    type Error = LetterError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii_lowercase() {
            Ok(Letter(c))
        } else {
            Err(LetterError::NotLatinLetter(c))
        }
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.0
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

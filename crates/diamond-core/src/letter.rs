//! Validated uppercase letter used as diamond input.

use std::{fmt, str::FromStr};

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{DiamondError, Result},
    generator::validate,
};

/// An uppercase ASCII letter in the range A–Z.
///
/// Holding a `Letter` proves the input already passed validation, so the
/// row generator never has to deal with characters outside the alphabet.
///
/// Serializes as a one-character string.
///
/// # Examples
///
/// ```rust
/// use diamond_core::Letter;
///
/// let letter: Letter = "C".parse().unwrap();
/// assert_eq!(letter.index(), 2);
/// assert_eq!(letter.size(), 5);
/// assert!(Letter::new('c').is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Letter(u8);

impl Letter {
    /// The apex letter of every diamond.
    pub const A: Letter = Letter(b'A');

    /// The largest supported letter.
    pub const Z: Letter = Letter(b'Z');

    /// Validates `input` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns `DiamondError::InvalidInput` if `input` is not in A–Z.
    pub fn new(input: char) -> Result<Self> {
        if validate(input) {
            // A–Z is ASCII, the cast is lossless
            Ok(Self(input as u8))
        } else {
            Err(DiamondError::invalid_input(input))
        }
    }

    /// Iterates over every letter from A to Z.
    pub fn all() -> impl DoubleEndedIterator<Item = Letter> + ExactSizeIterator {
        (Self::A.0..=Self::Z.0).map(Letter)
    }

    /// The letter as a `char`.
    pub fn as_char(self) -> char {
        char::from(self.0)
    }

    /// 0-based offset from 'A'.
    pub fn index(self) -> usize {
        usize::from(self.0 - Self::A.0)
    }

    /// Side length of the diamond this letter produces.
    pub fn size(self) -> usize {
        2 * self.index() + 1
    }

    /// Letters from A up to and including this one.
    pub(crate) fn up_to(
        self,
    ) -> impl DoubleEndedIterator<Item = Letter> + ExactSizeIterator + Clone {
        (Self::A.0..=self.0).map(Letter)
    }
}

impl TryFrom<char> for Letter {
    type Error = DiamondError;

    fn try_from(input: char) -> Result<Self> {
        Self::new(input)
    }
}

impl FromStr for Letter {
    type Err = DiamondError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c),
            _ => Err(DiamondError::InvalidLength {
                len: s.chars().count(),
            }),
        }
    }
}

impl TryFrom<String> for Letter {
    type Error = DiamondError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.as_char()
    }
}

impl From<Letter> for String {
    fn from(letter: Letter) -> Self {
        letter.to_string()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

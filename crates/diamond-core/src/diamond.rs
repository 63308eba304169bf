//! The square block of rows produced for a letter.

use std::fmt;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::Serialize;

use crate::{
    generator::{generate_rows, ROW_SEPARATOR},
    letter::Letter,
};

/// A complete letter diamond.
///
/// The rows are built once from the letter and never change afterwards.
/// There are always `size` rows of `size` characters each, the block is
/// vertically and horizontally symmetric, and the middle row holds the
/// letter itself.
///
/// `Display` writes the rows separated by `"\n"` without a trailing
/// newline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Diamond {
    /// Letter at the widest point
    letter: Letter,

    /// Side length of the square, in rows and in characters per row
    size: usize,

    /// Rows from top to bottom
    rows: Vec<String>,
}

impl Diamond {
    /// Builds the diamond for `letter`.
    pub fn new(letter: Letter) -> Self {
        Self {
            rows: generate_rows(letter),
            size: letter.size(),
            letter,
        }
    }

    pub fn letter(&self) -> Letter {
        self.letter
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<String> {
        self.rows
    }

    /// The widest row, containing the diamond's own letter twice (or once
    /// for 'A').
    pub fn middle_row(&self) -> &str {
        &self.rows[self.letter.index()]
    }

    /// Joins the rows with an arbitrary separator.
    ///
    /// ```rust
    /// use diamond_core::{Diamond, Letter};
    ///
    /// let diamond = Diamond::new(Letter::new('B').unwrap());
    /// assert_eq!(diamond.join("|"), " A |B B| A ");
    /// ```
    pub fn join(&self, separator: &str) -> String {
        self.rows.join(separator)
    }
}

impl From<Letter> for Diamond {
    fn from(letter: Letter) -> Self {
        Self::new(letter)
    }
}

impl fmt::Display for Diamond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str(ROW_SEPARATOR)?;
            }
            f.write_str(row)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Diamond {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_a() {
        let diamond = Diamond::new(Letter::A);
        assert_eq!(diamond.letter(), Letter::A);
        assert_eq!(diamond.size(), 1);
        assert_eq!(diamond.rows(), ["A"]);
        assert_eq!(diamond.middle_row(), "A");
    }

    #[test]
    fn test_middle_row() {
        let diamond = Diamond::new(Letter::new('D').unwrap());
        assert_eq!(diamond.middle_row(), "D     D");
    }

    #[test]
    fn test_display_matches_join() {
        let diamond = Diamond::new(Letter::new('C').unwrap());
        assert_eq!(diamond.to_string(), diamond.join("\n"));
        assert_eq!(format!("{diamond}"), "  A  \n B B \nC   C\n B B \n  A  ");
    }

    #[test]
    fn test_iterates_rows() {
        let diamond = Diamond::from(Letter::new('B').unwrap());
        let rows: Vec<&str> = (&diamond).into_iter().map(String::as_str).collect();
        assert_eq!(rows, vec![" A ", "B B", " A "]);
        assert_eq!(diamond.into_rows().len(), 3);
    }
}

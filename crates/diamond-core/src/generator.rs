//! Diamond generation: validation, letter sequencing and row assembly.
//!
//! Everything here is a pure function of its input. Nothing is cached and
//! no state is shared between calls, so all operations are safe to call
//! from any number of threads.

use log::{debug, trace};

use crate::{diamond::Diamond, error::Result, letter::Letter};

/// Separator placed between rows by [`render`] and `Diamond`'s `Display`.
pub const ROW_SEPARATOR: &str = "\n";

/// Returns true only for an uppercase ASCII letter A–Z.
///
/// ```rust
/// use diamond_core::validate;
///
/// assert!(validate('A'));
/// assert!(!validate('a'));
/// assert!(!validate('0'));
/// ```
pub fn validate(input: char) -> bool {
    input.is_ascii_uppercase()
}

/// Yields every `(letter, row offset)` pair of the diamond from top to
/// bottom.
///
/// The ascending run `A..=letter` is followed by the same run reversed,
/// minus its first element so the widest row appears once. Offsets go
/// `0..N-1..0`.
///
/// ```rust
/// use diamond_core::{letter_sequence, Letter};
///
/// let pairs: Vec<_> = letter_sequence(Letter::new('C').unwrap()).collect();
/// assert_eq!(pairs, vec![('A', 0), ('B', 1), ('C', 2), ('B', 1), ('A', 0)]);
/// ```
pub fn letter_sequence(letter: Letter) -> impl Iterator<Item = (char, usize)> {
    let ascending = letter
        .up_to()
        .map(char::from)
        .enumerate()
        .map(|(offset, c)| (c, offset));

    ascending.clone().chain(ascending.rev().skip(1))
}

/// Builds the rows of the diamond for `letter`.
///
/// The result has `letter.size()` rows, each exactly `letter.size()`
/// characters wide.
///
/// ```rust
/// use diamond_core::{generate_rows, Letter};
///
/// let rows = generate_rows(Letter::new('B').unwrap());
/// assert_eq!(rows, vec![" A ", "B B", " A "]);
/// ```
pub fn generate_rows(letter: Letter) -> Vec<String> {
    let width = letter.index() + 1;
    debug!("Generating diamond rows for '{letter}'");

    letter_sequence(letter)
        .map(|(c, offset)| build_row(width, c, offset))
        .collect()
}

/// Validates `input` and builds the structured diamond.
///
/// # Errors
///
/// Returns `DiamondError::InvalidInput` if `input` is not in A–Z.
pub fn diamond(input: char) -> Result<Diamond> {
    let letter = Letter::new(input).map_err(|e| {
        debug!("Rejected diamond input: {e}");
        e
    })?;
    Ok(Diamond::new(letter))
}

/// Validates `input` and returns the diamond as one printable block, rows
/// separated by `"\n"` with no trailing newline.
///
/// # Errors
///
/// Returns `DiamondError::InvalidInput` if `input` is not in A–Z.
///
/// ```rust
/// use diamond_core::render;
///
/// assert_eq!(render('A').unwrap(), "A");
/// assert_eq!(render('B').unwrap(), " A \nB B\n A ");
/// assert!(render('?').is_err());
/// ```
pub fn render(input: char) -> Result<String> {
    diamond(input).map(|diamond| diamond.join(ROW_SEPARATOR))
}

/// One row: side padding, the letter, and for every row but the apex the
/// inner gap plus the mirrored letter.
fn build_row(width: usize, letter: char, offset: usize) -> String {
    let side = " ".repeat(width - offset - 1);

    let row = if offset == 0 {
        format!("{side}{letter}{side}")
    } else {
        let inner = " ".repeat(offset * 2 - 1);
        format!("{side}{letter}{inner}{letter}{side}")
    };

    trace!("Row {offset}: {row:?}");
    row
}

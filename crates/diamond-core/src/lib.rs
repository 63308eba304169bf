//! Core library for generating letter diamonds.
//!
//! Given an uppercase letter, the diamond runs from 'A' down to that letter
//! and back up to 'A', each row centered with spaces so the whole block is a
//! square of side `2 * (letter - 'A') + 1`:
//!
//! ```text
//!   A
//!  B B
//! C   C
//!  B B
//!   A
//! ```
//!
//! # Architecture
//!
//! - [`letter`]: the validated [`Letter`] input type
//! - [`generator`]: validation, letter sequencing and row construction
//! - [`diamond`](mod@diamond): the [`Diamond`] value and its text formatting
//! - [`error`]: the [`DiamondError`] type
//!
//! All operations are pure. Invalid input is reported through
//! [`DiamondError::InvalidInput`] rather than mixed into the output text.
//!
//! # Quick Start
//!
//! ```rust
//! use diamond_core::{generate_rows, render, Letter};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Printable block, rows separated by '\n'
//! let text = render('C')?;
//! println!("{text}");
//!
//! // Raw rows for custom layout
//! let rows = generate_rows(Letter::new('B')?);
//! assert_eq!(rows, vec![" A ", "B B", " A "]);
//!
//! // Anything outside A–Z is rejected
//! assert!(render('c').is_err());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod diamond;
pub mod error;
pub mod generator;
pub mod letter;

// Re-export commonly used types
pub use diamond::Diamond;
pub use error::{DiamondError, Result};
pub use generator::{diamond, generate_rows, letter_sequence, render, validate, ROW_SEPARATOR};
pub use letter::Letter;

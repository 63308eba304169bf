//! Error types for the diamond library.

use thiserror::Error;

/// Error type for all diamond operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiamondError {
    /// Character outside the uppercase A–Z range
    #[error("Invalid input '{}': input must be an uppercase letter A–Z", .input.escape_debug())]
    InvalidInput { input: char },
    /// Textual letter that is not exactly one character long
    #[error("Invalid input length {len}: expected exactly one character")]
    InvalidLength { len: usize },
}

impl DiamondError {
    /// Creates an invalid input error for the rejected character.
    pub fn invalid_input(input: char) -> Self {
        Self::InvalidInput { input }
    }

    /// Returns the rejected character, if the error carries one.
    pub fn input(&self) -> Option<char> {
        match self {
            Self::InvalidInput { input } => Some(*input),
            Self::InvalidLength { .. } => None,
        }
    }
}

/// Result type alias for diamond operations
pub type Result<T> = std::result::Result<T, DiamondError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = DiamondError::invalid_input('a');
        let message = err.to_string();
        assert!(message.contains("'a'"));
        assert!(message.contains("input must be an uppercase letter A–Z"));
        assert_eq!(err.input(), Some('a'));
    }

    #[test]
    fn test_invalid_input_escapes_control_chars() {
        let err = DiamondError::invalid_input('\n');
        assert!(err.to_string().contains("'\\n'"));
    }

    #[test]
    fn test_invalid_length_message() {
        let err = DiamondError::InvalidLength { len: 3 };
        assert_eq!(
            err.to_string(),
            "Invalid input length 3: expected exactly one character"
        );
        assert_eq!(err.input(), None);
    }
}

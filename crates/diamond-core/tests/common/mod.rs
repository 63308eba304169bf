//! Shared measurements for diamond integration tests.

#![allow(dead_code)]

/// Number of spaces before the first non-space character.
pub fn leading_spaces(row: &str) -> usize {
    row.chars().take_while(|c| *c == ' ').count()
}

/// Number of spaces after the last non-space character.
pub fn trailing_spaces(row: &str) -> usize {
    row.chars().rev().take_while(|c| *c == ' ').count()
}

/// Characters that are neither spaces nor line breaks.
pub fn ink(text: &str) -> usize {
    text.chars().filter(|c| *c != ' ' && *c != '\n').count()
}

/// Spaces between the two letters of a non-apex row.
pub fn inner_gap(row: &str) -> usize {
    row.trim().chars().filter(|c| *c == ' ').count()
}

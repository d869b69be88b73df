//! Positional checks for quoted and commented text.
//!
//! These only ask whether a marker appears anywhere before the first
//! occurrence of the needle. Quote parity is not tracked, so a statement
//! is expected to hold at most one quoted region.

pub const QUOTE: char = '"';
pub const COMMENT: &str = "//";

/// True if a quote appears before the first occurrence of `needle`.
pub fn inside_quotes(needle: &str, statement: &str) -> bool {
    precedes(statement.find(QUOTE), statement.find(needle))
}

/// True if a comment marker appears before the first occurrence of `needle`.
pub fn is_commented(needle: &str, statement: &str) -> bool {
    precedes(statement.find(COMMENT), statement.find(needle))
}

// A missing needle sorts after everything.
fn precedes(marker: Option<usize>, needle: Option<usize>) -> bool {
    match (marker, needle) {
        (Some(marker), Some(needle)) => marker < needle,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

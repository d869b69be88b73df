/*!
# Rust Language Module

This Rust module provides the text-level analysis of Duck statements:
spacing normalization, labels, tokens and statement classification.

*/

#[macro_use]
mod error;
mod kind;
mod line;
mod oracle;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use kind::{classify, StatementKind};
pub use line::{normalize, Line};
pub use oracle::{inside_quotes, is_commented, COMMENT, QUOTE};
pub use token::{element, Element, Operator, Token, Tokens};

/// 1-based line in the source file, when known.
pub type LineNumber = Option<usize>;

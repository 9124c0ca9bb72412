//! Error types.

use thiserror::Error;

/// Diagnostics reported when parsing in [strict mode][crate::config::ParseMode::Strict].
///
/// Positions are character offsets into the source.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The expression has no tokens.
    #[error("empty expression")]
    Empty,

    /// A character the tokenizer does not recognize.
    #[error("unrecognized character {ch:?} at {position}")]
    UnrecognizedChar { ch: char, position: usize },

    /// A `(` that is never closed.
    #[error("unclosed '(' at {0}")]
    UnclosedParen(usize),

    /// A `)` without a matching `(`.
    #[error("unmatched ')' at {0}")]
    UnmatchedParen(usize),

    /// A variable, `!` or `(` was expected.
    #[error("expected operand, found '{found}' at {position}")]
    ExpectedOperand { found: String, position: usize },

    /// A binary connective or `)` was expected.
    #[error("expected operator, found '{found}' at {position}")]
    ExpectedOperator { found: String, position: usize },

    /// The input ended while an operand was still expected.
    #[error("unexpected end of expression")]
    UnexpectedEnd,
}

/// Errors produced while turning an expression into a table.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The expression has more distinct variables than the configured limit.
    #[error("too many variables ({count}, at most {max} allowed)")]
    TooManyVariables { count: usize, max: usize },

    #[error("formatting failed")]
    Fmt(#[from] std::fmt::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

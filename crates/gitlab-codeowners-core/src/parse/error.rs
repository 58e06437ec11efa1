//! Error types for CODEOWNERS file parsing.
//!
//! Only a failing input stream aborts a parse. Section header errors are
//! recovered inside the parser, which treats the offending line as a rule.

use std::io;
use thiserror::Error;

/// An error that aborts parsing of a CODEOWNERS file.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The underlying text source failed while being read.
    #[error("error reading the CODEOWNERS content: {0}")]
    StreamRead(#[from] io::Error),
}

/// A reason why a line could not be parsed as a section header.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SectionHeaderError {
    /// The line does not start with `[` or `^[`.
    #[error("line is not a section header")]
    NotAHeader,

    /// The number of `[` differs from the number of `]`.
    #[error("no matching bracket count ({open} '[' vs {close} ']')")]
    UnbalancedBrackets {
        /// Number of opening brackets.
        open: usize,
        /// Number of closing brackets.
        close: usize,
    },

    /// More than two bracket pairs were found.
    #[error("too many brackets found ({count} pairs, at most 2 allowed)")]
    TooManyBrackets {
        /// Number of bracket pairs.
        count: usize,
    },

    /// The header splits into an unsupported number of parts.
    #[error("unexpected section header layout ({parts} parts)")]
    UnexpectedParts {
        /// Number of non-empty parts between the brackets.
        parts: usize,
    },
}

//! Completeness verdict for an input buffer.

use std::fmt;

/// Result of analyzing an accumulated input buffer.
///
/// Computed fresh from the full buffer on every attempt and never stored:
/// the caller keeps the buffer, the analyzer keeps nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The buffer forms a complete statement and can be submitted.
    Complete,
    /// The buffer needs more input; keep accumulating lines.
    Incomplete,
    /// The buffer is unrecoverably malformed; the caller must reset it
    /// instead of accumulating further.
    Invalid(InvalidReason),
}

/// Why a buffer was judged unrecoverable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// A closing bracket with no matching opener on the stack.
    UnexpectedCloser(char),
    /// An `end` token with no open block to close.
    UnexpectedEnd,
    /// The `!!` escape token: the user bailed out of a multiline entry.
    Abandoned,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedCloser(c) => write!(f, "unexpected closing bracket: '{c}'"),
            Self::UnexpectedEnd => write!(f, "'end' without a matching block opener"),
            Self::Abandoned => write!(f, "input abandoned"),
        }
    }
}

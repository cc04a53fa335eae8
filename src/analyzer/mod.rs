//! Statement completeness analysis for console input.
//!
//! Before a console submits accumulated input to the remote host it asks
//! [`evaluate`] whether the buffer already forms a complete, evaluable
//! statement. Two independent scans feed the decision: bracket/quote
//! balance ([`brackets`]) and block keyword nesting ([`blocks`]). Either
//! scan can veto with [`Verdict::Invalid`]; otherwise an unfinished scan
//! holds the buffer open with [`Verdict::Incomplete`].
//!
//! Everything here is pure: no I/O, no retained state, safe to call on
//! every keystroke over a growing buffer.

mod blocks;
mod brackets;
pub mod completion;
mod verdict;

pub use completion::SymbolTable;
pub use verdict::{InvalidReason, Verdict};

/// Classifies an input buffer as complete, incomplete, or unrecoverable.
///
/// Combination rule: any invalid scan makes the whole buffer invalid (the
/// bracket scan's reason wins when both fail); otherwise any incomplete
/// scan keeps the buffer open; otherwise the buffer is complete.
#[must_use]
pub fn evaluate(buffer: &str) -> Verdict {
    let bracket_scan = brackets::scan(buffer);
    let block_scan = blocks::scan(buffer);

    match (bracket_scan, block_scan) {
        (v @ Verdict::Invalid(_), _) | (_, v @ Verdict::Invalid(_)) => v,
        (Verdict::Incomplete, _) | (_, Verdict::Incomplete) => Verdict::Incomplete,
        _ => Verdict::Complete,
    }
}

//! Bracket and string-quote balance scan.

use super::verdict::{InvalidReason, Verdict};

/// Scans the buffer left to right, tracking open brackets and an active
/// string-quote delimiter.
///
/// Inside a quoted region bracket characters are inert; only the matching
/// quote character ends the region (escape sequences are not recognized).
/// Outside quotes, a closer must match the innermost opener or the buffer
/// is unrecoverable. A still-open quote or bracket at end of input means
/// the statement continues on the next line.
pub(crate) fn scan(buffer: &str) -> Verdict {
    let mut stack: Vec<char> = Vec::new();
    let mut delimiter: Option<char> = None;

    for c in buffer.chars() {
        if let Some(quote) = delimiter {
            if c == quote {
                delimiter = None;
            }
            continue;
        }
        match c {
            '\'' | '"' => delimiter = Some(c),
            '(' | '[' | '{' => stack.push(c),
            ')' | ']' | '}' => {
                if stack.pop() != Some(matching_opener(c)) {
                    return Verdict::Invalid(InvalidReason::UnexpectedCloser(c));
                }
            }
            _ => {}
        }
    }

    if delimiter.is_some() || !stack.is_empty() {
        Verdict::Incomplete
    } else {
        Verdict::Complete
    }
}

const fn matching_opener(closer: char) -> char {
    match closer {
        ')' => '(',
        ']' => '[',
        _ => '{',
    }
}

//! Block keyword nesting scan.

use super::verdict::{InvalidReason, Verdict};

/// Counts block openers against `end` closers over whitespace tokens.
///
/// Only `function` and `do` open a counted block: `while`/`for` loops share
/// their single `end` with the `do` they contain, so counting the loop
/// keyword as well would double-book it. Keywords glued to punctuation
/// (`end)`) are not separate tokens and do not count.
pub(crate) fn scan(buffer: &str) -> Verdict {
    let mut nesting: i64 = 0;

    for token in buffer.split_whitespace() {
        match token {
            "function" | "do" => nesting += 1,
            "end" => nesting -= 1,
            // Escape hatch: the user gives up on a multiline entry.
            "!!" => return Verdict::Invalid(InvalidReason::Abandoned),
            _ => {}
        }
        // More closers than openers can never recover, e.g. "do ... end end".
        if nesting < 0 {
            return Verdict::Invalid(InvalidReason::UnexpectedEnd);
        }
    }

    if nesting > 0 {
        Verdict::Incomplete
    } else {
        Verdict::Complete
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn matched_do_end_is_complete() {
        assert_eq!(scan("do\nprint(1)\nend"), Verdict::Complete);
        assert_eq!(scan("function f() return 1 end"), Verdict::Complete);
    }

    #[test]
    fn open_block_is_incomplete() {
        assert_eq!(scan("do\nprint(1)"), Verdict::Incomplete);
        assert_eq!(scan("function f()"), Verdict::Incomplete);
        assert_eq!(scan("do do end"), Verdict::Incomplete);
    }

    #[test]
    fn lone_end_is_invalid() {
        assert_eq!(scan("end"), Verdict::Invalid(InvalidReason::UnexpectedEnd));
    }

    #[test]
    fn surplus_end_is_invalid_even_after_balance() {
        assert_eq!(
            scan("do print(1) end end"),
            Verdict::Invalid(InvalidReason::UnexpectedEnd)
        );
    }

    #[test]
    fn abandon_token_short_circuits() {
        assert_eq!(scan("!!"), Verdict::Invalid(InvalidReason::Abandoned));
        assert_eq!(
            scan("do\nprint(1)\n!!"),
            Verdict::Invalid(InvalidReason::Abandoned)
        );
        // Even in an otherwise balanced buffer.
        assert_eq!(
            scan("do end !!"),
            Verdict::Invalid(InvalidReason::Abandoned)
        );
    }

    #[test]
    fn keywords_must_be_standalone_tokens() {
        // "end)" is one token and counts as nothing.
        assert_eq!(scan("do print(1) end)"), Verdict::Incomplete);
        assert_eq!(scan("doend"), Verdict::Complete);
    }

    #[test]
    fn while_loop_counts_through_its_do() {
        assert_eq!(scan("while true do print(1) end"), Verdict::Complete);
        assert_eq!(scan("for i=1,10 do"), Verdict::Incomplete);
    }

    #[test]
    fn empty_buffer_is_complete() {
        assert_eq!(scan(""), Verdict::Complete);
        assert_eq!(scan("   \n\t  "), Verdict::Complete);
    }
}

//! Search-result preview excerpts.
//!
//! Given a query and a document's text, [`excerpt`] produces the snippet
//! the documentation search page shows under each hit: a window centered
//! on the first match, `...`-delimited where it was cut, with every
//! occurrence of each query term wrapped in `<strong>` markup.
//!
//! All positions and window lengths are measured in characters, so
//! non-ASCII content never splits mid-glyph.

/// Builds a preview excerpt of `content` for `query`.
///
/// The match anchor is the first case-insensitive occurrence of the full
/// query or, failing that, of any individual query term (tried in order).
/// `window` is the excerpt length in characters; when `None`, it defaults
/// to twice the content length, which keeps the whole text and only adds
/// highlighting. Without any match at all the leading window of the
/// content is returned unhighlighted, `...`-suffixed when truncated.
#[must_use]
pub fn excerpt(query: &str, content: &str, window: Option<usize>) -> String {
    let chars: Vec<char> = content.chars().collect();
    let window = window.unwrap_or_else(|| chars.len().saturating_mul(2));
    let terms: Vec<&str> = query.split_whitespace().collect();

    let full = query.trim();
    let anchor = if full.is_empty() {
        None
    } else {
        find_ci(&chars, full)
            .map(|pos| (pos, full.chars().count()))
            .or_else(|| {
                terms
                    .iter()
                    .find_map(|term| find_ci(&chars, term).map(|pos| (pos, term.chars().count())))
            })
    };

    match anchor {
        Some((pos, len)) => {
            let half = window / 2;
            // When the window start would clamp to the content start, the
            // excerpt runs from the beginning instead of being centered.
            let (start, end) = if pos > half {
                (pos - half, pos + len + half)
            } else {
                (0, window)
            };
            let slice = chars.get(start..end.min(chars.len())).unwrap_or_default();
            let body = highlight(trim_chars(slice), &terms);

            let mut out = String::new();
            if start > 0 {
                out.push_str("...");
            }
            out.push_str(&body);
            if end < chars.len() {
                out.push_str("...");
            }
            out
        }
        None => {
            let slice = chars.get(..window.min(chars.len())).unwrap_or_default();
            let mut out: String = trim_chars(slice).iter().collect();
            if chars.len() > window {
                out.push_str("...");
            }
            out
        }
    }
}

/// Wraps every case-insensitive occurrence of each term in
/// `<strong>…</strong>`, earliest occurrence first; at equal positions the
/// first-listed term wins.
fn highlight(excerpt: &[char], terms: &[&str]) -> String {
    let folded: Vec<char> = excerpt.iter().copied().map(fold_char).collect();
    let folded_terms: Vec<Vec<char>> = terms
        .iter()
        .map(|term| term.chars().map(fold_char).collect())
        .collect();

    let mut out = String::new();
    let mut i = 0;
    while i < excerpt.len() {
        let hit = folded_terms.iter().find_map(|term| {
            (!term.is_empty()
                && folded
                    .get(i..i + term.len())
                    .is_some_and(|w| w == term.as_slice()))
            .then_some(term.len())
        });
        match hit {
            Some(len) => {
                out.push_str("<strong>");
                out.extend(excerpt.get(i..i + len).unwrap_or_default());
                out.push_str("</strong>");
                i += len;
            }
            None => {
                if let Some(c) = excerpt.get(i) {
                    out.push(*c);
                }
                i += 1;
            }
        }
    }
    out
}

/// First case-insensitive occurrence of `needle`, as a char index.
fn find_ci(haystack: &[char], needle: &str) -> Option<usize> {
    let needle: Vec<char> = needle.chars().map(fold_char).collect();
    if needle.is_empty() {
        return None;
    }
    let folded: Vec<char> = haystack.iter().copied().map(fold_char).collect();
    folded.windows(needle.len()).position(|w| w == needle)
}

/// One-to-one lowercase fold so char indices stay aligned.
fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn trim_chars(chars: &[char]) -> &[char] {
    let start = chars
        .iter()
        .position(|c| !c.is_whitespace())
        .unwrap_or(chars.len());
    let end = chars
        .iter()
        .rposition(|c| !c.is_whitespace())
        .map_or(start, |p| p + 1);
    chars.get(start..end).unwrap_or_default()
}

//! Markup Scanning
//!
//! Byte-level scanning utilities for locating injection points in
//! markup text. Composition treats markup as text, not as a DOM:
//! - Tag names match ASCII case-insensitively
//! - The first/last occurrence wins, with no nesting awareness
//! - Tags inside comments or quoted attribute values still match
//!
//! All needles used by the composer are plain ASCII, so byte-window
//! comparison is safe: a full ASCII match can only start on a UTF-8
//! character boundary, and the returned indices are valid split points.

use std::ops::Range;

/// Find the first occurrence of `needle` in `haystack`, ignoring ASCII case.
///
/// Returns the byte offset of the match start.
pub fn find_ci(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    let h = haystack.as_bytes();
    let n = needle.as_bytes();
    if n.len() > h.len() {
        return None;
    }
    h.windows(n.len()).position(|w| w.eq_ignore_ascii_case(n))
}

/// Find the last occurrence of `needle` in `haystack`, ignoring ASCII case.
pub fn rfind_ci(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return Some(haystack.len());
    }
    let h = haystack.as_bytes();
    let n = needle.as_bytes();
    if n.len() > h.len() {
        return None;
    }
    h.windows(n.len()).rposition(|w| w.eq_ignore_ascii_case(n))
}

/// Find the first complete open tag `<name ...>` in `haystack`.
///
/// Returns the byte range of the whole tag, from `<` through the
/// closing `>`. The tag name must end at `>`, `/` or whitespace, so
/// `<body` does not match inside `<bodyguard>`.
///
/// An occurrence of `<name` with no terminating `>` anywhere after it
/// is not a tag, and nothing later can be one either.
pub fn find_open_tag(haystack: &str, name: &str) -> Option<Range<usize>> {
    let h = haystack.as_bytes();
    let n = name.as_bytes();
    if n.is_empty() {
        return None;
    }

    let mut at = 0;
    while at + 1 + n.len() <= h.len() {
        if h[at] == b'<' && h[at + 1..at + 1 + n.len()].eq_ignore_ascii_case(n) {
            let after_name = at + 1 + n.len();
            let name_ends_here = match h.get(after_name) {
                Some(b'>') | Some(b'/') => true,
                Some(c) => c.is_ascii_whitespace(),
                None => false,
            };
            if name_ends_here {
                match h[after_name..].iter().position(|&c| c == b'>') {
                    Some(rel) => return Some(at..after_name + rel + 1),
                    None => return None,
                }
            }
        }
        at += 1;
    }
    None
}

/// Slice out the body content of a markup fragment.
///
/// The span runs from just after the first `<body ...>` open tag to
/// just before the last `</body>`. Each boundary falls back to the
/// fragment edge when its tag is missing:
/// - No open tag: content starts at the beginning
/// - No close tag: content runs to the end
/// - Neither: the whole fragment is the body content
pub fn body_span(markup: &str) -> &str {
    let open_end = find_open_tag(markup, "body").map(|tag| tag.end);
    let close_start = rfind_ci(markup, "</body>");

    match (open_end, close_start) {
        (Some(start), Some(end)) if start <= end => &markup[start..end],
        // Close tag before the open tag - treat the close as stray
        (Some(start), _) => &markup[start..],
        (None, Some(end)) => &markup[..end],
        (None, None) => markup,
    }
}

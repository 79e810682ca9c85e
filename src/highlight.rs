//! Highlight markers over essay text
//!
//! Rendered essay text is a run of [`Fragment`]s. Highlighting splits a plain
//! run around each occurrence of the query; clearing turns every marker back
//! into plain text and merges neighbouring plain runs so the next scan sees one
//! contiguous string.

use regex::Regex;
use std::ops::Range;

/// A piece of rendered essay text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Plain(String),
    /// Highlight marker wrapping a matched substring
    Mark(String),
}

impl Fragment {
    pub fn as_str(&self) -> &str {
        match self {
            Fragment::Plain(s) | Fragment::Mark(s) => s,
        }
    }

    pub fn is_mark(&self) -> bool {
        matches!(self, Fragment::Mark(_))
    }
}

/// Lower-case `text` one char at a time. Matching and highlighting both go
/// through this so they never disagree about what counts as an occurrence.
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Build a matcher for the literal, already folded query.
/// Regex metacharacters in the query are escaped, never interpreted.
pub fn literal_matcher(query_folded: &str) -> Option<Regex> {
    if query_folded.is_empty() {
        return None;
    }

    match Regex::new(&regex::escape(query_folded)) {
        Ok(re) => Some(re),
        Err(e) => {
            // Only reachable if the escaped pattern exceeds the size limit
            tracing::warn!(error = %e, "query too large to highlight");
            None
        }
    }
}

/// Byte ranges in `text` of every non-overlapping, case-insensitive
/// occurrence of `query`
pub fn find_matches(text: &str, query: &str) -> Vec<Range<usize>> {
    let Some(re) = literal_matcher(&fold_case(query)) else {
        return Vec::new();
    };

    // Folding can change a char's byte length, so keep the source char span
    // of every folded byte
    let mut folded = String::with_capacity(text.len());
    let mut spans: Vec<Range<usize>> = Vec::with_capacity(text.len());
    for (start, c) in text.char_indices() {
        let source = start..start + c.len_utf8();
        for lower in c.to_lowercase() {
            folded.push(lower);
            for _ in 0..lower.len_utf8() {
                spans.push(source.clone());
            }
        }
    }

    let mut ranges: Vec<Range<usize>> = Vec::new();
    for m in re.find_iter(&folded) {
        let start = spans[m.start()].start;
        let end = spans[m.end() - 1].end;
        match ranges.last_mut() {
            // Two folded matches inside one source char
            Some(last) if start < last.end => last.end = last.end.max(end),
            _ => ranges.push(start..end),
        }
    }
    ranges
}

/// Split `text` into fragments with every occurrence of `query` marked
pub fn highlight(text: &str, query: &str) -> Vec<Fragment> {
    let ranges = find_matches(text, query);
    if ranges.is_empty() {
        return vec![Fragment::Plain(text.to_string())];
    }

    let mut fragments = Vec::with_capacity(ranges.len() * 2 + 1);
    let mut last = 0;
    for range in ranges {
        if range.start > last {
            fragments.push(Fragment::Plain(text[last..range.start].to_string()));
        }
        fragments.push(Fragment::Mark(text[range.clone()].to_string()));
        last = range.end;
    }
    if last < text.len() {
        fragments.push(Fragment::Plain(text[last..].to_string()));
    }

    fragments
}

/// Replace every marker with its inner text and merge adjacent plain runs.
/// Running it twice is the same as running it once.
pub fn clear_highlights(fragments: &mut Vec<Fragment>) {
    if fragments.len() == 1 && !fragments[0].is_mark() {
        return;
    }

    let mut merged = String::new();
    for fragment in fragments.drain(..) {
        match fragment {
            Fragment::Plain(s) | Fragment::Mark(s) => merged.push_str(&s),
        }
    }
    fragments.push(Fragment::Plain(merged));
}

/// Concatenated text of all fragments
pub fn plain_text(fragments: &[Fragment]) -> String {
    fragments.iter().map(Fragment::as_str).collect()
}

/// Render fragments with `<mark>` tags around highlighted runs
pub fn to_markup(fragments: &[Fragment]) -> String {
    let mut out = String::new();
    for fragment in fragments {
        match fragment {
            Fragment::Plain(s) => out.push_str(s),
            Fragment::Mark(s) => {
                out.push_str("<mark>");
                out.push_str(s);
                out.push_str("</mark>");
            }
        }
    }
    out
}

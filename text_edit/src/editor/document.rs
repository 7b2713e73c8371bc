// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The line storage and the splice primitive that every edit is built on.
//!
//! # Splice algorithm
//!
//! [`Document::splice()`] replaces the span `range.min()..range.max()` with a list of
//! replacement lines. Four shapes are possible, depending on whether the span stays on
//! one line and whether the replacement has more than one line:
//!
//! | span        | replacement | result                                             |
//! |-------------|-------------|----------------------------------------------------|
//! | one line    | 0 or 1 line | `prefix + r[0] + suffix`, replaces that line        |
//! | one line    | N lines     | `prefix + r[0]`, `r[1..N-1]`, `r[N-1] + suffix`     |
//! | M lines     | 0 or 1 line | `prefix + r[0] + suffix`, replaces all M lines      |
//! | M lines     | N lines     | `prefix + r[0]`, `r[1..N-1]`, `r[N-1] + suffix`     |
//!
//! `prefix` is the start line up to `range.min().chr` and `suffix` is the end line from
//! `range.max().chr`. An empty replacement behaves like `[""]`. All four shapes are the
//! same computation once the spanned lines are swapped out with [`Vec::splice`], so the
//! code has a single path. Replacing the whole document short circuits to a wholesale
//! swap that produces the same result.

use std::{fmt::{Display, Formatter},
          mem::take};

use crate::{TextEditPos, TextEditSelection, clamp_selection, end_pos};

/// Ordered, never empty list of lines. No line contains a line separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Document {
    lines: Vec<String>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }
}

impl Document {
    /// Lines that embed separators are split, and an empty list becomes one empty line.
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        let lines: Vec<String> = lines
            .into_iter()
            .flat_map(|it| {
                let it: String = it.into();
                if it.contains(['\n', '\r']) {
                    split_lines(&it)
                } else {
                    vec![it]
                }
            })
            .collect();

        if lines.is_empty() {
            Self::default()
        } else {
            Self { lines }
        }
    }

    /// Splits on `\r\n`, `\r` and `\n`.
    #[must_use]
    pub fn from_text(text: &str) -> Self { Self::new(split_lines(text)) }

    /// Lines joined with `\n`.
    #[must_use]
    pub fn to_text(&self) -> String { self.lines.join("\n") }

    #[must_use]
    pub fn lines(&self) -> &[String] { &self.lines }

    #[must_use]
    pub fn into_lines(self) -> Vec<String> { self.lines }

    #[must_use]
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn line_count(&self) -> usize { self.lines.len() }

    #[must_use]
    pub fn last_line_index(&self) -> usize { self.lines.len().saturating_sub(1) }

    /// Length in chars, `0` for a line that doesn't exist.
    #[must_use]
    pub fn line_len(&self, index: usize) -> usize {
        self.line(index).map_or(0, char_len)
    }

    /// True for the single empty line document.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.lines.len() == 1 && self.lines[0].is_empty() }

    /// Replaces `range` with `replacement`, see the module docs for the algorithm. The
    /// range endpoints are clamped first, and their order doesn't matter.
    #[must_use]
    pub fn splice(&self, range: TextEditSelection, replacement: &[String]) -> Document {
        let range = clamp_selection(self, range).normalized();
        let (start, end) = (range.min(), range.max());

        // Whole document fast path.
        if start == TextEditPos::default() && end == end_pos(self) {
            return Document::new(replacement.iter().cloned());
        }

        let prefix = str_prefix(&self.lines[start.line], start.chr);
        let suffix = str_suffix(&self.lines[end.line], end.chr);

        let new_lines: Vec<String> = match replacement {
            [] => vec![format!("{prefix}{suffix}")],
            [only] => vec![format!("{prefix}{only}{suffix}")],
            [first, middle @ .., last] => {
                let mut it = Vec::with_capacity(replacement.len());
                it.push(format!("{prefix}{first}"));
                it.extend(middle.iter().cloned());
                it.push(format!("{last}{suffix}"));
                it
            }
        };

        let mut lines = self.lines.clone();
        lines.splice(start.line..=end.line, new_lines);
        Document::new(lines)
    }

    /// The text inside `range` as lines: the tail of the first line, the middle lines
    /// verbatim, and the head of the last line.
    #[must_use]
    pub fn extract(&self, range: TextEditSelection) -> Vec<String> {
        let range = clamp_selection(self, range).normalized();
        let (start, end) = (range.min(), range.max());

        if start.line == end.line {
            let line = &self.lines[start.line];
            let slice = str_prefix(line, end.chr);
            return vec![str_suffix(slice, start.chr).to_string()];
        }

        let mut return_it = Vec::with_capacity(end.line - start.line + 1);
        return_it.push(str_suffix(&self.lines[start.line], start.chr).to_string());
        return_it.extend(self.lines[start.line + 1..end.line].iter().cloned());
        return_it.push(str_prefix(&self.lines[end.line], end.chr).to_string());
        return_it
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

impl From<Vec<String>> for Document {
    fn from(lines: Vec<String>) -> Self { Self::new(lines) }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self { Self::from_text(text) }
}

/// Where the caret lands after `replacement` is inserted at `start`.
#[must_use]
pub fn end_of_insertion(start: TextEditPos, replacement: &[String]) -> TextEditPos {
    match replacement {
        [] => start,
        [only] => TextEditPos::new(start.line, start.chr + char_len(only)),
        [.., last] => TextEditPos::new(start.line + replacement.len() - 1, char_len(last)),
    }
}

/// Splits on `\r\n`, `\r` and `\n`. A trailing separator produces a trailing empty line,
/// and `""` produces `[""]`.
#[must_use]
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = vec![];
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                lines.push(take(&mut current));
            }
            '\n' => lines.push(take(&mut current)),
            _ => current.push(ch),
        }
    }

    lines.push(current);
    lines
}

#[must_use]
pub fn char_len(text: &str) -> usize { text.chars().count() }

/// Byte offset of char index `chr`, or `text.len()` when `chr` is past the end.
#[must_use]
pub fn byte_offset(text: &str, chr: usize) -> usize {
    text.char_indices().nth(chr).map_or(text.len(), |(index, _)| index)
}

#[must_use]
pub fn str_prefix(text: &str, chr: usize) -> &str { &text[..byte_offset(text, chr)] }

#[must_use]
pub fn str_suffix(text: &str, chr: usize) -> &str { &text[byte_offset(text, chr)..] }

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    fn doc(lines: &[&str]) -> Document { Document::new(lines.iter().copied()) }

    fn strings(lines: &[&str]) -> Vec<String> {
        lines.iter().map(ToString::to_string).collect()
    }

    fn sel(a: (usize, usize), b: (usize, usize)) -> TextEditSelection {
        TextEditSelection::new(TextEditPos::new(a.0, a.1), TextEditPos::new(b.0, b.1))
    }

    #[test]
    fn test_new_normalizes_empty_and_embedded_separators() {
        assert_eq2!(Document::new(Vec::<String>::new()).lines(), &[String::new()]);
        assert_eq2!(doc(&["a\nb", "c"]).lines(), &strings(&["a", "b", "c"]));
        assert!(Document::default().is_empty());
        assert!(!doc(&["", ""]).is_empty());
    }

    #[test_case("", &[""] ; "empty")]
    #[test_case("abc", &["abc"] ; "single line")]
    #[test_case("a\nb", &["a", "b"] ; "lf")]
    #[test_case("a\r\nb", &["a", "b"] ; "crlf")]
    #[test_case("a\rb", &["a", "b"] ; "cr")]
    #[test_case("a\n", &["a", ""] ; "trailing separator")]
    #[test_case("\n\n", &["", "", ""] ; "only separators")]
    fn test_split_lines(text: &str, expected: &[&str]) {
        assert_eq2!(split_lines(text), strings(expected));
    }

    #[test]
    fn test_from_text_to_text() {
        let it = Document::from_text("one\r\ntwo\nthree");
        assert_eq2!(it.line_count(), 3);
        assert_eq2!(it.to_text(), "one\ntwo\nthree");
    }

    #[test]
    fn test_multibyte_slicing() {
        assert_eq2!(char_len("héllo"), 5);
        assert_eq2!(str_prefix("héllo", 2), "hé");
        assert_eq2!(str_suffix("héllo", 2), "llo");
        assert_eq2!(str_suffix("héllo", 99), "");
    }

    #[test_case(&["0123456789"], sel((0, 2), (0, 5)), &["X"], &["01X56789"]
        ; "same line single replacement")]
    #[test_case(&["0123456789"], sel((0, 2), (0, 5)), &["X", "Y", "Z"], &["01X", "Y", "Z56789"]
        ; "same line multi replacement")]
    #[test_case(&["abc", "def", "ghi"], sel((0, 1), (2, 2)), &["X"], &["aXi"]
        ; "multi line single replacement")]
    #[test_case(&["abc", "def", "ghi"], sel((0, 1), (2, 2)), &["X", "Y"], &["aX", "Yi"]
        ; "multi line multi replacement")]
    #[test_case(&["abc", "def"], sel((1, 1), (0, 2)), &[], &["abef"]
        ; "backwards range pure deletion")]
    #[test_case(&["abc", "def"], sel((0, 0), (1, 3)), &["x", "y"], &["x", "y"]
        ; "whole document")]
    #[test_case(&["abc", "def"], sel((0, 0), (1, 3)), &[], &[""]
        ; "whole document deletion")]
    #[test_case(&["abc"], sel((0, 3), (0, 3)), &["", ""], &["abc", ""]
        ; "newline at end")]
    fn test_splice(
        lines: &[&str],
        range: TextEditSelection,
        replacement: &[&str],
        expected: &[&str],
    ) {
        let it = doc(lines).splice(range, &strings(replacement));
        assert_eq2!(it.lines(), &strings(expected));
    }

    #[test]
    fn test_splice_clamps_out_of_bounds_range() {
        let it = doc(&["abc", "def"]).splice(sel((1, 1), (99, 99)), &strings(&["!"]));
        assert_eq2!(it.lines(), &strings(&["abc", "d!"]));
    }

    #[test_case(sel((0, 1), (0, 3)), &["bc"] ; "same line")]
    #[test_case(sel((1, 5), (2, 5)), &["56789", "abcde"] ; "two lines")]
    #[test_case(sel((0, 8), (2, 1)), &["ijklmnopqrstuvwxyz", "0123456789", "a"] ; "three lines")]
    #[test_case(sel((2, 2), (0, 24)), &["yz", "0123456789", "ab"] ; "backwards")]
    fn test_extract(range: TextEditSelection, expected: &[&str]) {
        let it = doc(&["abcdefghijklmnopqrstuvwxyz", "0123456789", "abcdefghij"]);
        assert_eq2!(it.extract(range), strings(expected));
    }

    #[test]
    fn test_end_of_insertion() {
        let start = TextEditPos::new(3, 4);
        assert_eq2!(end_of_insertion(start, &strings(&["abc"])), TextEditPos::new(3, 7));
        assert_eq2!(
            end_of_insertion(start, &strings(&["abc", "", "de"])),
            TextEditPos::new(5, 2)
        );
        assert_eq2!(end_of_insertion(start, &[]), start);
    }
}

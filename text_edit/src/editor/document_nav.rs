// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pure position arithmetic over a [`Document`]. Every position that
//! [`crate::TextEditModel`] stores goes through [`clamp_pos()`] or [`clamp_selection()`]
//! first.

use crate::{Document, Key, TextEditPos, TextEditSelection};

/// Line first (into `[0, last line]`), then chr (into `[0, line length]`).
#[must_use]
pub fn clamp_pos(doc: &Document, pos: TextEditPos) -> TextEditPos {
    let line = pos.line.min(doc.last_line_index());
    let chr = pos.chr.min(doc.line_len(line));
    TextEditPos::new(line, chr)
}

/// Clamps both endpoints. The anchor/head order is kept.
#[must_use]
pub fn clamp_selection(doc: &Document, selection: TextEditSelection) -> TextEditSelection {
    TextEditSelection::new(clamp_pos(doc, selection.anchor), clamp_pos(doc, selection.head))
}

/// End of the last line.
#[must_use]
pub fn end_pos(doc: &Document) -> TextEditPos {
    let last_line = doc.last_line_index();
    TextEditPos::new(last_line, doc.line_len(last_line))
}

/// One char forward, wrapping to the start of the next line. Unchanged at the end of the
/// document.
#[must_use]
pub fn next_pos(doc: &Document, pos: TextEditPos) -> TextEditPos {
    let pos = clamp_pos(doc, pos);
    if pos.chr < doc.line_len(pos.line) {
        pos.with_chr(pos.chr + 1)
    } else if pos.line < doc.last_line_index() {
        TextEditPos::new(pos.line + 1, 0)
    } else {
        pos
    }
}

/// One char back, wrapping to the end of the previous line. Unchanged at `(0,0)`.
#[must_use]
pub fn prev_pos(doc: &Document, pos: TextEditPos) -> TextEditPos {
    let pos = clamp_pos(doc, pos);
    if pos.chr > 0 {
        pos.with_chr(pos.chr - 1)
    } else if pos.line > 0 {
        TextEditPos::new(pos.line - 1, doc.line_len(pos.line - 1))
    } else {
        pos
    }
}

/// `(0,0)` to the end of the last line. Collapsed (so not valid) for an empty document.
#[must_use]
pub fn select_all(doc: &Document) -> TextEditSelection {
    TextEditSelection::new(TextEditPos::default(), end_pos(doc))
}

/// Where the caret goes for a navigation key. Keys that aren't navigation keys leave it
/// where it is. Vertical moves keep the column when the target line is long enough.
#[must_use]
pub fn move_caret(
    doc: &Document,
    cursor: TextEditPos,
    key: Key,
    page_rows: usize,
) -> TextEditPos {
    let cursor = clamp_pos(doc, cursor);
    let to_line = |line: usize| TextEditPos::new(line, cursor.chr.min(doc.line_len(line)));

    match key {
        Key::Left => prev_pos(doc, cursor),
        Key::Right => next_pos(doc, cursor),
        Key::Up if cursor.line > 0 => to_line(cursor.line - 1),
        Key::Down if cursor.line < doc.last_line_index() => to_line(cursor.line + 1),
        Key::Home => cursor.with_chr(0),
        Key::End => cursor.with_chr(doc.line_len(cursor.line)),
        Key::PageUp => to_line(cursor.line.saturating_sub(page_rows)),
        Key::PageDown => {
            to_line((cursor.line + page_rows).min(doc.last_line_index()))
        }
        _ => cursor,
    }
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The structural edits. Each one computes a new [`Document`] with
//! [`Document::splice()`] and hands it to `commit_edit()` together with the cursor and
//! selection that should go with it. Nothing here fails: positions are clamped, and an
//! edit with nothing to do publishes nothing.

use crate::{Document, TextEditModel, TextEditPos, TextEditSelection, end_of_insertion,
            next_pos, prev_pos, split_lines};

/// Names the edit in log output and history events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum EditOp {
    Input,
    Backspace,
    Delete,
    NewLine,
    Indent,
    Outdent,
    InsertTab,
    Cut,
    Paste,
    Undo,
    Redo,
}

impl TextEditModel {
    /// Inserts `text` at the cursor, or replaces the selection with it. Text with line
    /// separators in it is inserted as several lines, the same way paste does it.
    pub fn input(&mut self, text: &str) {
        if self.is_read_only() || text.is_empty() {
            return;
        }
        self.insert_lines(EditOp::Input, &split_lines(text));
    }

    /// Deletes the selection, or the char before the cursor. Joins lines at column 0. A
    /// no-op at the very start of the document.
    pub fn backspace(&mut self) {
        if self.is_read_only() {
            return;
        }
        if self.delete_selection(EditOp::Backspace) {
            return;
        }

        let cursor = self.get_cursor();
        let prev = prev_pos(self.get_text(), cursor);
        if prev == cursor {
            return;
        }

        let document = self.get_text().splice((prev, cursor).into(), &[]);
        self.commit_edit(EditOp::Backspace, document, prev, TextEditSelection::default());
    }

    /// Deletes the selection, or the char after the cursor. Joins lines at the end of a
    /// line. A no-op at the very end of the document.
    pub fn delete(&mut self) {
        if self.is_read_only() {
            return;
        }
        if self.delete_selection(EditOp::Delete) {
            return;
        }

        let cursor = self.get_cursor();
        let next = next_pos(self.get_text(), cursor);
        if next == cursor {
            return;
        }

        let document = self.get_text().splice((cursor, next).into(), &[]);
        self.commit_edit(EditOp::Delete, document, cursor, TextEditSelection::default());
    }

    /// The return key. A valid selection is deleted first. Then the line is split at the
    /// cursor, which at column 0 amounts to inserting an empty line above. The cursor
    /// ends up at the start of the next line.
    pub fn insert_new_line(&mut self) {
        if self.is_read_only() {
            return;
        }

        let selection = self.get_selection();
        let (document, at) = if selection.is_valid() {
            (self.get_text().splice(selection, &[]), selection.min())
        } else {
            (self.get_text().clone(), self.get_cursor())
        };

        let split = [String::new(), String::new()];
        let document = document.splice(at.into(), &split);
        let cursor = end_of_insertion(at, &split);
        self.commit_edit(EditOp::NewLine, document, cursor, TextEditSelection::default());
    }

    /// With a selection, every touched line gets one indent step prepended, and the
    /// cursor and selection shift right by the same amount. Without one, the indent
    /// is inserted at the cursor.
    pub fn tab(&mut self) {
        if self.is_read_only() {
            return;
        }

        let selection = self.get_selection();
        if !selection.is_valid() {
            self.insert_indent();
            return;
        }

        let options = self.get_options();
        let indent = options.indent();
        let range = whole_lines(self.get_text(), selection);
        let lines: Vec<String> = self
            .get_text()
            .extract(range)
            .into_iter()
            .map(|line| format!("{indent}{line}"))
            .collect();

        let document = self.get_text().splice(range, &lines);
        let shift = |pos: TextEditPos| pos.with_chr(pos.chr + options.tab_spaces);
        let cursor = shift(self.get_cursor());
        let selection = TextEditSelection::new(shift(selection.anchor), shift(selection.head));
        self.commit_edit(EditOp::Indent, document, cursor, selection);
    }

    /// With a selection, up to one indent step of leading spaces is removed from every
    /// touched line. The cursor and selection shift left by the count removed from the
    /// last touched line, even when earlier lines lost a different amount. Without a
    /// selection this inserts an indent just like [`Self::tab()`].
    pub fn shift_tab(&mut self) {
        if self.is_read_only() {
            return;
        }

        let selection = self.get_selection();
        if !selection.is_valid() {
            self.insert_indent();
            return;
        }

        let tab_spaces = self.get_options().tab_spaces;
        let range = whole_lines(self.get_text(), selection);
        let mut last_removed = 0;
        let lines: Vec<String> = self
            .get_text()
            .extract(range)
            .into_iter()
            .map(|line| {
                let removed = line
                    .chars()
                    .take(tab_spaces)
                    .take_while(|ch| *ch == ' ')
                    .count();
                last_removed = removed;
                // Spaces are one byte each.
                line[removed..].to_string()
            })
            .collect();

        let document = self.get_text().splice(range, &lines);
        let shift = |pos: TextEditPos| pos.with_chr(pos.chr.saturating_sub(last_removed));
        let cursor = shift(self.get_cursor());
        let selection = TextEditSelection::new(shift(selection.anchor), shift(selection.head));
        self.commit_edit(EditOp::Outdent, document, cursor, selection);
    }

    /// Replaces the selection (or the empty span at the cursor) with `lines`. The
    /// cursor lands at the end of the inserted text and the selection is cleared.
    pub(crate) fn insert_lines(&mut self, op: EditOp, lines: &[String]) {
        let selection = self.get_selection();
        let (range, start) = if selection.is_valid() {
            (selection, selection.min())
        } else {
            let cursor = self.get_cursor();
            (cursor.into(), cursor)
        };

        let document = self.get_text().splice(range, lines);
        let cursor = end_of_insertion(start, lines);
        self.commit_edit(op, document, cursor, TextEditSelection::default());
    }

    /// Returns `false` when there is no selection to delete.
    pub(crate) fn delete_selection(&mut self, op: EditOp) -> bool {
        let selection = self.get_selection();
        if !selection.is_valid() {
            return false;
        }

        let document = self.get_text().splice(selection, &[]);
        self.commit_edit(op, document, selection.min(), TextEditSelection::default());
        true
    }

    fn insert_indent(&mut self) {
        let indent = self.get_options().indent();
        self.insert_lines(EditOp::InsertTab, &[indent]);
    }
}

/// Grows `selection` to cover its first and last lines completely.
fn whole_lines(document: &Document, selection: TextEditSelection) -> TextEditSelection {
    let (min, max) = (selection.min(), selection.max());
    TextEditSelection::new(
        TextEditPos::new(min.line, 0),
        TextEditPos::new(max.line, document.line_len(max.line)),
    )
}

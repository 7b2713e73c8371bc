// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ClipboardService, DEBUG_TEXT_EDIT_COPY_PASTE, EditOp, TextEditModel,
            split_lines};

impl TextEditModel {
    /// The selected text joined with `\n`, or `""` when nothing is selected.
    #[must_use]
    pub fn get_selected_text(&self) -> String {
        let selection = self.get_selection();
        if selection.is_valid() {
            self.get_text().extract(selection).join("\n")
        } else {
            String::new()
        }
    }

    /// Puts the selected text into the clipboard. With no selection the clipboard is set
    /// to `""`, so copying nothing clears it.
    pub fn copy(&self, clipboard: &mut impl ClipboardService) {
        put_into_clipboard(clipboard, self.get_selected_text());
    }

    /// Same as [`Self::copy()`], then the selection is deleted.
    pub fn cut(&mut self, clipboard: &mut impl ClipboardService) {
        if self.is_read_only() {
            return;
        }
        put_into_clipboard(clipboard, self.get_selected_text());
        self.delete_selection(EditOp::Cut);
    }

    /// Inserts the clipboard text like [`Self::input()`] does, replacing the selection
    /// if there is one. An empty or unreadable clipboard does nothing.
    pub fn paste(&mut self, clipboard: &mut impl ClipboardService) {
        if self.is_read_only() {
            return;
        }

        let clipboard_text = match clipboard.try_to_get_content_from_clipboard() {
            Ok(it) => it,
            Err(error) => {
                DEBUG_TEXT_EDIT_COPY_PASTE.then(|| {
                    // % is Display, ? is Debug.
                    tracing::debug!(
                        message = "📋 Failed to paste the text from clipboard",
                        error = ?error
                    );
                });
                return;
            }
        };

        if clipboard_text.is_empty() {
            return;
        }

        self.insert_lines(EditOp::Paste, &split_lines(&clipboard_text));

        DEBUG_TEXT_EDIT_COPY_PASTE.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "📋 Text was pasted from clipboard",
                clipboard_text = %clipboard_text,
                cursor = %self.get_cursor(),
            );
        });
    }
}

fn put_into_clipboard(clipboard: &mut impl ClipboardService, content: String) {
    if let Err(error) = clipboard.try_to_put_content_into_clipboard(content) {
        // % is Display, ? is Debug.
        tracing::warn!(
            message = "📋 Failed to copy selected text to clipboard",
            error = ?error,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TextEditPos, TextEditSelection, assert_eq2,
                clipboard_test_fixtures::{TestClipboard, UnavailableClipboard}};

    fn pos(line: usize, chr: usize) -> TextEditPos { TextEditPos::new(line, chr) }

    #[test]
    fn test_copy_multi_line_selection() {
        let mut model =
            TextEditModel::new(["abcdefghijklmnopqrstuvwxyz", "0123456789", "abcdefghij"]);
        let mut clipboard = TestClipboard::default();
        model.set_selection(TextEditSelection::new(pos(1, 5), pos(2, 5)));
        model.copy(&mut clipboard);
        assert_eq2!(clipboard.content, "56789\nabcde");
    }

    #[test]
    fn test_copy_without_selection_clears_clipboard() {
        let model = TextEditModel::new(["abc"]);
        let mut clipboard = TestClipboard::new("stale");
        model.copy(&mut clipboard);
        assert_eq2!(clipboard.content, "");
    }

    #[test]
    fn test_cut_without_selection() {
        let mut model = TextEditModel::new(["abc"]);
        let mut clipboard = TestClipboard::new("stale");
        model.cut(&mut clipboard);
        assert_eq2!(clipboard.content, "");
        assert_eq2!(model.to_text(), "abc");
        assert!(!model.can_undo());
    }

    #[test]
    fn test_cut() {
        let mut model = TextEditModel::new(["abc", "def"]);
        let mut clipboard = TestClipboard::default();
        model.set_selection(TextEditSelection::new(pos(1, 1), pos(0, 2)));
        model.cut(&mut clipboard);
        assert_eq2!(clipboard.content, "c\nd");
        assert_eq2!(model.to_text(), "abef");
        assert_eq2!(model.get_cursor(), pos(0, 2));
    }

    #[test]
    fn test_paste_empty_clipboard_is_noop() {
        let mut model = TextEditModel::new(["abc"]);
        let mut clipboard = TestClipboard::default();
        model.set_cursor(pos(0, 1));
        model.paste(&mut clipboard);
        assert_eq2!(model.to_text(), "abc");
        assert_eq2!(model.get_cursor(), pos(0, 1));
    }

    #[test]
    fn test_unavailable_clipboard_is_not_an_error() {
        let mut model = TextEditModel::new(["abc"]);
        let mut clipboard = UnavailableClipboard;
        model.select_all();
        model.copy(&mut clipboard);
        model.paste(&mut clipboard);
        assert_eq2!(model.to_text(), "abc");

        model.cut(&mut clipboard);
        assert_eq2!(model.to_text(), "");
    }
}

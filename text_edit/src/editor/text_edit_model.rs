// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ClipboardService, DEBUG_TEXT_EDIT_MOD, Document, EditOp, HistorySnapshot, Key,
            ModifierKeysMask, Observable, SubscriberId, TextEditHistory,
            TextEditModelOptions, TextEditPos, TextEditSelection, clamp_pos,
            clamp_selection, move_caret, select_all};

/// Owns the document, the cursor and the selection, and implements every edit on top of
/// [`Document::splice()`].
///
/// Each piece of published state sits in an [`Observable`], so observers registered
/// with the `subscribe_*()` methods only hear about actual changes. The model is single
/// threaded and synchronous: an operation either completes right away or does nothing.
///
/// # Invariants
///
/// - The document always has at least one line.
/// - The cursor and both selection endpoints are always inside the document.
/// - Setting any value to what it already is publishes nothing.
#[derive(Debug)]
pub struct TextEditModel {
    text: Observable<Document>,
    cursor: Observable<TextEditPos>,
    selection: Observable<TextEditSelection>,
    options: Observable<TextEditModelOptions>,
    read_only: Observable<bool>,
    page_rows: usize,
    history: TextEditHistory,
}

impl Default for TextEditModel {
    fn default() -> Self { Self::new(Vec::<String>::new()) }
}

impl TextEditModel {
    /// An empty list is stored as one empty line.
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        let document = Document::new(lines);
        let history = TextEditHistory::new(HistorySnapshot {
            document: document.clone(),
            cursor: TextEditPos::default(),
        });
        Self {
            text: Observable::new(document),
            cursor: Observable::default(),
            selection: Observable::default(),
            options: Observable::default(),
            read_only: Observable::new(false),
            page_rows: 0,
            history,
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: TextEditModelOptions) -> Self {
        self.set_options(options);
        self
    }
}

/// Text.
impl TextEditModel {
    #[must_use]
    pub fn get_text(&self) -> &Document { self.text.get() }

    /// Lines joined with `\n`.
    #[must_use]
    pub fn to_text(&self) -> String { self.text.get().to_text() }

    /// Replaces the whole document. When it actually changes, the cursor goes to `(0,0)`,
    /// the selection is cleared, and undo history starts over from the new text.
    pub fn set_text<S: Into<String>>(&mut self, lines: impl IntoIterator<Item = S>) {
        let document = Document::new(lines);
        if document == *self.text.get() {
            return;
        }

        self.cursor.set_if_changed(TextEditPos::default());
        self.selection.set_if_changed(TextEditSelection::default());
        self.text.set_if_changed(document.clone());
        self.history.reset(HistorySnapshot {
            document,
            cursor: TextEditPos::default(),
        });
    }

    pub fn clear_text(&mut self) { self.set_text(Vec::<String>::new()); }
}

/// Read only.
impl TextEditModel {
    #[must_use]
    pub fn is_read_only(&self) -> bool { *self.read_only.get() }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only.set_if_changed(read_only);
    }
}

/// Cursor & selection.
impl TextEditModel {
    #[must_use]
    pub fn get_cursor(&self) -> TextEditPos { *self.cursor.get() }

    /// Clamped into the document. Moving the cursor clears the selection.
    pub fn set_cursor(&mut self, pos: TextEditPos) {
        let pos = clamp_pos(self.text.get(), pos);
        if self.cursor.set_if_changed(pos) {
            self.selection.set_if_changed(TextEditSelection::default());
        }
    }

    #[must_use]
    pub fn get_selection(&self) -> TextEditSelection { *self.selection.get() }

    /// Both endpoints are clamped into the document. The cursor is left alone.
    pub fn set_selection(&mut self, selection: TextEditSelection) {
        let selection = clamp_selection(self.text.get(), selection);
        self.selection.set_if_changed(selection);
    }

    pub fn select_all(&mut self) {
        let selection = select_all(self.text.get());
        self.selection.set_if_changed(selection);
    }

    pub fn clear_selection(&mut self) {
        self.selection.set_if_changed(TextEditSelection::default());
    }

    /// Lines that page up and page down move by.
    pub fn set_page_rows(&mut self, page_rows: usize) { self.page_rows = page_rows; }

    #[must_use]
    pub fn get_page_rows(&self) -> usize { self.page_rows }
}

/// Options.
impl TextEditModel {
    #[must_use]
    pub fn get_options(&self) -> TextEditModelOptions { *self.options.get() }

    pub fn set_options(&mut self, options: TextEditModelOptions) {
        self.options.set_if_changed(options);
    }
}

/// Observation. Each callback runs once right away with the current value, then after
/// every change.
impl TextEditModel {
    pub fn subscribe_text(&mut self, f: impl FnMut(&Document) + 'static) -> SubscriberId {
        self.text.subscribe(f)
    }

    pub fn unsubscribe_text(&mut self, id: SubscriberId) -> bool {
        self.text.unsubscribe(id)
    }

    pub fn subscribe_cursor(
        &mut self,
        f: impl FnMut(&TextEditPos) + 'static,
    ) -> SubscriberId {
        self.cursor.subscribe(f)
    }

    pub fn unsubscribe_cursor(&mut self, id: SubscriberId) -> bool {
        self.cursor.unsubscribe(id)
    }

    pub fn subscribe_selection(
        &mut self,
        f: impl FnMut(&TextEditSelection) + 'static,
    ) -> SubscriberId {
        self.selection.subscribe(f)
    }

    pub fn unsubscribe_selection(&mut self, id: SubscriberId) -> bool {
        self.selection.unsubscribe(id)
    }

    pub fn subscribe_options(
        &mut self,
        f: impl FnMut(&TextEditModelOptions) + 'static,
    ) -> SubscriberId {
        self.options.subscribe(f)
    }

    pub fn unsubscribe_options(&mut self, id: SubscriberId) -> bool {
        self.options.unsubscribe(id)
    }

    pub fn subscribe_read_only(&mut self, f: impl FnMut(&bool) + 'static) -> SubscriberId {
        self.read_only.subscribe(f)
    }

    pub fn unsubscribe_read_only(&mut self, id: SubscriberId) -> bool {
        self.read_only.unsubscribe(id)
    }
}

/// Key handling.
impl TextEditModel {
    /// Returns whether the key was consumed.
    ///
    /// When nothing handles the key and no modifier is held, printable keys still count
    /// as handled (their text is expected to arrive through [`Self::input()`]) and
    /// control keys don't.
    pub fn handle_key(
        &mut self,
        key: Key,
        modifiers: ModifierKeysMask,
        clipboard: &mut impl ClipboardService,
    ) -> bool {
        let editable = !self.is_read_only();

        let handled = match key {
            it if it.is_navigation_key() => {
                self.move_cursor(key, modifiers);
                true
            }
            Key::Backspace if editable => {
                self.backspace();
                true
            }
            Key::Delete if editable => {
                self.delete();
                true
            }
            Key::Return | Key::KeypadEnter if editable => {
                self.insert_new_line();
                true
            }
            Key::Tab if editable && modifiers.is_empty() => {
                self.tab();
                true
            }
            Key::Tab if editable && modifiers.is_shift_only() => {
                self.shift_tab();
                true
            }
            Key::Character(_) if modifiers.is_command_only() => {
                self.handle_command_key(key, clipboard)
            }
            _ => false,
        };

        DEBUG_TEXT_EDIT_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "⌨️ handle key",
                key = %key,
                modifiers = ?modifiers,
                handled = %handled,
            );
        });

        if !handled && modifiers.is_empty() {
            return !key.is_control_key();
        }

        handled
    }

    /// `A` select all, `C` copy, `X` cut, `V` paste, `Y` redo, `Z` undo.
    fn handle_command_key(&mut self, key: Key, clipboard: &mut impl ClipboardService) -> bool {
        let editable = !self.is_read_only();

        if key.is_character_ignore_case('a') {
            self.select_all();
        } else if key.is_character_ignore_case('c') {
            self.copy(clipboard);
        } else if editable && key.is_character_ignore_case('x') {
            self.cut(clipboard);
        } else if editable && key.is_character_ignore_case('v') {
            self.paste(clipboard);
        } else if editable && key.is_character_ignore_case('y') {
            self.redo();
        } else if editable && key.is_character_ignore_case('z') {
            self.undo();
        } else {
            return false;
        }

        true
    }

    /// Holding only shift extends the selection from where the cursor was. Anything
    /// else drops the selection. The cursor is published directly since
    /// [`Self::set_cursor()`] would clear the selection that is being extended.
    fn move_cursor(&mut self, key: Key, modifiers: ModifierKeysMask) {
        let cursor = self.get_cursor();
        let extend = modifiers.is_shift_only();

        let mut selection = if extend {
            let it = self.get_selection();
            if it.is_valid() { it } else { cursor.into() }
        } else {
            TextEditSelection::default()
        };

        let new_cursor = move_caret(self.text.get(), cursor, key, self.page_rows);
        if extend {
            selection.head = new_cursor;
        }

        self.cursor.set_if_changed(new_cursor);
        self.selection.set_if_changed(selection);
    }
}

/// Undo & redo.
impl TextEditModel {
    pub fn undo(&mut self) {
        if self.is_read_only() {
            return;
        }
        if let Some(snapshot) = self.history.undo().cloned() {
            self.restore(EditOp::Undo, snapshot);
        }
    }

    pub fn redo(&mut self) {
        if self.is_read_only() {
            return;
        }
        if let Some(snapshot) = self.history.redo().cloned() {
            self.restore(EditOp::Redo, snapshot);
        }
    }

    #[must_use]
    pub fn can_undo(&self) -> bool { self.history.can_undo() }

    #[must_use]
    pub fn can_redo(&self) -> bool { self.history.can_redo() }

    fn restore(&mut self, op: EditOp, snapshot: HistorySnapshot) {
        let HistorySnapshot { document, cursor } = snapshot;
        let cursor = clamp_pos(&document, cursor);

        self.text.set_if_changed(document);
        self.cursor.set_if_changed(cursor);
        self.selection.set_if_changed(TextEditSelection::default());

        DEBUG_TEXT_EDIT_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "📜 history restore",
                op = %op,
                cursor = %cursor,
                history = ?self.history,
            );
        });
    }
}

/// Every edit funnels through here.
impl TextEditModel {
    /// Publishes the result of an edit through the equality gates, text first. The
    /// cursor and selection are clamped against the new document. Only edits that
    /// change the text are recorded in history, and undoing one puts the caret back
    /// where it was before the edit.
    pub(crate) fn commit_edit(
        &mut self,
        op: EditOp,
        document: Document,
        cursor: TextEditPos,
        selection: TextEditSelection,
    ) {
        let cursor_before = self.get_cursor();
        let cursor = clamp_pos(&document, cursor);
        let selection = clamp_selection(&document, selection);

        let text_changed = self.text.set_if_changed(document);
        self.cursor.set_if_changed(cursor);
        self.selection.set_if_changed(selection);

        if !text_changed {
            return;
        }

        self.history.update_current_cursor(cursor_before);
        self.history.record(HistorySnapshot {
            document: self.text.get().clone(),
            cursor,
        });

        DEBUG_TEXT_EDIT_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "✏️ text edit",
                op = %op,
                cursor = %cursor,
                selection = %selection,
                line_count = %self.text.get().line_count(),
            );
        });
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::{assert_eq2, clipboard_test_fixtures::TestClipboard};

    fn fixture() -> TextEditModel {
        TextEditModel::new(["abcdefghijklmnopqrstuvwxyz", "", "0123456789"])
    }

    fn pos(line: usize, chr: usize) -> TextEditPos { TextEditPos::new(line, chr) }

    fn counter() -> (Rc<RefCell<usize>>, impl FnMut(&TextEditPos) + 'static) {
        let count = Rc::new(RefCell::new(0));
        let count_clone = count.clone();
        (count, move |_: &TextEditPos| *count_clone.borrow_mut() += 1)
    }

    #[test]
    fn test_default_is_one_empty_line() {
        let model = TextEditModel::default();
        assert_eq2!(model.get_text().lines(), &[String::new()]);
        assert_eq2!(model.get_cursor(), pos(0, 0));
        assert!(!model.get_selection().is_valid());
        assert_eq2!(model.get_options().tab_spaces, 4);
        assert!(!model.is_read_only());
    }

    #[test]
    fn test_set_cursor_clears_selection_only_on_change() {
        let mut model = fixture();
        model.set_cursor(pos(0, 3));
        model.set_selection(TextEditSelection::new(pos(0, 0), pos(0, 3)));

        model.set_cursor(pos(0, 3));
        assert!(model.get_selection().is_valid());

        model.set_cursor(pos(0, 4));
        assert!(!model.get_selection().is_valid());
    }

    #[test]
    fn test_set_cursor_same_value_does_not_notify() {
        let mut model = fixture();
        let (count, callback) = counter();
        model.subscribe_cursor(callback);
        assert_eq2!(*count.borrow(), 1);

        model.set_cursor(pos(0, 0));
        model.set_cursor(pos(0, 1000));
        model.set_cursor(pos(0, 26));
        assert_eq2!(*count.borrow(), 2);
    }

    #[test]
    fn test_set_text_resets_cursor_selection_and_history() {
        let mut model = fixture();
        model.set_cursor(pos(2, 4));
        model.input("x");
        assert!(model.can_undo());

        model.set_text(["new"]);
        assert_eq2!(model.get_cursor(), pos(0, 0));
        assert!(!model.can_undo());

        model.clear_text();
        assert!(model.get_text().is_empty());
    }

    #[test]
    fn test_set_text_same_value_is_ignored() {
        let mut model = fixture();
        model.set_cursor(pos(2, 4));
        model.set_text(["abcdefghijklmnopqrstuvwxyz", "", "0123456789"]);
        assert_eq2!(model.get_cursor(), pos(2, 4));
    }

    #[test]
    fn test_shift_navigation_extends_selection() {
        let mut model = fixture();
        let mut clipboard = TestClipboard::default();
        let shift = ModifierKeysMask::new().with_shift();
        model.set_cursor(pos(0, 2));

        assert!(model.handle_key(Key::Right, shift, &mut clipboard));
        assert!(model.handle_key(Key::Down, shift, &mut clipboard));
        assert_eq2!(model.get_cursor(), pos(1, 0));
        assert_eq2!(
            model.get_selection(),
            TextEditSelection::new(pos(0, 2), pos(1, 0))
        );

        assert!(model.handle_key(Key::Left, ModifierKeysMask::new(), &mut clipboard));
        assert_eq2!(model.get_cursor(), pos(0, 26));
        assert!(!model.get_selection().is_valid());
    }

    #[test]
    fn test_page_keys_use_page_rows() {
        let mut model = TextEditModel::new(["a", "b", "c", "d", "e"]);
        let mut clipboard = TestClipboard::default();
        model.set_page_rows(2);

        model.handle_key(Key::PageDown, ModifierKeysMask::new(), &mut clipboard);
        assert_eq2!(model.get_cursor(), pos(2, 0));
        model.handle_key(Key::PageDown, ModifierKeysMask::new(), &mut clipboard);
        model.handle_key(Key::PageDown, ModifierKeysMask::new(), &mut clipboard);
        assert_eq2!(model.get_cursor(), pos(4, 0));
        model.handle_key(Key::PageUp, ModifierKeysMask::new(), &mut clipboard);
        assert_eq2!(model.get_cursor(), pos(2, 0));
    }

    #[test]
    fn test_unhandled_keys() {
        let mut model = fixture();
        let mut clipboard = TestClipboard::default();
        let none = ModifierKeysMask::new();
        let alt = ModifierKeysMask::new().with_alt();

        assert!(model.handle_key(Key::Character('q'), none, &mut clipboard));
        assert!(!model.handle_key(Key::Escape, none, &mut clipboard));
        assert!(!model.handle_key(Key::Function(5), none, &mut clipboard));
        assert!(!model.handle_key(Key::Character('q'), alt, &mut clipboard));
        assert_eq2!(model.to_text(), "abcdefghijklmnopqrstuvwxyz\n\n0123456789");
    }

    #[test]
    fn test_read_only_blocks_edits_but_not_navigation_or_copy() {
        let mut model = fixture();
        let mut clipboard = TestClipboard::default();
        let none = ModifierKeysMask::new();
        let cmd = crate::command_key_modifier();
        model.set_read_only(true);
        model.set_cursor(pos(0, 3));

        assert!(!model.handle_key(Key::Backspace, none, &mut clipboard));
        assert!(!model.handle_key(Key::Return, none, &mut clipboard));
        assert!(!model.handle_key(Key::Character('v'), cmd, &mut clipboard));
        model.input("zzz");
        assert_eq2!(model.get_text().line(0), Some("abcdefghijklmnopqrstuvwxyz"));

        assert!(model.handle_key(Key::Right, none, &mut clipboard));
        assert_eq2!(model.get_cursor(), pos(0, 4));
        assert!(model.handle_key(Key::Character('a'), cmd, &mut clipboard));
        assert!(model.handle_key(Key::Character('c'), cmd, &mut clipboard));
        assert_eq2!(
            clipboard.content,
            "abcdefghijklmnopqrstuvwxyz\n\n0123456789"
        );
    }

    #[test]
    fn test_undo_redo() {
        let mut model = TextEditModel::new(["abc"]);
        model.set_cursor(pos(0, 3));
        model.input("d");
        model.input("e");
        assert_eq2!(model.to_text(), "abcde");

        model.undo();
        assert_eq2!(model.to_text(), "abcd");
        assert_eq2!(model.get_cursor(), pos(0, 4));
        model.undo();
        assert_eq2!(model.to_text(), "abc");
        assert_eq2!(model.get_cursor(), pos(0, 3));
        model.undo();
        assert_eq2!(model.to_text(), "abc");

        model.redo();
        model.redo();
        assert_eq2!(model.to_text(), "abcde");
        assert_eq2!(model.get_cursor(), pos(0, 5));
        assert!(!model.can_redo());
    }

    #[test]
    fn test_undo_returns_caret_to_where_edit_began() {
        let mut model = fixture();
        model.set_cursor(pos(2, 5));
        model.input("!");
        model.set_cursor(pos(0, 2));
        model.input("?");

        model.undo();
        assert_eq2!(model.get_text().line(0), Some("abcdefghijklmnopqrstuvwxyz"));
        assert_eq2!(model.get_cursor(), pos(0, 2));
        model.undo();
        assert_eq2!(model.get_text().line(2), Some("0123456789"));
        assert_eq2!(model.get_cursor(), pos(2, 5));
    }

    #[test]
    fn test_command_shortcuts_ignore_case() {
        let mut model = TextEditModel::new(["abc"]);
        let mut clipboard = TestClipboard::default();
        let cmd = crate::command_key_modifier();

        assert!(model.handle_key(Key::Character('A'), cmd, &mut clipboard));
        assert!(model.handle_key(Key::Character('X'), cmd, &mut clipboard));
        assert_eq2!(clipboard.content, "abc");
        assert_eq2!(model.to_text(), "");
        assert!(model.handle_key(Key::Character('V'), cmd, &mut clipboard));
        assert_eq2!(model.to_text(), "abc");
        assert!(!model.handle_key(Key::Character('q'), cmd, &mut clipboard));
    }

    #[test]
    fn test_undo_redo_shortcuts() {
        let mut model = TextEditModel::new(["abc"]);
        let mut clipboard = TestClipboard::default();
        let cmd = crate::command_key_modifier();
        model.set_cursor(pos(0, 3));
        model.input("!");

        assert!(model.handle_key(Key::Character('z'), cmd, &mut clipboard));
        assert_eq2!(model.to_text(), "abc");
        assert!(model.handle_key(Key::Character('Y'), cmd, &mut clipboard));
        assert_eq2!(model.to_text(), "abc!");
    }

    #[test]
    fn test_options_gate() {
        let mut model = fixture();
        let seen = Rc::new(RefCell::new(vec![]));
        let seen_clone = seen.clone();
        let id = model.subscribe_options(move |it| seen_clone.borrow_mut().push(it.tab_spaces));

        model.set_options(TextEditModelOptions::new(4));
        model.set_options(TextEditModelOptions::new(2));
        assert!(model.unsubscribe_options(id));
        model.set_options(TextEditModelOptions::new(8));

        assert_eq2!(*seen.borrow(), vec![4, 2]);
        assert_eq2!(model.get_options().tab_spaces, 8);
    }
}

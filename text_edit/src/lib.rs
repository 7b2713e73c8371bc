// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_text_edit
//!
//! The in-memory engine behind a multi-line text edit widget. It owns the document (a
//! non-empty list of lines), the cursor, and the selection, and it implements every
//! structural edit on top of a single splice primitive:
//!
//! - insert text, backspace, forward delete, split line (return key),
//! - indent / outdent (tab / shift + tab),
//! - cut / copy / paste through a [`ClipboardService`],
//! - select all / clear selection, and undo / redo.
//!
//! Rendering, layout and the window event loop live elsewhere. The owning widget feeds
//! keys into [`TextEditModel::handle_key()`] and typed text into
//! [`TextEditModel::input()`], and it observes the results through the
//! `subscribe_*()` methods. Observers are only notified when a value actually changes.
//!
//! ```
//! use r3bl_text_edit::{Key, ModifierKeysMask, TextEditModel, TextEditPos,
//!                      clipboard_test_fixtures::TestClipboard};
//!
//! let mut clipboard = TestClipboard::default();
//! let mut model = TextEditModel::new(["hello", "world"]);
//!
//! model.set_cursor(TextEditPos::new(0, 5));
//! model.handle_key(Key::Return, ModifierKeysMask::new(), &mut clipboard);
//! model.input("!");
//!
//! assert_eq!(model.get_text().lines(), &["hello", "!", "world"]);
//! assert_eq!(model.get_cursor(), TextEditPos::new(1, 1));
//! ```
//!
//! # Positions
//!
//! A [`TextEditPos`] is a `(line, chr)` pair where `chr` counts Unicode scalar values
//! (not bytes, and not grapheme clusters). Every position that the model stores or
//! publishes is clamped into the bounds of the current [`Document`].
//!
//! # Logging
//!
//! The model emits [`tracing`] events. Nothing is installed by default, use
//! [`try_initialize_logging_global()`] or [`try_initialize_logging_thread_local()`] to
//! see them.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod core;
pub mod editor;

// Re-export.
pub use crate::core::*;
pub use editor::*;

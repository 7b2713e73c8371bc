// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod clipboard_ops;
pub mod clipboard_service;
pub mod document;
pub mod document_nav;
pub mod edit_ops;
pub mod history;
pub mod key;
pub mod options;
pub mod text_edit_model;
pub mod text_edit_pos;

// Re-export.
pub use clipboard_service::*;
pub use document::*;
pub use document_nav::*;
pub use edit_ops::*;
pub use history::*;
pub use key::*;
pub use options::*;
pub use text_edit_model::*;
pub use text_edit_pos::*;

/// Module scoped `DEBUG` const. When `true` every edit emits a [`tracing::debug!`] event.
/// Nothing is printed unless a subscriber is installed, see
/// [`crate::try_initialize_logging_global()`].
pub const DEBUG_TEXT_EDIT_MOD: bool = true;

// Enable or disable debug logging for clipboard round trips.
pub const DEBUG_TEXT_EDIT_COPY_PASTE: bool = true;

// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::error::Error;

use copypasta_ext::{copypasta::ClipboardProvider, x11_fork::ClipboardContext};

use crate::{DEBUG_TEXT_EDIT_COPY_PASTE, throws};

pub type ClipboardResult<T> = Result<T, Box<dyn Error + Send + Sync + 'static>>;

/// Abstraction for the clipboard service for dependency injection. This trait is
/// implemented by both a test clipboard service and a system clipboard service.
///
/// Errors never reach callers of [`crate::TextEditModel`]: a failed read counts as an
/// empty clipboard, and a failed write is logged.
pub trait ClipboardService {
    /// # Errors
    ///
    /// Returns an error if the platform clipboard can't be opened or written.
    fn try_to_put_content_into_clipboard(
        &mut self,
        content: String,
    ) -> ClipboardResult<()>;

    /// # Errors
    ///
    /// Returns an error if the platform clipboard can't be opened or read.
    fn try_to_get_content_from_clipboard(&mut self) -> ClipboardResult<String>;
}

/// The OS clipboard. On X11 the content is served by a forked process, so it survives
/// the editor exiting.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardService for SystemClipboard {
    fn try_to_put_content_into_clipboard(
        &mut self,
        content: String,
    ) -> ClipboardResult<()> {
        throws!({
            let mut ctx = ClipboardContext::new()?;
            ctx.set_contents(content.clone())?;

            DEBUG_TEXT_EDIT_COPY_PASTE.then(|| {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "📋 Selected text was copied to system clipboard",
                    copied = %content,
                );
            });
        })
    }

    fn try_to_get_content_from_clipboard(&mut self) -> ClipboardResult<String> {
        let mut ctx = ClipboardContext::new()?;
        let content = ctx.get_contents()?;

        Ok(content)
    }
}

pub mod clipboard_test_fixtures {
    use super::{ClipboardResult, ClipboardService};

    /// In memory clipboard.
    #[derive(Debug, Default, Clone, PartialEq, Eq)]
    pub struct TestClipboard {
        pub content: String,
    }

    impl TestClipboard {
        pub fn new(content: impl Into<String>) -> Self {
            Self {
                content: content.into(),
            }
        }
    }

    impl ClipboardService for TestClipboard {
        fn try_to_put_content_into_clipboard(
            &mut self,
            content: String,
        ) -> ClipboardResult<()> {
            self.content = content;
            Ok(())
        }

        fn try_to_get_content_from_clipboard(&mut self) -> ClipboardResult<String> {
            Ok(self.content.clone())
        }
    }

    /// A clipboard that is never available, eg: a headless session.
    #[derive(Debug, Default)]
    pub struct UnavailableClipboard;

    impl ClipboardService for UnavailableClipboard {
        fn try_to_put_content_into_clipboard(
            &mut self,
            _content: String,
        ) -> ClipboardResult<()> {
            Err("clipboard is unavailable".into())
        }

        fn try_to_get_content_from_clipboard(&mut self) -> ClipboardResult<String> {
            Err("clipboard is unavailable".into())
        }
    }
}

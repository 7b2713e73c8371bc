// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::{IntoDiagnostic, WrapErr};
use serde::{Deserialize, Serialize};

use crate::CommonResult;

pub const DEFAULT_TAB_SPACES: usize = 4;

/// Range accepted by [`TextEditModelOptions::try_from_json()`], the same one a settings
/// editor offers.
pub const TAB_SPACES_RANGE: std::ops::RangeInclusive<usize> = 1..=8;

/// Options for [`crate::TextEditModel`]. This is persisted as `{"TabSpaces": 4}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TextEditModelOptions {
    /// Width of one indent step, and the number of spaces that the tab key inserts.
    #[serde(rename = "TabSpaces")]
    pub tab_spaces: usize,
}

impl Default for TextEditModelOptions {
    fn default() -> Self {
        Self {
            tab_spaces: DEFAULT_TAB_SPACES,
        }
    }
}

impl TextEditModelOptions {
    #[must_use]
    pub fn new(tab_spaces: usize) -> Self { Self { tab_spaces } }

    /// The string that one indent step inserts.
    #[must_use]
    pub fn indent(&self) -> String { " ".repeat(self.tab_spaces) }

    /// Missing keys fall back to [`Default`].
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is malformed, or if `TabSpaces` is outside
    /// [`TAB_SPACES_RANGE`].
    pub fn try_from_json(json: &str) -> CommonResult<Self> {
        let it: Self = serde_json::from_str(json)
            .into_diagnostic()
            .wrap_err(OptionsErrorCouldNot::ParseJson)?;

        if !TAB_SPACES_RANGE.contains(&it.tab_spaces) {
            return Err(OptionsErrorCouldNot::AcceptTabSpaces {
                tab_spaces: it.tab_spaces,
            }
            .into());
        }

        Ok(it)
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn try_to_json(&self) -> CommonResult<String> {
        serde_json::to_string(self)
            .into_diagnostic()
            .wrap_err(OptionsErrorCouldNot::SerializeJson)
    }
}

pub mod options_error {
    #[derive(thiserror::Error, Debug, miette::Diagnostic)]
    pub enum OptionsErrorCouldNot {
        #[error("📄 Could not parse text edit options from JSON")]
        ParseJson,

        #[error("📄 Could not serialize text edit options to JSON")]
        SerializeJson,

        #[error("↹ Could not accept tab spaces: '{tab_spaces}', expected 1 to 8")]
        #[diagnostic(help("Pick a tab width between 1 and 8"))]
        AcceptTabSpaces { tab_spaces: usize },
    }
}
pub use options_error::OptionsErrorCouldNot;

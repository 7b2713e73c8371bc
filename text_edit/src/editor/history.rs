// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::VecDeque,
          fmt::{Debug, Formatter, Result}};

use crate::{DEBUG_TEXT_EDIT_MOD, Document, TextEditPos};

pub const MAX_UNDO_REDO_SIZE: usize = 16;

/// What gets restored by undo and redo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistorySnapshot {
    pub document: Document,
    pub cursor: TextEditPos,
}

/// # Undo/Redo Algorithm
///
/// `versions` holds snapshots of the document (and the cursor that goes with it), taken
/// after each edit completes. `current_index` points at the snapshot that matches what
/// is on screen right now. The first snapshot is the baseline, taken when the text is
/// loaded.
///
/// ## Recording a new state ([`TextEditHistory::record()`])
///
/// 0. The caller first moves the current snapshot's cursor to where the caret was just
///    before the edit ([`TextEditHistory::update_current_cursor()`]), so undoing the
///    edit puts the caret back where it began.
/// 1. Everything after `current_index` is truncated. This discards the states that undo
///    walked back over, so they can't be redone anymore.
/// 2. The snapshot is appended and `current_index` moves to it.
/// 3. If there are now more than [`MAX_UNDO_REDO_SIZE`] snapshots, the oldest one is
///    dropped.
///
/// ## Undoing ([`TextEditHistory::undo()`])
///
/// If `current_index > 0` it is decremented and that snapshot is returned. At the
/// baseline nothing happens.
///
/// ## Redoing ([`TextEditHistory::redo()`])
///
/// If there is a snapshot after `current_index` it is incremented and that snapshot is
/// returned. Otherwise nothing happens.
#[derive(Clone, PartialEq)]
pub struct TextEditHistory {
    versions: VecDeque<HistorySnapshot>,
    current_index: usize,
}

impl TextEditHistory {
    #[must_use]
    pub fn new(baseline: HistorySnapshot) -> Self {
        let mut versions = VecDeque::with_capacity(MAX_UNDO_REDO_SIZE);
        versions.push_back(baseline);
        Self {
            versions,
            current_index: 0,
        }
    }

    /// Forget everything, start over with `baseline`.
    pub fn reset(&mut self, baseline: HistorySnapshot) { *self = Self::new(baseline); }

    pub fn record(&mut self, snapshot: HistorySnapshot) {
        self.versions.truncate(self.current_index + 1);
        self.versions.push_back(snapshot);
        if self.versions.len() > MAX_UNDO_REDO_SIZE {
            self.versions.pop_front();
        }
        self.current_index = self.versions.len() - 1;

        DEBUG_TEXT_EDIT_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "📜 history record",
                current_index = %self.current_index,
                version_count = %self.versions.len(),
            );
        });
    }

    /// The caret may have moved since the current snapshot was taken.
    pub fn update_current_cursor(&mut self, cursor: TextEditPos) {
        if let Some(it) = self.versions.get_mut(self.current_index) {
            it.cursor = cursor;
        }
    }

    pub fn undo(&mut self) -> Option<&HistorySnapshot> {
        if !self.can_undo() {
            return None;
        }
        self.current_index -= 1;
        self.versions.get(self.current_index)
    }

    pub fn redo(&mut self) -> Option<&HistorySnapshot> {
        if !self.can_redo() {
            return None;
        }
        self.current_index += 1;
        self.versions.get(self.current_index)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool { self.current_index > 0 }

    #[must_use]
    pub fn can_redo(&self) -> bool { self.current_index + 1 < self.versions.len() }

    #[must_use]
    pub fn len(&self) -> usize { self.versions.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.versions.is_empty() }

    #[must_use]
    pub fn current_index(&self) -> usize { self.current_index }
}

impl Default for TextEditHistory {
    fn default() -> Self {
        Self::new(HistorySnapshot {
            document: Document::default(),
            cursor: TextEditPos::default(),
        })
    }
}

impl Debug for TextEditHistory {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "TextEditHistory [index: {} / {}]",
            self.current_index,
            self.versions.len()
        )
    }
}

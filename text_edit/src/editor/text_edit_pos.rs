// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

/// A location between two characters of a line. `chr` counts Unicode scalar values, and
/// `chr == line length` means "end of line".
///
/// Ordering is lexicographic on `(line, chr)`, which is what the derive gives us since
/// `line` is declared first.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TextEditPos {
    pub line: usize,
    pub chr: usize,
}

impl TextEditPos {
    #[must_use]
    pub const fn new(line: usize, chr: usize) -> Self { Self { line, chr } }

    #[must_use]
    pub const fn with_chr(self, chr: usize) -> Self { Self { line: self.line, chr } }
}

impl Display for TextEditPos {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}:{}", self.line, self.chr) }
}

/// `anchor` is where the selection started, `head` follows the cursor. When both are
/// equal there is no selection, and that is also what [`Default`] returns.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextEditSelection {
    pub anchor: TextEditPos,
    pub head: TextEditPos,
}

impl TextEditSelection {
    #[must_use]
    pub const fn new(anchor: TextEditPos, head: TextEditPos) -> Self {
        Self { anchor, head }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool { self.anchor != self.head }

    #[must_use]
    pub fn min(&self) -> TextEditPos { self.anchor.min(self.head) }

    #[must_use]
    pub fn max(&self) -> TextEditPos { self.anchor.max(self.head) }

    /// Same span with `anchor <= head`.
    #[must_use]
    pub fn normalized(&self) -> Self { Self::new(self.min(), self.max()) }
}

impl From<TextEditPos> for TextEditSelection {
    fn from(pos: TextEditPos) -> Self { Self::new(pos, pos) }
}

impl From<(TextEditPos, TextEditPos)> for TextEditSelection {
    fn from((anchor, head): (TextEditPos, TextEditPos)) -> Self { Self::new(anchor, head) }
}

impl Display for TextEditSelection {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}->{}", self.anchor, self.head)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(TextEditPos::new(0, 9), TextEditPos::new(1, 0) ; "earlier line wins over chr")]
    #[test_case(TextEditPos::new(2, 1), TextEditPos::new(2, 3) ; "same line compares chr")]
    fn test_pos_ordering(lesser: TextEditPos, greater: TextEditPos) {
        assert!(lesser < greater);
        assert_eq2!(lesser.max(greater), greater);
    }

    #[test]
    fn test_selection_min_max_for_backwards_selection() {
        let sel = TextEditSelection::new(TextEditPos::new(3, 2), TextEditPos::new(1, 7));
        assert!(sel.is_valid());
        assert_eq2!(sel.min(), TextEditPos::new(1, 7));
        assert_eq2!(sel.max(), TextEditPos::new(3, 2));
        assert_eq2!(
            sel.normalized(),
            TextEditSelection::new(TextEditPos::new(1, 7), TextEditPos::new(3, 2))
        );
    }

    #[test]
    fn test_collapsed_selection_is_invalid() {
        let sel: TextEditSelection = TextEditPos::new(4, 4).into();
        assert!(!sel.is_valid());
        assert!(!TextEditSelection::default().is_valid());
    }

    #[test]
    fn test_display() {
        let sel = TextEditSelection::new(TextEditPos::new(0, 1), TextEditPos::new(2, 10));
        assert_eq2!(sel.to_string(), "0:1->2:10");
    }
}

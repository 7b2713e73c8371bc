// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

/// The keys that [`crate::TextEditModel::handle_key()`] understands. Printable text does
/// not arrive here as a rule, it goes through [`crate::TextEditModel::input()`]. The
/// exception is [`Key::Character`] combined with the command modifier, which is how
/// shortcuts like `Ctrl+C` show up.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display,
)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    Backspace,
    Delete,
    Return,
    KeypadEnter,
    Tab,
    Escape,
    Insert,
    CapsLock,
    NumLock,
    ScrollLock,
    PrintScreen,
    Pause,
    Function(u8),
    Character(char),
}

impl Key {
    /// Keys that never produce text on their own. When one of these isn't handled and
    /// no modifier is held, the owning widget should let the event propagate.
    #[must_use]
    pub fn is_control_key(&self) -> bool {
        match self {
            Key::Left
            | Key::Right
            | Key::Up
            | Key::Down
            | Key::Home
            | Key::End
            | Key::PageUp
            | Key::PageDown
            | Key::Backspace
            | Key::Delete
            | Key::Return
            | Key::KeypadEnter
            | Key::Escape
            | Key::Insert
            | Key::CapsLock
            | Key::NumLock
            | Key::ScrollLock
            | Key::PrintScreen
            | Key::Pause
            | Key::Function(_) => true,
            Key::Tab | Key::Character(_) => false,
        }
    }

    /// Keys that only move the caret.
    #[must_use]
    pub fn is_navigation_key(&self) -> bool {
        matches!(
            self,
            Key::Left
                | Key::Right
                | Key::Up
                | Key::Down
                | Key::Home
                | Key::End
                | Key::PageUp
                | Key::PageDown
        )
    }

    /// Case insensitive check for a shortcut letter.
    #[must_use]
    pub fn is_character_ignore_case(&self, expected: char) -> bool {
        match self {
            Key::Character(ch) => ch.eq_ignore_ascii_case(&expected),
            _ => false,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ModifierKeysMask {
    pub shift_key_state: KeyState,
    pub ctrl_key_state: KeyState,
    pub alt_key_state: KeyState,
    pub super_key_state: KeyState,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyState {
    Pressed,
    #[default]
    NotPressed,
}

impl From<bool> for KeyState {
    fn from(pressed: bool) -> Self {
        if pressed {
            KeyState::Pressed
        } else {
            KeyState::NotPressed
        }
    }
}

impl ModifierKeysMask {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn with_shift(mut self) -> Self {
        self.shift_key_state = KeyState::Pressed;
        self
    }

    #[must_use]
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl_key_state = KeyState::Pressed;
        self
    }

    #[must_use]
    pub fn with_alt(mut self) -> Self {
        self.alt_key_state = KeyState::Pressed;
        self
    }

    #[must_use]
    pub fn with_super(mut self) -> Self {
        self.super_key_state = KeyState::Pressed;
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { *self == Self::default() }

    /// Exactly shift, nothing else.
    #[must_use]
    pub fn is_shift_only(&self) -> bool { *self == Self::new().with_shift() }

    /// Exactly the platform's command modifier, nothing else.
    #[must_use]
    pub fn is_command_only(&self) -> bool { *self == command_key_modifier() }
}

/// The modifier used for shortcuts: `Super` (⌘) on macOS, `Ctrl` everywhere else.
#[must_use]
pub fn command_key_modifier() -> ModifierKeysMask {
    if cfg!(target_os = "macos") {
        ModifierKeysMask::new().with_super()
    } else {
        ModifierKeysMask::new().with_ctrl()
    }
}

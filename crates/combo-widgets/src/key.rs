//! Host-neutral keyboard input.
//!
//! The select widget reasons about keys by their W3C `KeyboardEvent.key`
//! names. Terminal hosts convert crossterm events with `From<KeyEvent>`, web
//! hosts parse raw key names with [`Key::from_name`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A named key or a printable character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Enter,
    /// The space bar. Kept apart from [`Key::Character`] because it opens
    /// and commits rather than typing.
    Space,
    Escape,
    Home,
    End,
    PageUp,
    PageDown,
    Backspace,
    Clear,
    Tab,
    Delete,
    /// A single printable character.
    Character(char),
    /// Anything else (function keys, media keys, lone modifiers).
    Other,
}

impl Key {
    /// Parse a W3C `KeyboardEvent.key` value.
    ///
    /// ```
    /// use combo_widgets::key::Key;
    ///
    /// assert_eq!(Key::from_name("ArrowDown"), Key::ArrowDown);
    /// assert_eq!(Key::from_name(" "), Key::Space);
    /// assert_eq!(Key::from_name("g"), Key::Character('g'));
    /// assert_eq!(Key::from_name("F5"), Key::Other);
    /// ```
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowUp" | "Up" => Key::ArrowUp,
            "ArrowDown" | "Down" => Key::ArrowDown,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            "Enter" => Key::Enter,
            " " | "Spacebar" => Key::Space,
            "Escape" | "Esc" => Key::Escape,
            "Home" => Key::Home,
            "End" => Key::End,
            "PageUp" => Key::PageUp,
            "PageDown" => Key::PageDown,
            "Backspace" => Key::Backspace,
            "Clear" => Key::Clear,
            "Tab" => Key::Tab,
            "Delete" | "Del" => Key::Delete,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::from(c),
                    _ => Key::Other,
                }
            }
        }
    }

    /// The printable character this key types, if any.
    pub fn printable(self) -> Option<char> {
        match self {
            Key::Character(c) => Some(c),
            _ => None,
        }
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        if c == ' ' {
            Key::Space
        } else if c.is_control() {
            Key::Other
        } else {
            Key::Character(c)
        }
    }
}

/// A key press together with its modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyInput {
    pub key: Key,
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl KeyInput {
    /// A key press with no modifiers held.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            alt: false,
            ctrl: false,
            meta: false,
            shift: false,
        }
    }

    /// A key press parsed from a W3C key name.
    pub fn named(name: &str) -> Self {
        Self::new(Key::from_name(name))
    }

    /// Set the Alt modifier.
    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    /// Set the Ctrl modifier.
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    /// Set the Meta (Cmd / Super) modifier.
    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    /// Set the Shift modifier.
    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Whether any of Alt, Ctrl or Meta is held.
    pub fn has_command_modifier(&self) -> bool {
        self.alt || self.ctrl || self.meta
    }
}

impl From<Key> for KeyInput {
    fn from(key: Key) -> Self {
        KeyInput::new(key)
    }
}

impl From<KeyEvent> for KeyInput {
    fn from(event: KeyEvent) -> Self {
        let key = match event.code {
            KeyCode::Up => Key::ArrowUp,
            KeyCode::Down => Key::ArrowDown,
            KeyCode::Left => Key::ArrowLeft,
            KeyCode::Right => Key::ArrowRight,
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Tab | KeyCode::BackTab => Key::Tab,
            KeyCode::Delete => Key::Delete,
            KeyCode::Char(c) => Key::from(c),
            _ => Key::Other,
        };
        let m = event.modifiers;
        Self {
            key,
            alt: m.contains(KeyModifiers::ALT),
            ctrl: m.contains(KeyModifiers::CONTROL),
            meta: m.intersects(KeyModifiers::META | KeyModifiers::SUPER),
            shift: m.contains(KeyModifiers::SHIFT),
        }
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard keys relevant to disclosure widgets.

/// A key press, reduced to what the key maps care about.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// A single printable character. Space is `Char(' ')`.
    Char(char),
    /// Enter / Return.
    Enter,
    /// Escape.
    Escape,
    /// Tab (with or without Shift).
    Tab,
    /// Arrow up.
    ArrowUp,
    /// Arrow down.
    ArrowDown,
    /// Home.
    Home,
    /// End.
    End,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Anything else (modifiers, function keys, …).
    Other,
}

impl Key {
    /// The space bar.
    pub const SPACE: Self = Self::Char(' ');

    /// Parse a DOM `KeyboardEvent.key` value.
    ///
    /// ```rust
    /// use understory_disclosure::Key;
    ///
    /// assert_eq!(Key::from_dom("ArrowDown"), Key::ArrowDown);
    /// assert_eq!(Key::from_dom(" "), Key::SPACE);
    /// assert_eq!(Key::from_dom("q"), Key::Char('q'));
    /// assert_eq!(Key::from_dom("Shift"), Key::Other);
    /// ```
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Enter" => Self::Enter,
            "Escape" | "Esc" => Self::Escape,
            "Tab" => Self::Tab,
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowDown" | "Down" => Self::ArrowDown,
            "Home" => Self::Home,
            "End" => Self::End,
            "PageUp" => Self::PageUp,
            "PageDown" => Self::PageDown,
            "Spacebar" => Self::SPACE,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Self::Char(ch),
                    _ => Self::Other,
                }
            }
        }
    }
}

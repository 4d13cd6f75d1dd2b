// Copyright 2026 the Lanyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard input as seen by the date field.

use bitflags::bitflags;

bitflags! {
    /// Modifier keys held during a key press.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 1;
        /// Control.
        const CTRL = 1 << 1;
        /// Alt / Option.
        const ALT = 1 << 2;
        /// Meta / Command / Super.
        const META = 1 << 3;
    }
}

impl Modifiers {
    /// Returns `true` if the platform "command" modifier is held (Ctrl or Meta).
    #[must_use]
    pub fn has_command(self) -> bool {
        self.intersects(Self::CTRL | Self::META)
    }
}

/// A key press delivered to the date field.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// A key producing a character, reported as the character it produces.
    Character(char),
    /// Escape.
    Escape,
    /// Any key the date field has no binding for.
    Other,
}

/// The action a key press maps to, if any.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Shortcut {
    SelectToday,
    Dismiss,
}

impl Shortcut {
    /// Command + `t` selects today; Escape dismisses the popup.
    pub(crate) fn lookup(key: Key, modifiers: Modifiers) -> Option<Self> {
        match key {
            Key::Character('t') if modifiers.has_command() => Some(Self::SelectToday),
            Key::Escape => Some(Self::Dismiss),
            _ => None,
        }
    }
}

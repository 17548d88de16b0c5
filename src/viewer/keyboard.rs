// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcuts for the viewer overlay.
//!
//! Dispatch is stateless: every key press is checked against a snapshot
//! taken at dispatch time, because phase and boundary state can change
//! between two presses.

use super::navigation::{Direction, NavigationFlags};
use iced::keyboard::{key::Named, Key};

/// Default character toggling fullscreen.
pub const DEFAULT_FULLSCREEN_KEY: char = 'f';

/// Keys the viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerKey {
    Next,
    Previous,
    Escape,
    ToggleFullscreen,
}

/// Maps platform keys to [`ViewerKey`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    fullscreen: char,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new(DEFAULT_FULLSCREEN_KEY)
    }
}

impl KeyBindings {
    #[must_use]
    pub fn new(fullscreen: char) -> Self {
        Self {
            fullscreen: fullscreen.to_ascii_lowercase(),
        }
    }

    #[must_use]
    pub fn fullscreen_key(&self) -> char {
        self.fullscreen
    }

    /// Returns the viewer key bound to `key`, if any.
    #[must_use]
    pub fn resolve(&self, key: &Key) -> Option<ViewerKey> {
        match key {
            Key::Named(Named::ArrowRight) => Some(ViewerKey::Next),
            Key::Named(Named::ArrowLeft) => Some(ViewerKey::Previous),
            Key::Named(Named::Escape) => Some(ViewerKey::Escape),
            Key::Character(c) => {
                let mut chars = c.as_str().chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) if ch.to_ascii_lowercase() == self.fullscreen => {
                        Some(ViewerKey::ToggleFullscreen)
                    }
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

/// State the dispatcher looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardSnapshot {
    pub visible: bool,
    pub navigation: NavigationFlags,
    pub fullscreen_active: bool,
    pub fullscreen_supported: bool,
}

/// What a key press asks the viewer to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Ignore,
    Navigate(Direction),
    Close,
    ToggleFullscreen,
}

/// Maps a key press to an action.
#[must_use]
pub fn dispatch(key: ViewerKey, snapshot: &KeyboardSnapshot) -> KeyAction {
    if !snapshot.visible {
        return KeyAction::Ignore;
    }

    match key {
        ViewerKey::Next if snapshot.navigation.can_next => KeyAction::Navigate(Direction::Next),
        ViewerKey::Previous if snapshot.navigation.can_prev => {
            KeyAction::Navigate(Direction::Previous)
        }
        // Escape out of fullscreen belongs to the platform.
        ViewerKey::Escape if !snapshot.fullscreen_active => KeyAction::Close,
        ViewerKey::ToggleFullscreen if snapshot.fullscreen_supported => {
            KeyAction::ToggleFullscreen
        }
        _ => KeyAction::Ignore,
    }
}

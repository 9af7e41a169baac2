//! Customizable keybindings for discrete viewer movement.
//!
//! The defaults bind the four arrow keys. A host can remap them through
//! its own settings surface; bindings serialize as part of
//! [`crate::config::ViewerConfig`].

use serde::{Deserialize, Serialize};

use crate::event::{Key, PanDirection};

/// Keybinding configuration: which key drives each discrete pan step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    /// Hotkey for moving the view up
    pub pan_up: Key,
    /// Hotkey for moving the view down
    pub pan_down: Key,
    /// Hotkey for moving the view left
    pub pan_left: Key,
    /// Hotkey for moving the view right
    pub pan_right: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            pan_up: Key::Up,
            pan_down: Key::Down,
            pan_left: Key::Left,
            pan_right: Key::Right,
        }
    }
}

impl KeyBindings {
    /// Create new keybindings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the pan direction that corresponds to a key press, if any.
    pub fn direction_for_key(&self, key: Key) -> Option<PanDirection> {
        if key == self.pan_up {
            Some(PanDirection::Up)
        } else if key == self.pan_down {
            Some(PanDirection::Down)
        } else if key == self.pan_left {
            Some(PanDirection::Left)
        } else if key == self.pan_right {
            Some(PanDirection::Right)
        } else {
            None
        }
    }

    /// Get the hotkey for a specific pan direction.
    pub fn key_for_direction(&self, direction: PanDirection) -> Key {
        match direction {
            PanDirection::Up => self.pan_up,
            PanDirection::Down => self.pan_down,
            PanDirection::Left => self.pan_left,
            PanDirection::Right => self.pan_right,
        }
    }

    /// Set the hotkey for a pan direction.
    pub fn set_key(&mut self, direction: PanDirection, key: Key) {
        match direction {
            PanDirection::Up => self.pan_up = key,
            PanDirection::Down => self.pan_down = key,
            PanDirection::Left => self.pan_left = key,
            PanDirection::Right => self.pan_right = key,
        }
    }

    /// Check if a key is already used by another binding.
    /// Returns the direction it's bound to, if any.
    pub fn key_conflict(&self, key: Key, exclude: Option<PanDirection>) -> Option<PanDirection> {
        [
            PanDirection::Up,
            PanDirection::Down,
            PanDirection::Left,
            PanDirection::Right,
        ]
        .into_iter()
        .filter(|direction| exclude != Some(*direction))
        .find(|direction| self.key_for_direction(*direction) == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings_are_arrows() {
        let bindings = KeyBindings::new();
        assert_eq!(bindings.direction_for_key(Key::Up), Some(PanDirection::Up));
        assert_eq!(bindings.direction_for_key(Key::Down), Some(PanDirection::Down));
        assert_eq!(bindings.direction_for_key(Key::Left), Some(PanDirection::Left));
        assert_eq!(bindings.direction_for_key(Key::Right), Some(PanDirection::Right));
        assert_eq!(bindings.direction_for_key(Key::Space), None);
    }

    #[test]
    fn test_set_key_rebinds() {
        let mut bindings = KeyBindings::new();
        bindings.set_key(PanDirection::Up, Key::Char('w'));
        assert_eq!(bindings.direction_for_key(Key::Char('w')), Some(PanDirection::Up));
        assert_eq!(bindings.direction_for_key(Key::Up), None);
    }

    #[test]
    fn test_key_conflict() {
        let bindings = KeyBindings::new();
        assert_eq!(bindings.key_conflict(Key::Down, None), Some(PanDirection::Down));
        assert_eq!(
            bindings.key_conflict(Key::Down, Some(PanDirection::Down)),
            None
        );
        assert_eq!(bindings.key_conflict(Key::Char('x'), None), None);
    }
}

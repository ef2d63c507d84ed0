//! Keyboard to simulation input
//!
//! Key events only flip flags here. The game loop takes one [`TickInput`]
//! snapshot per frame; one-shot commands are cleared when taken.

use crate::sim::TickInput;

/// What a key does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Up,
    Down,
    Left,
    Right,
    Boost,
    Brake,
    Confirm,
    SkipLevel,
}

impl Control {
    /// Map a `KeyboardEvent.key` value. Shift+D is the level skip; Shift on
    /// its own is boost.
    pub fn from_key(key: &str, shift: bool) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Control::Up),
            "ArrowDown" => Some(Control::Down),
            "ArrowLeft" => Some(Control::Left),
            "ArrowRight" => Some(Control::Right),
            "Shift" => Some(Control::Boost),
            "z" | "Z" => Some(Control::Brake),
            "Enter" => Some(Control::Confirm),
            "D" if shift => Some(Control::SkipLevel),
            _ => None,
        }
    }
}

/// Currently held keys plus pending commands
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: TickInput,
    /// Whether Shift+D is honored
    debug_skip: bool,
}

impl KeyState {
    pub fn new(debug_skip: bool) -> Self {
        Self {
            held: TickInput::default(),
            debug_skip,
        }
    }

    /// Key went down. Returns true if the key is bound.
    pub fn press(&mut self, key: &str, shift: bool) -> bool {
        let Some(control) = Control::from_key(key, shift) else {
            return false;
        };
        match control {
            Control::Up => self.held.up = true,
            Control::Down => self.held.down = true,
            Control::Left => self.held.left = true,
            Control::Right => self.held.right = true,
            Control::Boost => self.held.boost = true,
            Control::Brake => self.held.brake = true,
            Control::Confirm => self.held.confirm = true,
            Control::SkipLevel => {
                if !self.debug_skip {
                    return false;
                }
                log::debug!("Level skip requested");
                self.held.skip_level = true;
            }
        }
        true
    }

    /// Key went up. Commands stay pending until taken.
    pub fn release(&mut self, key: &str) {
        match Control::from_key(key, false) {
            Some(Control::Up) => self.held.up = false,
            Some(Control::Down) => self.held.down = false,
            Some(Control::Left) => self.held.left = false,
            Some(Control::Right) => self.held.right = false,
            Some(Control::Boost) => self.held.boost = false,
            Some(Control::Brake) => self.held.brake = false,
            _ => {}
        }
    }

    /// Drop every held key (window lost focus, key-ups will never arrive)
    pub fn release_all(&mut self) {
        self.held = TickInput::default();
    }

    /// Snapshot for the next step; clears one-shot commands
    pub fn take(&mut self) -> TickInput {
        let input = self.held.clone();
        self.held.confirm = false;
        self.held.skip_level = false;
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(Control::from_key("ArrowLeft", false), Some(Control::Left));
        assert_eq!(Control::from_key("Z", true), Some(Control::Brake));
        assert_eq!(Control::from_key("Shift", true), Some(Control::Boost));
        assert_eq!(Control::from_key("D", true), Some(Control::SkipLevel));
        assert_eq!(Control::from_key("D", false), None);
        assert_eq!(Control::from_key("x", false), None);
    }

    #[test]
    fn test_held_keys_persist_between_snapshots() {
        let mut keys = KeyState::new(false);
        keys.press("ArrowUp", false);
        keys.press("Shift", true);
        assert!(keys.take().up);
        let input = keys.take();
        assert!(input.up && input.boost);

        keys.release("ArrowUp");
        assert!(!keys.take().up);
    }

    #[test]
    fn test_commands_are_one_shot() {
        let mut keys = KeyState::new(true);
        keys.press("Enter", false);
        keys.press("D", true);
        let input = keys.take();
        assert!(input.confirm && input.skip_level);
        let input = keys.take();
        assert!(!input.confirm && !input.skip_level);
    }

    #[test]
    fn test_release_does_not_cancel_pending_command() {
        let mut keys = KeyState::new(false);
        keys.press("Enter", false);
        keys.release("Enter");
        assert!(keys.take().confirm);
    }

    #[test]
    fn test_skip_disabled() {
        let mut keys = KeyState::new(false);
        assert!(!keys.press("D", true));
        assert!(!keys.take().skip_level);
    }

    #[test]
    fn test_release_all() {
        let mut keys = KeyState::new(false);
        keys.press("ArrowRight", false);
        keys.press("z", false);
        keys.release_all();
        assert_eq!(keys.take(), TickInput::default());
    }
}

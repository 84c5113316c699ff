//! Keyboard input handling
//!
//! The game only cares about a handful of logical keys. Everything else is
//! dropped so the host keeps its default behavior for those keys.

use serde::{Deserialize, Serialize};

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Space,
    Enter,
}

impl Key {
    pub const ALL: [Key; 4] = [Key::Up, Key::Down, Key::Space, Key::Enter];

    /// Map a legacy DOM key code to a logical key
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            38 => Some(Key::Up),
            40 => Some(Key::Down),
            32 => Some(Key::Space),
            13 => Some(Key::Enter),
            _ => None,
        }
    }

    /// Map a DOM `KeyboardEvent.key` value to a logical key
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "Up" => Some(Key::Up),
            "ArrowDown" | "Down" => Some(Key::Down),
            " " | "Spacebar" => Some(Key::Space),
            "Enter" => Some(Key::Enter),
            _ => None,
        }
    }

    pub fn code(self) -> u32 {
        match self {
            Key::Up => 38,
            Key::Down => 40,
            Key::Space => 32,
            Key::Enter => 13,
        }
    }

    fn index(self) -> usize {
        match self {
            Key::Up => 0,
            Key::Down => 1,
            Key::Space => 2,
            Key::Enter => 3,
        }
    }
}

/// Set of currently held logical keys
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    held: [bool; Key::ALL.len()],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the key for `code` as held; unknown codes are ignored
    pub fn press(&mut self, code: u32) {
        if let Some(key) = Key::from_code(code) {
            self.set(key, true);
        }
    }

    /// Mark the key for `code` as released; unknown codes are ignored
    pub fn release(&mut self, code: u32) {
        if let Some(key) = Key::from_code(code) {
            self.set(key, false);
        }
    }

    pub fn set(&mut self, key: Key, down: bool) {
        self.held[key.index()] = down;
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.held[key.index()]
    }

    /// Either start key is held
    pub fn start_requested(&self) -> bool {
        self.is_down(Key::Space) || self.is_down(Key::Enter)
    }

    /// Release every key (focus lost)
    pub fn clear(&mut self) {
        self.held = [false; Key::ALL.len()];
    }

    /// Host keydown handler. Returns true if the key was consumed.
    pub fn on_key_down(&mut self, code: u32) -> bool {
        self.apply(Key::from_code(code), true)
    }

    /// Host keyup handler. Returns true if the key was consumed.
    pub fn on_key_up(&mut self, code: u32) -> bool {
        self.apply(Key::from_code(code), false)
    }

    /// Keydown handler taking a DOM `KeyboardEvent.key` value
    pub fn on_dom_key_down(&mut self, key: &str) -> bool {
        self.apply(Key::from_dom_key(key), true)
    }

    /// Keyup handler taking a DOM `KeyboardEvent.key` value
    pub fn on_dom_key_up(&mut self, key: &str) -> bool {
        self.apply(Key::from_dom_key(key), false)
    }

    fn apply(&mut self, key: Option<Key>, down: bool) -> bool {
        match key {
            Some(key) => {
                self.set(key, down);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut input = InputState::new();
        assert!(!input.is_down(Key::Up));

        input.press(38);
        assert!(input.is_down(Key::Up));
        assert!(!input.is_down(Key::Down));

        input.release(38);
        assert!(!input.is_down(Key::Up));
    }

    #[test]
    fn test_unknown_codes_ignored() {
        let mut input = InputState::new();
        // Left arrow, page up, 'a'
        for code in [37, 33, 65, 0, 255, 1024] {
            input.press(code);
            assert!(!input.on_key_down(code));
            assert!(!input.on_key_up(code));
        }
        assert_eq!(input, InputState::new());
    }

    #[test]
    fn test_handlers_report_consumed() {
        let mut input = InputState::new();
        assert!(input.on_key_down(32));
        assert!(input.is_down(Key::Space));
        assert!(input.start_requested());
        assert!(input.on_key_up(32));
        assert!(!input.start_requested());
    }

    #[test]
    fn test_dom_key_handlers() {
        let mut input = InputState::new();
        assert!(input.on_dom_key_down("ArrowUp"));
        assert!(input.is_down(Key::Up));
        assert!(input.on_dom_key_down(" "));
        assert!(input.start_requested());

        // Not ours: left alone and reported unhandled
        assert!(!input.on_dom_key_down("ArrowLeft"));
        assert!(!input.on_dom_key_up("Tab"));

        assert!(input.on_dom_key_up("ArrowUp"));
        assert!(input.on_dom_key_up(" "));
        assert_eq!(input, InputState::new());
    }

    #[test]
    fn test_enter_requests_start() {
        let mut input = InputState::new();
        input.set(Key::Enter, true);
        assert!(input.start_requested());
    }

    #[test]
    fn test_clear() {
        let mut input = InputState::new();
        for key in Key::ALL {
            input.set(key, true);
        }
        input.clear();
        assert!(Key::ALL.iter().all(|k| !input.is_down(*k)));
    }

    #[test]
    fn test_key_mappings_agree() {
        for key in Key::ALL {
            assert_eq!(Key::from_code(key.code()), Some(key));
        }
        assert_eq!(Key::from_dom_key("ArrowDown"), Some(Key::Down));
        assert_eq!(Key::from_dom_key(" "), Some(Key::Space));
        assert_eq!(Key::from_dom_key("Escape"), None);
    }
}

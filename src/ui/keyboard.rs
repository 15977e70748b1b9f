//! Keyboard stand-in for the 4x4 matrix keypad.
//!
//! Keypad characters map to themselves. Arrows also steer (2/4/6/8), Space and
//! Enter jump (5), Esc quits (#). Ctrl-C detaches the keypad, which shuts the
//! arcade down.

use crate::hardware::{Key, Keypad};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;
use tracing::warn;

/// Map a terminal key to a keypad key.
pub fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Up => Some(Key::Digit(2)),
        KeyCode::Down => Some(Key::Digit(8)),
        KeyCode::Left => Some(Key::Digit(4)),
        KeyCode::Right => Some(Key::Digit(6)),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Key::Digit(5)),
        KeyCode::Esc => Some(Key::Hash),
        KeyCode::Char(c) => Key::from_char(c),
        _ => None,
    }
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

#[derive(Debug)]
pub struct KeyboardKeypad {
    attached: bool,
}

impl KeyboardKeypad {
    pub fn new() -> Self {
        Self { attached: true }
    }
}

impl Default for KeyboardKeypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad for KeyboardKeypad {
    /// Drains pending terminal events without blocking and returns the first
    /// one that maps to a keypad key.
    fn poll(&mut self) -> Option<Key> {
        loop {
            match event::poll(Duration::ZERO) {
                Ok(true) => {}
                Ok(false) => return None,
                Err(e) => {
                    warn!(error = %e, "keyboard poll failed, detaching");
                    self.attached = false;
                    return None;
                }
            }
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if is_interrupt(&key) {
                        self.attached = false;
                        return None;
                    }
                    if let Some(mapped) = map_key(key.code) {
                        return Some(mapped);
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(error = %e, "keyboard read failed, detaching");
                    self.attached = false;
                    return None;
                }
            }
        }
    }

    fn is_attached(&self) -> bool {
        self.attached
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypad_chars_map_directly() {
        assert_eq!(map_key(KeyCode::Char('7')), Some(Key::Digit(7)));
        assert_eq!(map_key(KeyCode::Char('a')), Some(Key::A));
        assert_eq!(map_key(KeyCode::Char('D')), Some(Key::D));
        assert_eq!(map_key(KeyCode::Char('#')), Some(Key::Hash));
        assert_eq!(map_key(KeyCode::Char('*')), Some(Key::Star));
    }

    #[test]
    fn test_arrows_steer() {
        assert_eq!(map_key(KeyCode::Up), Some(Key::Digit(2)));
        assert_eq!(map_key(KeyCode::Down), Some(Key::Digit(8)));
        assert_eq!(map_key(KeyCode::Left), Some(Key::Digit(4)));
        assert_eq!(map_key(KeyCode::Right), Some(Key::Digit(6)));
    }

    #[test]
    fn test_jump_and_quit_aliases() {
        assert_eq!(map_key(KeyCode::Char(' ')), Some(Key::Digit(5)));
        assert_eq!(map_key(KeyCode::Enter), Some(Key::Digit(5)));
        assert_eq!(map_key(KeyCode::Esc), Some(Key::Hash));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(map_key(KeyCode::Char('x')), None);
        assert_eq!(map_key(KeyCode::Tab), None);
        assert_eq!(map_key(KeyCode::F(1)), None);
    }

    #[test]
    fn test_ctrl_c_is_interrupt() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let plain_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert!(is_interrupt(&ctrl_c));
        assert!(!is_interrupt(&plain_c));
    }
}

//! Keypad commands and the debounce gate.

use crate::hardware::Key;

/// Cardinal direction for grid movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the (dx, dy) delta for this direction.
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// The closed command alphabet shared by every game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Jump,
    Restart,
    Quit,
}

/// Movement on the phone-style cross: 2 up, 8 down, 4 left, 6 right.
pub fn direction_for(key: Key) -> Option<Direction> {
    match key {
        Key::Digit(2) => Some(Direction::Up),
        Key::Digit(8) => Some(Direction::Down),
        Key::Digit(4) => Some(Direction::Left),
        Key::Digit(6) => Some(Direction::Right),
        _ => None,
    }
}

/// Rejects repeat key-downs that arrive within `interval_ms` of the last
/// accepted key.
///
/// A held key on a matrix keypad reads as pressed on every scan, so without
/// the gate one press would turn the snake several times.
#[derive(Debug, Clone)]
pub struct Debouncer {
    interval_ms: u32,
    last_accepted_ms: Option<u32>,
}

impl Debouncer {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            last_accepted_ms: None,
        }
    }

    /// Feed one scan result sampled at `now_ms`. Returns the key if it passes
    /// the gate. An empty sample never touches the timestamp.
    pub fn accept(&mut self, key: Option<Key>, now_ms: u32) -> Option<Key> {
        let key = key?;
        if let Some(last) = self.last_accepted_ms {
            let elapsed = now_ms.wrapping_sub(last);
            if self.interval_ms > 0 && elapsed <= self.interval_ms {
                return None;
            }
        }
        self.last_accepted_ms = Some(now_ms);
        Some(key)
    }
}

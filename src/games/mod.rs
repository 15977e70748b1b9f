//! The arcade's games and the menu that launches them.

pub mod flappy;
pub mod menu;
pub mod placeholder;
pub mod snake;

pub use flappy::FlappyGame;
pub use menu::{draw_menu, Dispatcher};
pub use placeholder::ComingSoon;
pub use snake::{Boundary, SnakeGame};

use crate::hardware::Key;

/// Menu entries, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    Snake,
    Brick,
    Flappy,
    Game2048,
}

impl GameKind {
    pub const ALL: [GameKind; 4] = [
        GameKind::Snake,
        GameKind::Brick,
        GameKind::Flappy,
        GameKind::Game2048,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Snake => "snake",
            Self::Brick => "brick",
            Self::Flappy => "flappy",
            Self::Game2048 => "2048",
        }
    }

    /// Menu key that launches this game.
    pub fn select_key(&self) -> Key {
        match self {
            Self::Snake => Key::A,
            Self::Brick => Key::B,
            Self::Flappy => Key::C,
            Self::Game2048 => Key::D,
        }
    }

    pub fn from_key(key: Key) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.select_key() == key)
    }

    fn index(&self) -> usize {
        match self {
            Self::Snake => 0,
            Self::Brick => 1,
            Self::Flappy => 2,
            Self::Game2048 => 3,
        }
    }
}

/// Best score per game since power-on. Nothing is written to disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighScores {
    scores: [u32; GameKind::ALL.len()],
}

impl HighScores {
    pub fn get(&self, kind: GameKind) -> u32 {
        self.scores[kind.index()]
    }

    /// Keep `score` if it beats the stored one. Returns true when it did.
    pub fn record(&mut self, kind: GameKind, score: u32) -> bool {
        let slot = &mut self.scores[kind.index()];
        if score > *slot {
            *slot = score;
            true
        } else {
            false
        }
    }
}

//! Screen for menu entries that have no game yet.
//!
//! Runs through the regular session engine so the quit path is the same as
//! for a real game. It never collides and never scores.

use super::GameKind;
use crate::core::constants::MENU_POLL_MS;
use crate::core::input::Command;
use crate::core::session::{ArcadeGame, StepOutcome};
use crate::hardware::{Canvas, Color, Font, Key};
use rand::RngCore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComingSoon {
    pub kind: GameKind,
}

impl ComingSoon {
    pub fn new(kind: GameKind) -> Self {
        Self { kind }
    }
}

impl ArcadeGame for ComingSoon {
    fn title(&self) -> &'static str {
        self.kind.name()
    }

    fn debounce_ms(&self) -> u32 {
        0
    }

    fn command_for(&self, key: Key) -> Option<Command> {
        (key == Key::Hash).then_some(Command::Quit)
    }

    fn apply(&mut self, _command: Command) {}

    fn step<R: RngCore>(&mut self, _rng: &mut R) -> StepOutcome {
        StepOutcome::Advanced
    }

    fn restart<R: RngCore>(&mut self, _rng: &mut R) {}

    fn frame_delay_ms(&self) -> u32 {
        MENU_POLL_MS
    }

    fn render<D: Canvas>(&self, canvas: &mut D) {
        let cx = canvas.width() / 2;
        let y = canvas.height() / 3;

        canvas.set_bg_color(Color::BLACK);
        canvas.clear();
        canvas.set_color(Color::WHITE);
        canvas.set_font(Font::Large);
        canvas.draw_string_hcenter_at(self.kind.name(), cx, y);

        canvas.set_color(Color::GRAY);
        canvas.set_font(Font::Small);
        canvas.draw_string_hcenter_at("Coming soon", cx, y + 30);
        canvas.draw_string_hcenter_at("Press '#' to return", cx, y + 50);
    }

    fn render_game_over<D: Canvas>(&self, _canvas: &mut D) {}

    fn score(&self) -> u32 {
        0
    }

    fn high_score(&self) -> u32 {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::Xorshift32;

    #[test]
    fn test_only_hash_is_recognized() {
        let game = ComingSoon::new(GameKind::Brick);
        assert_eq!(game.command_for(Key::Hash), Some(Command::Quit));
        assert_eq!(game.command_for(Key::A), None);
        assert_eq!(game.command_for(Key::C), None);
        assert_eq!(game.command_for(Key::Digit(5)), None);
    }

    #[test]
    fn test_never_collides() {
        let mut game = ComingSoon::new(GameKind::Game2048);
        let mut rng = Xorshift32::new();
        for _ in 0..100 {
            assert_eq!(game.step(&mut rng), StepOutcome::Advanced);
        }
        assert_eq!(game.title(), "2048");
    }
}

//! Main menu and game dispatch.
//!
//! The dispatcher owns everything that outlives a single session: the PRNG,
//! the snake boundary policy and the per-game high scores. It runs exactly one
//! session at a time and redraws the menu when that session returns.

use super::{ComingSoon, FlappyGame, GameKind, HighScores, SnakeGame};
use crate::core::constants::MENU_POLL_MS;
use crate::core::rng::Xorshift32;
use crate::core::session::{run_session, ArcadeGame};
use crate::games::snake::Boundary;
use crate::hardware::{Board, Canvas, Clock, Color, Font, Keypad, Tone};
use rand::RngCore;
use std::fmt::Write;
use tracing::info;

/// Vertical distance between menu lines.
const LINE_SPACING: i32 = 20;

/// Draw the menu: one "Press 'X' to Start name" line per game, centred, from
/// a third of the way down the screen.
pub fn draw_menu<D: Canvas>(canvas: &mut D, games: &[GameKind]) {
    let cx = canvas.width() / 2;
    let top = canvas.height() / 3;

    canvas.set_bg_color(Color::BLACK);
    canvas.clear();
    canvas.set_color(Color::WHITE);
    canvas.set_font(Font::Large);

    let mut line: heapless::String<40> = heapless::String::new();
    for (i, game) in games.iter().enumerate() {
        line.clear();
        let _ = write!(
            line,
            "Press '{}' to Start {}",
            game.select_key().as_char(),
            game.name()
        );
        canvas.draw_string_hcenter_at(&line, cx, top + LINE_SPACING * i as i32);
    }
    canvas.present();
}

#[derive(Debug)]
pub struct Dispatcher<R = Xorshift32> {
    rng: R,
    boundary: Boundary,
    high_scores: HighScores,
}

impl<R: RngCore> Dispatcher<R> {
    pub fn new(rng: R, boundary: Boundary) -> Self {
        Self {
            rng,
            boundary,
            high_scores: HighScores::default(),
        }
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Run one game's session to completion and keep its high score.
    pub fn launch<K, D, T, C>(&mut self, kind: GameKind, board: &mut Board<K, D, T, C>)
    where
        K: Keypad,
        D: Canvas,
        T: Tone,
        C: Clock,
    {
        info!(game = kind.name(), "launching");
        let (w, h) = (board.display.width(), board.display.height());
        let best = self.high_scores.get(kind);

        let high_score = match kind {
            GameKind::Snake => {
                let mut game = SnakeGame::new(w, h, self.boundary, &mut self.rng);
                game.high_score = best;
                run_session(game, board, &mut self.rng).high_score()
            }
            GameKind::Flappy => {
                let mut game = FlappyGame::new(w, h, &mut self.rng);
                game.high_score = best;
                run_session(game, board, &mut self.rng).high_score()
            }
            GameKind::Brick | GameKind::Game2048 => {
                run_session(ComingSoon::new(kind), board, &mut self.rng).high_score()
            }
        };

        if self.high_scores.record(kind, high_score) {
            info!(game = kind.name(), high_score, "new high score");
        }
    }

    /// One menu iteration: launch a game if its key is down, then wait.
    /// Returns false once the keypad has detached.
    pub fn poll<K, D, T, C>(&mut self, board: &mut Board<K, D, T, C>) -> bool
    where
        K: Keypad,
        D: Canvas,
        T: Tone,
        C: Clock,
    {
        if !board.keypad.is_attached() {
            return false;
        }
        if let Some(kind) = board.keypad.poll().and_then(GameKind::from_key) {
            self.launch(kind, board);
            draw_menu(&mut board.display, &GameKind::ALL);
        }
        board.clock.sleep_ms(MENU_POLL_MS);
        true
    }

    /// Show the menu and dispatch until the keypad detaches. On the device
    /// this never returns.
    pub fn run<K, D, T, C>(&mut self, board: &mut Board<K, D, T, C>)
    where
        K: Keypad,
        D: Canvas,
        T: Tone,
        C: Clock,
    {
        draw_menu(&mut board.display, &GameKind::ALL);
        while self.poll(board) {}
        info!("keypad detached, leaving menu");
    }
}

impl Default for Dispatcher<Xorshift32> {
    fn default() -> Self {
        Self::new(Xorshift32::new(), Boundary::default())
    }
}

//! Flappy bird data structures.
//!
//! Everything is in integer screen pixels. The bird stays in a fixed column;
//! a pool of three pipes scrolls past it and is recycled in place.

use rand::RngCore;

// Physics (per frame)
pub const GRAVITY: i32 = 1;
pub const JUMP_VELOCITY: i32 = -6;
pub const PIPE_SPEED: i32 = 3;
/// Terminal velocity.
pub const MAX_FALL_SPEED: i32 = 8;

// Dimensions
pub const BIRD_SIZE: i32 = 10;
/// Fixed x of the bird's left edge.
pub const BIRD_X: i32 = 40;
pub const PIPE_WIDTH: i32 = 25;
/// Height of the opening in each pipe.
pub const PIPE_GAP: i32 = 45;
/// Horizontal distance between consecutive pipes.
pub const PIPE_SPACING: i32 = 120;
pub const NUM_PIPES: usize = 3;
pub const GROUND_HEIGHT: i32 = 10;
/// Gaps keep at least this far from the top of the screen and the ground.
pub const GAP_MARGIN: i32 = 20;

/// Frame delay while playing.
pub const FRAME_MS: u32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bird {
    /// Top edge in pixels.
    pub y: i32,
    /// Pixels per frame, positive is down.
    pub velocity: i32,
}

/// One pipe pair: solid above `gap_y`, solid below `gap_y + PIPE_GAP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pipe {
    /// Left edge in pixels. Goes negative as it scrolls off.
    pub x: i32,
    /// Top of the gap.
    pub gap_y: i32,
    pub active: bool,
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct FlappyGame {
    pub screen_width: i32,
    pub screen_height: i32,

    pub bird: Bird,
    pub pipes: [Pipe; NUM_PIPES],

    /// Pipes passed this run.
    pub score: u32,
    /// Best score since power-on. Survives restarts.
    pub high_score: u32,
    pub game_over: bool,
    pub tick_count: u64,
}

impl FlappyGame {
    pub fn new<R: RngCore>(screen_width: i32, screen_height: i32, rng: &mut R) -> Self {
        let mut game = Self {
            screen_width,
            screen_height,
            bird: Bird::default(),
            pipes: [Pipe::default(); NUM_PIPES],
            score: 0,
            high_score: 0,
            game_over: false,
            tick_count: 0,
        };
        game.reset(rng);
        game
    }

    /// Bird back to mid-screen at rest, pipes lined up off the right edge with
    /// fresh gaps, score cleared. The high score is kept.
    pub fn reset<R: RngCore>(&mut self, rng: &mut R) {
        self.score = 0;
        self.game_over = false;
        self.tick_count = 0;
        self.bird = Bird {
            y: self.screen_height / 2,
            velocity: 0,
        };
        for i in 0..NUM_PIPES {
            let x = self.screen_width + i as i32 * PIPE_SPACING;
            self.pipes[i] = spawn_pipe(x, self.screen_height, rng);
        }
    }

    /// Y of the ground's top edge.
    pub fn ground_y(&self) -> i32 {
        self.screen_height - GROUND_HEIGHT
    }

    /// Right-most pipe x, never less than 0.
    pub fn rightmost_pipe_x(&self) -> i32 {
        self.pipes.iter().map(|p| p.x).fold(0, i32::max)
    }
}

/// Valid gap tops are `[GAP_MARGIN, GAP_MARGIN + span)`. Returns the span, 0
/// when the screen is too short for any freedom.
pub fn gap_span(screen_height: i32) -> i32 {
    let max_gap_y = screen_height - GROUND_HEIGHT - PIPE_GAP - GAP_MARGIN;
    (max_gap_y - GAP_MARGIN).max(0)
}

/// A fresh pipe at `x` with a random gap.
pub fn spawn_pipe<R: RngCore>(x: i32, screen_height: i32, rng: &mut R) -> Pipe {
    let span = gap_span(screen_height);
    let offset = if span > 0 {
        (rng.next_u32() % span as u32) as i32
    } else {
        0
    };
    Pipe {
        x,
        gap_y: GAP_MARGIN + offset,
        active: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::Xorshift32;

    #[test]
    fn test_new_game_defaults() {
        let mut rng = Xorshift32::new();
        let game = FlappyGame::new(320, 240, &mut rng);
        assert_eq!(game.bird, Bird { y: 120, velocity: 0 });
        assert_eq!(game.score, 0);
        assert!(!game.game_over);
        assert_eq!(game.ground_y(), 230);
    }

    #[test]
    fn test_pipes_start_off_screen() {
        let mut rng = Xorshift32::new();
        let game = FlappyGame::new(320, 240, &mut rng);
        let xs: Vec<i32> = game.pipes.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![320, 440, 560]);
        assert!(game.pipes.iter().all(|p| p.active));
        assert_eq!(game.rightmost_pipe_x(), 560);
    }

    #[test]
    fn test_gap_span() {
        // 240 - 10 - 45 - 20 - 20
        assert_eq!(gap_span(240), 145);
        assert_eq!(gap_span(95), 0);
        assert_eq!(gap_span(50), 0);
    }

    #[test]
    fn test_spawn_pipe_gap_in_range() {
        let mut rng = Xorshift32::new();
        for _ in 0..500 {
            let pipe = spawn_pipe(0, 240, &mut rng);
            assert!(pipe.gap_y >= GAP_MARGIN);
            assert!(pipe.gap_y < GAP_MARGIN + 145);
            // Gap bottom stays clear of the ground margin.
            assert!(pipe.gap_y + PIPE_GAP <= 240 - GROUND_HEIGHT - GAP_MARGIN);
        }
    }

    #[test]
    fn test_spawn_pipe_degenerate_screen_clamps() {
        let mut rng = Xorshift32::new();
        let pipe = spawn_pipe(10, 60, &mut rng);
        assert_eq!(pipe.gap_y, GAP_MARGIN);
    }

    #[test]
    fn test_rightmost_never_negative() {
        let mut rng = Xorshift32::new();
        let mut game = FlappyGame::new(320, 240, &mut rng);
        for p in game.pipes.iter_mut() {
            p.x = -30;
        }
        assert_eq!(game.rightmost_pipe_x(), 0);
    }

    #[test]
    fn test_reset_keeps_high_score() {
        let mut rng = Xorshift32::new();
        let mut game = FlappyGame::new(320, 240, &mut rng);
        game.score = 4;
        game.high_score = 6;
        game.bird = Bird { y: 3, velocity: 8 };
        game.game_over = true;
        game.reset(&mut rng);
        assert_eq!(game.score, 0);
        assert_eq!(game.high_score, 6);
        assert_eq!(game.bird, Bird { y: 120, velocity: 0 });
        assert!(!game.game_over);
    }
}

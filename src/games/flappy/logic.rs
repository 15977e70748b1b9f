//! Flappy physics: gravity, pipe scrolling and recycling, box collision.

use super::render;
use super::types::*;
use crate::core::constants::FLAPPY_DEBOUNCE_MS;
use crate::core::input::Command;
use crate::core::session::{ArcadeGame, StepOutcome};
use crate::hardware::{Canvas, Key};
use rand::RngCore;
use tracing::debug;

/// Result of one physics tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    Flew,
    /// At least one pipe was passed and recycled.
    Scored,
    Crashed,
}

/// Set the bird's velocity to the jump impulse. Gravity still applies on the
/// tick that follows.
pub fn process_jump(game: &mut FlappyGame) {
    if !game.game_over {
        game.bird.velocity = JUMP_VELOCITY;
    }
}

/// Advance physics by one frame.
pub fn process_tick<R: RngCore>(game: &mut FlappyGame, rng: &mut R) -> TickResult {
    if game.game_over {
        return TickResult::Crashed;
    }
    game.tick_count += 1;

    game.bird.velocity = (game.bird.velocity + GRAVITY).min(MAX_FALL_SPEED);
    game.bird.y += game.bird.velocity;

    // Pipes after `i` have not moved yet when pipe `i` is recycled.
    let mut passed = 0;
    for i in 0..NUM_PIPES {
        game.pipes[i].x -= PIPE_SPEED;
        if game.pipes[i].x + PIPE_WIDTH < 0 {
            let x = game.rightmost_pipe_x() + PIPE_SPACING;
            game.pipes[i] = spawn_pipe(x, game.screen_height, rng);
            passed += 1;
            debug!(pipe = i, x, gap_y = game.pipes[i].gap_y, "pipe recycled");
        }
    }
    game.score += passed;

    if check_collision(game.bird.y, &game.pipes, game.screen_height) {
        game.game_over = true;
        if game.score > game.high_score {
            game.high_score = game.score;
        }
        return TickResult::Crashed;
    }

    if passed > 0 {
        TickResult::Scored
    } else {
        TickResult::Flew
    }
}

/// True when a bird with its top edge at `bird_y` hits the ceiling, the
/// ground or a solid pipe segment.
pub fn check_collision(bird_y: i32, pipes: &[Pipe], screen_height: i32) -> bool {
    if bird_y < 0 {
        return true;
    }
    if bird_y + BIRD_SIZE >= screen_height - GROUND_HEIGHT {
        return true;
    }

    let (bx, bw, bh) = (BIRD_X, BIRD_SIZE, BIRD_SIZE);
    pipes.iter().filter(|p| p.active).any(|pipe| {
        let overlaps = bx + bw > pipe.x && bx < pipe.x + PIPE_WIDTH;
        overlaps && (bird_y < pipe.gap_y || bird_y + bh > pipe.gap_y + PIPE_GAP)
    })
}

impl ArcadeGame for FlappyGame {
    fn title(&self) -> &'static str {
        "Flappy"
    }

    fn debounce_ms(&self) -> u32 {
        FLAPPY_DEBOUNCE_MS
    }

    fn command_for(&self, key: Key) -> Option<Command> {
        match key {
            Key::Digit(5) => Some(Command::Jump),
            Key::C => Some(Command::Restart),
            Key::Hash => Some(Command::Quit),
            _ => None,
        }
    }

    fn apply(&mut self, command: Command) {
        if command == Command::Jump {
            process_jump(self);
        }
    }

    fn step<R: RngCore>(&mut self, rng: &mut R) -> StepOutcome {
        match process_tick(self, rng) {
            TickResult::Flew | TickResult::Scored => StepOutcome::Advanced,
            TickResult::Crashed => StepOutcome::Collided,
        }
    }

    fn restart<R: RngCore>(&mut self, rng: &mut R) {
        self.reset(rng);
    }

    fn frame_delay_ms(&self) -> u32 {
        FRAME_MS
    }

    fn render<D: Canvas>(&self, canvas: &mut D) {
        render::render_scene(self, canvas);
    }

    fn render_game_over<D: Canvas>(&self, canvas: &mut D) {
        render::render_game_over(self, canvas);
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn high_score(&self) -> u32 {
        self.high_score
    }
}

//! Snake game logic: movement, input processing, collision detection.

use super::render;
use super::types::*;
use crate::core::constants::SNAKE_DEBOUNCE_MS;
use crate::core::input::{direction_for, Command, Direction};
use crate::core::session::{ArcadeGame, StepOutcome};
use crate::hardware::sound::SoundEffect;
use crate::hardware::{Canvas, Key};
use rand::RngCore;
use tracing::debug;

/// Result of a single movement step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    Moved,
    Ate,
    Collided,
}

/// Turn the snake. Reversing onto the neck is ignored.
pub fn process_input(game: &mut SnakeGame, direction: Direction) {
    if game.game_over {
        return;
    }
    if direction != game.direction.opposite() {
        game.direction = direction;
    }
}

/// Single movement step.
pub fn step_snake<R: RngCore>(game: &mut SnakeGame, rng: &mut R) -> MoveResult {
    if game.game_over {
        return MoveResult::Collided;
    }
    let Some(head) = game.head() else {
        return end_run(game);
    };
    game.tick_count += 1;

    let (dx, dy) = game.direction.delta();
    let mut next = Position {
        x: head.x + dx,
        y: head.y + dy,
    };

    match game.boundary {
        Boundary::Wrap => {
            next.x = next.x.rem_euclid(game.grid_width);
            next.y = next.y.rem_euclid(game.grid_height);
        }
        Boundary::Walls => {
            if !game.in_bounds(next) {
                return end_run(game);
            }
        }
    }

    // The whole body counts, tail included: the tail has not moved yet.
    if game.snake.contains(&next) {
        return end_run(game);
    }

    let tail = game.snake.last().copied();
    game.snake.rotate_right(1);
    if let Some(first) = game.snake.first_mut() {
        *first = next;
    }

    if next != game.food {
        return MoveResult::Moved;
    }

    if game.snake.len() < game.capacity {
        if let Some(tail) = tail {
            // capacity never exceeds MAX_LEN
            let _ = game.snake.push(tail);
        }
    }
    game.score += 1;
    if game.speed_ms > MIN_SPEED_MS {
        game.speed_ms = game.speed_ms.saturating_sub(SPEED_STEP_MS).max(MIN_SPEED_MS);
    }
    game.food = spawn_food(game, rng);
    debug!(
        score = game.score,
        len = game.snake.len(),
        speed_ms = game.speed_ms,
        "fruit eaten"
    );
    MoveResult::Ate
}

fn end_run(game: &mut SnakeGame) -> MoveResult {
    game.game_over = true;
    if game.score > game.high_score {
        game.high_score = game.score;
    }
    MoveResult::Collided
}

impl ArcadeGame for SnakeGame {
    fn title(&self) -> &'static str {
        "Snake"
    }

    fn debounce_ms(&self) -> u32 {
        SNAKE_DEBOUNCE_MS
    }

    fn command_for(&self, key: Key) -> Option<Command> {
        match key {
            Key::A => Some(Command::Restart),
            Key::Hash => Some(Command::Quit),
            _ => direction_for(key).map(Command::Move),
        }
    }

    fn apply(&mut self, command: Command) {
        if let Command::Move(direction) = command {
            process_input(self, direction);
        }
    }

    fn step<R: RngCore>(&mut self, rng: &mut R) -> StepOutcome {
        match step_snake(self, rng) {
            MoveResult::Moved => StepOutcome::Advanced,
            MoveResult::Ate => StepOutcome::Effect(SoundEffect::Eat),
            MoveResult::Collided => StepOutcome::Collided,
        }
    }

    fn restart<R: RngCore>(&mut self, rng: &mut R) {
        self.reset(rng);
    }

    fn frame_delay_ms(&self) -> u32 {
        self.speed_ms
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

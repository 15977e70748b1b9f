//! Snake game data structures.
//!
//! The snake lives on a grid of 12 px cells. Its body is a fixed-capacity
//! arena so a session never allocates, however long it runs.

use crate::core::input::Direction;
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Cell edge in pixels.
pub const CELL_SIZE: i32 = 12;
/// Hard cap on body length.
pub const MAX_LEN: usize = 128;
/// Grids are never smaller than this in either dimension.
pub const MIN_GRID: i16 = 10;

/// Frame delay at the start of a run.
pub const INITIAL_SPEED_MS: u32 = 160;
/// Frame delay removed per fruit.
pub const SPEED_STEP_MS: u32 = 5;
/// Fastest frame delay.
pub const MIN_SPEED_MS: u32 = 60;

/// What happens when the head leaves the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Boundary {
    /// Leaving the grid is fatal.
    #[default]
    Walls,
    /// The grid is a torus; the head re-enters on the opposite edge.
    Wrap,
}

/// A position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

/// Body storage. Head at index 0.
pub type Body = heapless::Vec<Position, MAX_LEN>;

/// Main game state.
#[derive(Debug, Clone)]
pub struct SnakeGame {
    pub boundary: Boundary,

    // Grid dimensions (cells)
    pub grid_width: i16,
    pub grid_height: i16,

    // Snake state
    pub snake: Body,
    /// Longest the snake may grow on this grid. Always leaves one free cell so
    /// food placement terminates.
    pub capacity: usize,
    pub direction: Direction,

    pub food: Position,

    // Scoring
    pub score: u32,
    /// Best score since power-on. Survives restarts.
    pub high_score: u32,

    /// Current frame delay in milliseconds.
    pub speed_ms: u32,
    pub game_over: bool,
    /// Movement steps since the last restart.
    pub tick_count: u64,
}

/// Grid dimensions for a screen in pixels.
pub fn grid_size(pixel_width: i32, pixel_height: i32) -> (i16, i16) {
    let cells = |px: i32| -> i16 {
        let n = (px / CELL_SIZE).clamp(0, i32::from(i16::MAX));
        (n as i16).max(MIN_GRID)
    };
    (cells(pixel_width), cells(pixel_height))
}

impl SnakeGame {
    /// New game sized to a screen in pixels.
    pub fn new<R: RngCore>(
        pixel_width: i32,
        pixel_height: i32,
        boundary: Boundary,
        rng: &mut R,
    ) -> Self {
        let (w, h) = grid_size(pixel_width, pixel_height);
        Self::with_grid(w, h, boundary, rng)
    }

    /// New game on an explicit grid. Dimensions below [`MIN_GRID`] are raised.
    pub fn with_grid<R: RngCore>(
        grid_width: i16,
        grid_height: i16,
        boundary: Boundary,
        rng: &mut R,
    ) -> Self {
        let grid_width = grid_width.max(MIN_GRID);
        let grid_height = grid_height.max(MIN_GRID);
        let cells =
            usize::from(grid_width.unsigned_abs()) * usize::from(grid_height.unsigned_abs());

        let mut game = Self {
            boundary,
            grid_width,
            grid_height,
            snake: Body::new(),
            capacity: MAX_LEN.min(cells - 1),
            direction: Direction::Right,
            food: Position::default(),
            score: 0,
            high_score: 0,
            speed_ms: INITIAL_SPEED_MS,
            game_over: false,
            tick_count: 0,
        };
        game.reset(rng);
        game
    }

    /// Reinitialize everything except the high score: a two-cell snake centred
    /// on the grid heading right, fresh food, starting speed.
    pub fn reset<R: RngCore>(&mut self, rng: &mut R) {
        let cx = self.grid_width / 2;
        let cy = self.grid_height / 2;

        self.snake.clear();
        for i in 0..2 {
            // The grid is at least 10 wide, so both cells fit and the arena
            // has room.
            let _ = self.snake.push(Position { x: cx - i, y: cy });
        }

        self.direction = Direction::Right;
        self.score = 0;
        self.speed_ms = INITIAL_SPEED_MS;
        self.game_over = false;
        self.tick_count = 0;
        self.food = spawn_food(self, rng);
    }

    pub fn head(&self) -> Option<Position> {
        self.snake.first().copied()
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.grid_width && pos.y >= 0 && pos.y < self.grid_height
    }
}

/// Pick a random cell not covered by the snake. Draws x then y and resamples
/// on overlap.
pub fn spawn_food<R: RngCore>(game: &SnakeGame, rng: &mut R) -> Position {
    let w = game.grid_width.unsigned_abs() as u32;
    let h = game.grid_height.unsigned_abs() as u32;
    loop {
        let x = (rng.next_u32() % w) as i16;
        let y = (rng.next_u32() % h) as i16;
        let pos = Position { x, y };
        if !game.snake.contains(&pos) {
            return pos;
        }
    }
}

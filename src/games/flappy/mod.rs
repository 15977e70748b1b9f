//! Side-scrolling flappy bird with a recycled pipe pool.

pub mod logic;
pub mod render;
pub mod types;

pub use logic::{check_collision, process_jump, process_tick, TickResult};
pub use types::{Bird, FlappyGame, Pipe};

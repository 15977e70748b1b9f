//! Grid snake: eat fruit, grow, don't run into yourself.

pub mod logic;
pub mod render;
pub mod types;

pub use logic::{process_input, step_snake, MoveResult};
pub use types::{Boundary, Position, SnakeGame};

//! Snake drawing on the board display.

use super::types::{Position, SnakeGame, CELL_SIZE};
use crate::hardware::{Canvas, Color, Font};
use std::fmt::Write;

const HUD_X: i32 = 4;
const HUD_Y: i32 = 4;

fn fill_cell<D: Canvas>(canvas: &mut D, pos: Position) {
    let x = i32::from(pos.x) * CELL_SIZE;
    let y = i32::from(pos.y) * CELL_SIZE;
    canvas.fill_rect(x, y, x + CELL_SIZE - 1, y + CELL_SIZE - 1);
}

/// Full redraw: black field, red fruit, green body, length in the corner.
pub fn render_scene<D: Canvas>(game: &SnakeGame, canvas: &mut D) {
    canvas.set_bg_color(Color::BLACK);
    canvas.clear();

    canvas.set_color(Color::RED);
    fill_cell(canvas, game.food);

    canvas.set_color(Color::GREEN);
    for &cell in game.snake.iter() {
        fill_cell(canvas, cell);
    }

    let mut hud: heapless::String<32> = heapless::String::new();
    let _ = write!(hud, "LEN: {}  SCORE: {}", game.snake.len(), game.score);
    canvas.set_color(Color::WHITE);
    canvas.set_font(Font::Small);
    canvas.draw_string_at(&hud, HUD_X, HUD_Y);
}

/// Game-over text over the frozen field.
pub fn render_game_over<D: Canvas>(game: &SnakeGame, canvas: &mut D) {
    let cx = canvas.width() / 2;
    let cy = canvas.height() / 2;

    canvas.set_color(Color::RED);
    canvas.set_font(Font::Large);
    canvas.draw_string_hcenter_at("GAME OVER", cx, cy - 30);

    canvas.set_color(Color::WHITE);
    canvas.set_font(Font::Small);
    let mut line: heapless::String<32> = heapless::String::new();
    let _ = write!(line, "Score: {}", game.score);
    canvas.draw_string_hcenter_at(&line, cx, cy);

    line.clear();
    let _ = write!(line, "High: {}", game.high_score);
    canvas.draw_string_hcenter_at(&line, cx, cy + 16);

    canvas.draw_string_hcenter_at("Press 'A' to Restart", cx, cy + 36);
}

//! Flappy drawing on the board display.

use super::types::*;
use crate::hardware::{Canvas, Color, Font};
use std::fmt::Write;

const OVERLAY_WIDTH: i32 = 120;
const OVERLAY_HEIGHT: i32 = 80;

/// Full redraw: sky, outlined pipes, ground, bird, score.
pub fn render_scene<D: Canvas>(game: &FlappyGame, canvas: &mut D) {
    let w = game.screen_width;
    let ground_y = game.ground_y();

    canvas.set_bg_color(Color::SKY);
    canvas.clear();

    for pipe in game.pipes.iter().filter(|p| p.active) {
        let x0 = pipe.x;
        let x1 = pipe.x + PIPE_WIDTH;
        let bottom_y = pipe.gap_y + PIPE_GAP;

        canvas.set_color(Color::GREEN);
        canvas.fill_rect(x0, 0, x1, pipe.gap_y);
        canvas.fill_rect(x0, bottom_y, x1, ground_y);

        canvas.set_color(Color::BLACK);
        canvas.draw_rect(x0, 0, x1, pipe.gap_y);
        canvas.draw_rect(x0, bottom_y, x1, ground_y);
    }

    canvas.set_color(Color::BROWN);
    canvas.fill_rect(0, ground_y, w, game.screen_height);

    let y = game.bird.y;
    canvas.set_color(Color::YELLOW);
    canvas.fill_rect(BIRD_X, y, BIRD_X + BIRD_SIZE, y + BIRD_SIZE);
    // eye
    canvas.set_color(Color::BLACK);
    canvas.draw_pixel(BIRD_X + BIRD_SIZE - 2, y + 2);

    let mut score: heapless::String<12> = heapless::String::new();
    let _ = write!(score, "{}", game.score);
    canvas.set_font(Font::Large);
    canvas.draw_string_hcenter_at(&score, w / 2, 10);
}

/// White box centred on screen with the result and the restart hint.
pub fn render_game_over<D: Canvas>(game: &FlappyGame, canvas: &mut D) {
    let cx = game.screen_width / 2;
    let x0 = (game.screen_width - OVERLAY_WIDTH) / 2;
    let y0 = (game.screen_height - OVERLAY_HEIGHT) / 2;

    canvas.set_color(Color::WHITE);
    canvas.fill_rect(x0, y0, x0 + OVERLAY_WIDTH, y0 + OVERLAY_HEIGHT);
    canvas.set_color(Color::BLACK);
    canvas.draw_rect(x0, y0, x0 + OVERLAY_WIDTH, y0 + OVERLAY_HEIGHT);

    canvas.set_bg_color(Color::WHITE);
    canvas.set_color(Color::RED);
    canvas.set_font(Font::Large);
    canvas.draw_string_hcenter_at("GAME OVER", cx, y0 + 10);

    canvas.set_color(Color::BLACK);
    canvas.set_font(Font::Small);
    let mut line: heapless::String<24> = heapless::String::new();
    let _ = write!(line, "Score: {}", game.score);
    canvas.draw_string_hcenter_at(&line, cx, y0 + 35);

    line.clear();
    let _ = write!(line, "High: {}", game.high_score);
    canvas.draw_string_hcenter_at(&line, cx, y0 + 50);

    canvas.draw_string_hcenter_at("Press 'C' to Restart", cx, y0 + 65);
}

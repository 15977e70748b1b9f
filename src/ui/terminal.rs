//! Terminal presenter for the emulated panel.
//!
//! Uses half-block pixel rendering: pairs of vertical pixels are packed into
//! one terminal row using the `▀` (upper half block) character with fg=top,
//! bg=bottom colors. The panel is downsampled by `pixel_scale` in both axes.

use super::framebuffer::{Framebuffer, TextLabel};
use crate::hardware::{self, Canvas, Font};
use ratatui::{
    backend::Backend,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame, Terminal,
};
use tracing::warn;

const HALF_TOP: char = '\u{2580}'; // ▀: fg fills the top half, bg the bottom half

fn to_tui(color: hardware::Color) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Terminal size needed to show a `width` x `height` panel at `scale`.
pub fn required_size(width: u16, height: u16, scale: u16) -> (u16, u16) {
    let scale = scale.max(1);
    (width.div_ceil(scale), height.div_ceil(scale * 2))
}

/// Draw the framebuffer into `area`, top-left aligned and clipped.
pub fn render_framebuffer(frame: &mut Frame, area: Rect, fb: &Framebuffer, scale: u16) {
    frame.render_widget(Clear, area);
    let scale = i32::from(scale.max(1));
    let (cols, rows) = required_size(fb.width() as u16, fb.height() as u16, scale as u16);
    let cols = cols.min(area.width);
    let rows = rows.min(area.height);

    for row in 0..rows {
        let top_y = i32::from(row) * scale * 2;
        let bot_y = top_y + scale;

        let mut spans: Vec<Span> = Vec::new();
        let mut cur_fg = Color::Reset;
        let mut cur_bg = Color::Reset;
        let mut cur_text = String::new();

        for col in 0..cols {
            let x = i32::from(col) * scale;
            let fg = fb.pixel(x, top_y).map(to_tui).unwrap_or(Color::Black);
            let bg = fb.pixel(x, bot_y).map(to_tui).unwrap_or(Color::Black);

            // Batch consecutive cells with the same style
            if fg != cur_fg || bg != cur_bg {
                if !cur_text.is_empty() {
                    spans.push(Span::styled(
                        std::mem::take(&mut cur_text),
                        Style::default().fg(cur_fg).bg(cur_bg),
                    ));
                }
                cur_fg = fg;
                cur_bg = bg;
            }
            cur_text.push(HALF_TOP);
        }
        if !cur_text.is_empty() {
            spans.push(Span::styled(
                cur_text,
                Style::default().fg(cur_fg).bg(cur_bg),
            ));
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(area.x, area.y + row, cols, 1),
        );
    }

    for label in fb.labels() {
        render_label(frame, area, label, scale, cols, rows);
    }
}

fn render_label(
    frame: &mut Frame,
    area: Rect,
    label: &TextLabel,
    scale: i32,
    cols: u16,
    rows: u16,
) {
    let len = label.text.chars().count() as i32;
    let col = if label.centered {
        label.x / scale - len / 2
    } else {
        label.x / scale
    };
    let row = label.y / (scale * 2);
    if row < 0 || row >= i32::from(rows) {
        return;
    }
    let col = col.clamp(0, i32::from(cols)) as u16;
    let width = (len as u16).min(cols.saturating_sub(col));
    if width == 0 {
        return;
    }

    let mut style = Style::default().fg(to_tui(label.color)).bg(to_tui(label.bg));
    if label.font == Font::Large {
        style = style.add_modifier(Modifier::BOLD);
    }
    frame.render_widget(
        Paragraph::new(Span::styled(label.text.as_str(), style)),
        Rect::new(area.x + col, area.y + row as u16, width, 1),
    );
}

/// Run `body`, then `restore` whether or not `body` failed. When both fail
/// the error from `body` is returned.
pub fn with_restore<T, E>(
    body: impl FnOnce() -> Result<T, E>,
    restore: impl FnOnce() -> Result<(), E>,
) -> Result<T, E> {
    let result = body();
    let restored = restore();
    let value = result?;
    restored?;
    Ok(value)
}

/// A framebuffer that flushes to a ratatui terminal on `present`.
pub struct TerminalDisplay<B: Backend> {
    fb: Framebuffer,
    terminal: Terminal<B>,
    scale: u16,
}

impl<B: Backend> TerminalDisplay<B> {
    pub fn new(terminal: Terminal<B>, width: u16, height: u16, scale: u16) -> Self {
        Self {
            fb: Framebuffer::new(width, height),
            terminal,
            scale: scale.max(1),
        }
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.fb
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

impl<B: Backend> Canvas for TerminalDisplay<B> {
    fn width(&self) -> i32 {
        self.fb.width()
    }

    fn height(&self) -> i32 {
        self.fb.height()
    }

    fn set_color(&mut self, color: hardware::Color) {
        self.fb.set_color(color);
    }

    fn set_bg_color(&mut self, color: hardware::Color) {
        self.fb.set_bg_color(color);
    }

    fn set_font(&mut self, font: Font) {
        self.fb.set_font(font);
    }

    fn clear(&mut self) {
        self.fb.clear();
    }

    fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        self.fb.fill_rect(x0, y0, x1, y1);
    }

    fn draw_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        self.fb.draw_rect(x0, y0, x1, y1);
    }

    fn draw_pixel(&mut self, x: i32, y: i32) {
        self.fb.draw_pixel(x, y);
    }

    fn draw_string_at(&mut self, text: &str, x: i32, y: i32) {
        self.fb.draw_string_at(text, x, y);
    }

    fn draw_string_hcenter_at(&mut self, text: &str, x: i32, y: i32) {
        self.fb.draw_string_hcenter_at(text, x, y);
    }

    fn present(&mut self) {
        self.fb.present();
        let fb = &self.fb;
        let scale = self.scale;
        if let Err(e) = self
            .terminal
            .draw(|frame| {
                let area = frame.size();
                render_framebuffer(frame, area, fb, scale)
            })
        {
            warn!(error = %e, "terminal draw failed");
        }
    }
}

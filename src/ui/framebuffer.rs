//! In-memory RGB panel.
//!
//! Implements the drawing collaborator against a pixel buffer so the terminal
//! presenter (and tests) can read back exactly what a game drew. Text is kept
//! as labels rather than rasterized; the presenter lays it out in terminal
//! cells.

use crate::hardware::{Canvas, Color, Font};

/// A string drawn on the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLabel {
    pub text: String,
    pub x: i32,
    pub y: i32,
    /// `x` is the horizontal centre rather than the left edge.
    pub centered: bool,
    pub color: Color,
    pub bg: Color,
    pub font: Font,
}

#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: i32,
    height: i32,
    pixels: Vec<Color>,
    labels: Vec<TextLabel>,
    color: Color,
    bg: Color,
    font: Font,
    frames: u64,
}

impl Framebuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let (width, height) = (i32::from(width), i32::from(height));
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; (width * height) as usize],
            labels: Vec::new(),
            color: Color::WHITE,
            bg: Color::BLACK,
            font: Font::default(),
            frames: 0,
        }
    }

    /// Colour at `(x, y)`, `None` off the panel.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    pub fn labels(&self) -> &[TextLabel] {
        &self.labels
    }

    /// True if any label contains `needle`.
    pub fn shows_text(&self, needle: &str) -> bool {
        self.labels.iter().any(|l| l.text.contains(needle))
    }

    pub fn count_color(&self, color: Color) -> usize {
        self.pixels.iter().filter(|&&c| c == color).count()
    }

    /// Frames flushed with `present`.
    pub fn frames_presented(&self) -> u64 {
        self.frames
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) as usize)
    }

    fn push_label(&mut self, text: &str, x: i32, y: i32, centered: bool) {
        self.labels.push(TextLabel {
            text: text.to_string(),
            x,
            y,
            centered,
            color: self.color,
            bg: self.bg,
            font: self.font,
        });
    }
}

impl Canvas for Framebuffer {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn set_bg_color(&mut self, color: Color) {
        self.bg = color;
    }

    fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    fn clear(&mut self) {
        let bg = self.bg;
        self.pixels.fill(bg);
        self.labels.clear();
    }

    fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let (lx, hx) = (x0.min(x1).max(0), x0.max(x1).min(self.width - 1));
        let (ly, hy) = (y0.min(y1).max(0), y0.max(y1).min(self.height - 1));
        if lx > hx || ly > hy {
            return;
        }
        for y in ly..=hy {
            let row = (y * self.width) as usize;
            self.pixels[row + lx as usize..=row + hx as usize].fill(self.color);
        }
    }

    fn draw_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let (lx, hx) = (x0.min(x1), x0.max(x1));
        let (ly, hy) = (y0.min(y1), y0.max(y1));
        self.fill_rect(lx, ly, hx, ly);
        self.fill_rect(lx, hy, hx, hy);
        self.fill_rect(lx, ly, lx, hy);
        self.fill_rect(hx, ly, hx, hy);
    }

    fn draw_pixel(&mut self, x: i32, y: i32) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = self.color;
        }
    }

    fn draw_string_at(&mut self, text: &str, x: i32, y: i32) {
        self.push_label(text, x, y, false);
    }

    fn draw_string_hcenter_at(&mut self, text: &str, x: i32, y: i32) {
        self.push_label(text, x, y, true);
    }

    fn present(&mut self) {
        self.frames += 1;
    }
}

//! Boundary to the board: keypad, display, tone generator and clock.
//!
//! The engine only talks to hardware through these traits. Every call is
//! synchronous and expected to return promptly; `Clock::sleep_ms` is the only
//! place a session blocks.

pub mod display;
pub mod keypad;
pub mod sound;

pub use display::{Color, Font};
pub use keypad::{Key, KEY_MAP};

/// Polled matrix keypad.
pub trait Keypad {
    /// Non-blocking scan. `None` when nothing is pressed.
    fn poll(&mut self) -> Option<Key>;

    /// False once the input device is gone. A physical keypad never detaches;
    /// host frontends use this to shut the arcade down.
    fn is_attached(&self) -> bool {
        true
    }
}

/// Stateful 2-D drawing surface. Coordinates are integer pixels with the
/// origin at the top left; rectangle corners are inclusive.
pub trait Canvas {
    fn width(&self) -> i32;
    fn height(&self) -> i32;

    fn set_color(&mut self, color: Color);
    fn set_bg_color(&mut self, color: Color);
    fn set_font(&mut self, font: Font);

    /// Fill the whole surface with the background colour.
    fn clear(&mut self);
    fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32);
    fn draw_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32);
    fn draw_pixel(&mut self, x: i32, y: i32);
    /// Draw text with its top-left corner at `(x, y)`.
    fn draw_string_at(&mut self, text: &str, x: i32, y: i32);
    /// Draw text horizontally centred on `x`, top edge at `y`.
    fn draw_string_hcenter_at(&mut self, text: &str, x: i32, y: i32);

    /// Flush a completed frame. Panels that draw directly ignore this.
    fn present(&mut self) {}
}

/// Blocking tone generator.
pub trait Tone {
    /// Play a square wave. A frequency of 0 is a no-op.
    fn play(&mut self, frequency_hz: u32, duration_ms: u32);
}

/// Millisecond tick source.
pub trait Clock {
    /// Monotonic milliseconds since boot; wraps at `u32::MAX`.
    fn now_ms(&self) -> u32;
    /// Block the caller for `ms` milliseconds.
    fn sleep_ms(&mut self, ms: u32);
}

/// Every collaborator a session needs, bundled so games can borrow them
/// independently.
#[derive(Debug)]
pub struct Board<K, D, T, C> {
    pub keypad: K,
    pub display: D,
    pub tone: T,
    pub clock: C,
}

impl<K: Keypad, D: Canvas, T: Tone, C: Clock> Board<K, D, T, C> {
    pub fn new(keypad: K, display: D, tone: T, clock: C) -> Self {
        Self {
            keypad,
            display,
            tone,
            clock,
        }
    }
}

//! Host clock and tone generator.

use crate::hardware::{Clock, Tone};
use std::io::Write;
use std::thread;
use std::time::{Duration, Instant};

/// Milliseconds since construction, truncated to `u32` so it wraps like a
/// board tick counter.
#[derive(Debug, Clone)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u32 {
        self.start.elapsed().as_millis() as u32
    }

    fn sleep_ms(&mut self, ms: u32) {
        thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}

/// Rings the terminal bell for each tone and blocks for its duration. A
/// terminal cannot play a pitch, so the frequency only decides whether
/// anything sounds.
#[derive(Debug)]
pub struct TerminalTone<W: Write> {
    out: W,
    enabled: bool,
}

impl<W: Write> TerminalTone<W> {
    pub fn new(out: W, enabled: bool) -> Self {
        Self { out, enabled }
    }
}

impl<W: Write> Tone for TerminalTone<W> {
    fn play(&mut self, frequency_hz: u32, duration_ms: u32) {
        if frequency_hz == 0 {
            return;
        }
        if self.enabled {
            // Losing a beep is not worth stopping the game for.
            let _ = self.out.write_all(b"\x07").and_then(|_| self.out.flush());
        }
        thread::sleep(Duration::from_millis(u64::from(duration_ms)));
    }
}

//! Shared fakes for driving sessions and the dispatcher without a terminal.

#![allow(dead_code)]

use arcade::core::Xorshift32;
use arcade::games::flappy::{process_jump, process_tick, FlappyGame, TickResult};
use arcade::hardware::{Board, Canvas, Clock, Color, Font, Key, Keypad, Tone};
use arcade::ui::Framebuffer;
use std::collections::{HashSet, VecDeque};

pub const SCREEN_W: u16 = 320;
pub const SCREEN_H: u16 = 240;

/// Plays back a fixed sequence of scans, one per poll. Detaches once the
/// script runs out.
#[derive(Debug, Default)]
pub struct ScriptedKeypad {
    script: VecDeque<Option<Key>>,
}

impl ScriptedKeypad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(mut self, key: Key) -> Self {
        self.script.push_back(Some(key));
        self
    }

    pub fn idle(mut self, frames: usize) -> Self {
        self.script.extend(std::iter::repeat(None).take(frames));
        self
    }

    pub fn then(mut self, scans: impl IntoIterator<Item = Option<Key>>) -> Self {
        self.script.extend(scans);
        self
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Keypad for ScriptedKeypad {
    fn poll(&mut self) -> Option<Key> {
        self.script.pop_front().flatten()
    }

    fn is_attached(&self) -> bool {
        !self.script.is_empty()
    }
}

/// A clock that only moves when slept on.
#[derive(Debug, Default)]
pub struct ManualClock {
    pub now: u32,
    pub sleeps: Vec<u32>,
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u32 {
        self.now
    }

    fn sleep_ms(&mut self, ms: u32) {
        self.now = self.now.wrapping_add(ms);
        self.sleeps.push(ms);
    }
}

#[derive(Debug, Default)]
pub struct RecordingTone {
    pub notes: Vec<(u32, u32)>,
}

impl Tone for RecordingTone {
    fn play(&mut self, frequency_hz: u32, duration_ms: u32) {
        self.notes.push((frequency_hz, duration_ms));
    }
}

/// Framebuffer that also remembers every string ever drawn.
#[derive(Debug)]
pub struct RecordingCanvas {
    pub fb: Framebuffer,
    pub history: Vec<String>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self {
            fb: Framebuffer::new(SCREEN_W, SCREEN_H),
            history: Vec::new(),
        }
    }

    pub fn ever_showed(&self, needle: &str) -> bool {
        self.history.iter().any(|s| s.contains(needle))
    }
}

impl Canvas for RecordingCanvas {
    fn width(&self) -> i32 {
        self.fb.width()
    }
    fn height(&self) -> i32 {
        self.fb.height()
    }
    fn set_color(&mut self, color: Color) {
        self.fb.set_color(color);
    }
    fn set_bg_color(&mut self, color: Color) {
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
        self.history.push(text.to_string());
        self.fb.draw_string_at(text, x, y);
    }
    fn draw_string_hcenter_at(&mut self, text: &str, x: i32, y: i32) {
        self.history.push(text.to_string());
        self.fb.draw_string_hcenter_at(text, x, y);
    }
    fn present(&mut self) {
        self.fb.present();
    }
}

pub type TestBoard = Board<ScriptedKeypad, RecordingCanvas, RecordingTone, ManualClock>;

pub fn board(keypad: ScriptedKeypad) -> TestBoard {
    Board::new(
        keypad,
        RecordingCanvas::new(),
        RecordingTone::default(),
        ManualClock::default(),
    )
}

/// Find a jump schedule (one entry per frame, true = press 5) that keeps the
/// bird alive until it has passed `target` pipes.
///
/// Pipe gaps depend only on the tick, so (tick, y, velocity) identifies a
/// state and dead ends can be remembered.
pub fn plan_flappy_run(game: &FlappyGame, rng: &Xorshift32, target: u32) -> Option<Vec<bool>> {
    fn search(
        game: &FlappyGame,
        rng: &Xorshift32,
        target: u32,
        plan: &mut Vec<bool>,
        dead: &mut HashSet<(u64, i32, i32)>,
    ) -> bool {
        if game.score >= target {
            return true;
        }
        let key = (game.tick_count, game.bird.y, game.bird.velocity);
        if dead.contains(&key) {
            return false;
        }
        for jump in [false, true] {
            let mut next = game.clone();
            let mut next_rng = rng.clone();
            if jump {
                process_jump(&mut next);
            }
            if process_tick(&mut next, &mut next_rng) == TickResult::Crashed {
                continue;
            }
            plan.push(jump);
            if search(&next, &next_rng, target, plan, dead) {
                return true;
            }
            plan.pop();
        }
        dead.insert(key);
        false
    }

    let mut plan = Vec::new();
    let mut dead = HashSet::new();
    search(game, rng, target, &mut plan, &mut dead).then_some(plan)
}

/// Turn a jump plan into keypad scans.
pub fn jump_scans(plan: &[bool]) -> Vec<Option<Key>> {
    plan.iter()
        .map(|&jump| jump.then_some(Key::Digit(5)))
        .collect()
}

//! The per-game session engine.
//!
//! A session owns one game's world and drives it through a two-state machine:
//! `Playing` advances the world once per frame, `GameOver` freezes it and
//! waits for a restart or quit. Each loop iteration is
//! poll → command → step → render → sleep, and the sleep is the only point
//! where the session yields.

use super::constants::{GAME_OVER_POLL_MS, RESTART_SETTLE_MS};
use super::input::{Command, Debouncer};
use crate::hardware::sound::{play_effect, SoundEffect};
use crate::hardware::{Board, Canvas, Clock, Key, Keypad, Tone};
use rand::RngCore;
use tracing::{debug, info};

/// Session states. `GameOver` is the waiting sub-state: the world is frozen
/// and only restart or quit are honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Playing,
    GameOver,
}

/// Inputs to the session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The world advanced one tick without a collision (or a frame passed
    /// while waiting).
    Stepped,
    Collided,
    Restart,
    Quit,
}

/// Result of feeding an event to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Remain in the current state.
    Stay,
    /// Freeze the world and wait for restart or quit.
    GameOver,
    /// Reinitialize the world and resume playing.
    Restart,
    /// Hand control back to the dispatcher.
    Exit,
}

impl SessionState {
    /// The transition table.
    ///
    /// | state    | Stepped | Collided | Restart | Quit |
    /// |----------|---------|----------|---------|------|
    /// | Playing  | Stay    | GameOver | Restart | Exit |
    /// | GameOver | Stay    | Stay     | Restart | Exit |
    pub fn on(self, event: SessionEvent) -> Transition {
        match (self, event) {
            (_, SessionEvent::Quit) => Transition::Exit,
            (_, SessionEvent::Restart) => Transition::Restart,
            (SessionState::Playing, SessionEvent::Collided) => Transition::GameOver,
            (SessionState::Playing, SessionEvent::Stepped) => Transition::Stay,
            (SessionState::GameOver, SessionEvent::Stepped | SessionEvent::Collided) => {
                Transition::Stay
            }
        }
    }
}

/// What one physics step produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Advanced,
    /// Advanced, and something worth a sound happened.
    Effect(SoundEffect),
    Collided,
}

/// A game that can be driven by a [`Session`].
pub trait ArcadeGame {
    fn title(&self) -> &'static str;

    /// Minimum spacing between accepted keys while playing. 0 disables the gate.
    fn debounce_ms(&self) -> u32;

    /// Map a key to this game's commands. Unrecognized keys map to `None`.
    fn command_for(&self, key: Key) -> Option<Command>;

    /// Apply an in-play command (movement or jump). Restart and quit are
    /// handled by the session.
    fn apply(&mut self, command: Command);

    /// Advance the world by one tick.
    fn step<R: RngCore>(&mut self, rng: &mut R) -> StepOutcome;

    /// Reinitialize the world. The high score survives.
    fn restart<R: RngCore>(&mut self, rng: &mut R);

    /// Sleep between ticks while playing.
    fn frame_delay_ms(&self) -> u32;

    fn render<D: Canvas>(&self, canvas: &mut D);

    /// Drawn once on top of the final frame when the run ends.
    fn render_game_over<D: Canvas>(&self, canvas: &mut D);

    fn score(&self) -> u32;
    fn high_score(&self) -> u32;
}

/// One running game plus its session state.
#[derive(Debug)]
pub struct Session<G> {
    game: G,
    state: SessionState,
    debouncer: Debouncer,
}

impl<G: ArcadeGame> Session<G> {
    pub fn new(game: G) -> Self {
        let debouncer = Debouncer::new(game.debounce_ms());
        Self {
            game,
            state: SessionState::Playing,
            debouncer,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn into_game(self) -> G {
        self.game
    }

    /// Run one loop iteration. Returns false once the session has ended.
    pub fn run_frame<K, D, T, C, R>(&mut self, board: &mut Board<K, D, T, C>, rng: &mut R) -> bool
    where
        K: Keypad,
        D: Canvas,
        T: Tone,
        C: Clock,
        R: RngCore,
    {
        if !board.keypad.is_attached() {
            return false;
        }
        let raw = board.keypad.poll();

        let event = match self.state {
            SessionState::Playing => {
                let now = board.clock.now_ms();
                let command = self
                    .debouncer
                    .accept(raw, now)
                    .and_then(|key| self.game.command_for(key));
                match command {
                    Some(Command::Quit) => SessionEvent::Quit,
                    Some(Command::Restart) => SessionEvent::Restart,
                    other => {
                        if let Some(cmd) = other {
                            self.game.apply(cmd);
                        }
                        match self.game.step(rng) {
                            StepOutcome::Advanced => SessionEvent::Stepped,
                            StepOutcome::Effect(effect) => {
                                play_effect(&mut board.tone, &mut board.clock, effect);
                                SessionEvent::Stepped
                            }
                            StepOutcome::Collided => SessionEvent::Collided,
                        }
                    }
                }
            }
            SessionState::GameOver => match raw.and_then(|key| self.game.command_for(key)) {
                Some(Command::Quit) => SessionEvent::Quit,
                Some(Command::Restart) => SessionEvent::Restart,
                _ => SessionEvent::Stepped,
            },
        };

        self.handle(event, board, rng)
    }

    fn handle<K, D, T, C, R>(
        &mut self,
        event: SessionEvent,
        board: &mut Board<K, D, T, C>,
        rng: &mut R,
    ) -> bool
    where
        K: Keypad,
        D: Canvas,
        T: Tone,
        C: Clock,
        R: RngCore,
    {
        match self.state.on(event) {
            Transition::Exit => {
                info!(game = self.game.title(), "quit to menu");
                false
            }
            Transition::Restart => {
                info!(game = self.game.title(), "restart");
                self.game.restart(rng);
                self.state = SessionState::Playing;
                board.clock.sleep_ms(RESTART_SETTLE_MS);
                true
            }
            Transition::GameOver => {
                debug!(
                    game = self.game.title(),
                    score = self.game.score(),
                    high_score = self.game.high_score(),
                    "game over"
                );
                self.state = SessionState::GameOver;
                self.game.render(&mut board.display);
                self.game.render_game_over(&mut board.display);
                board.display.present();
                play_effect(&mut board.tone, &mut board.clock, SoundEffect::GameOver);
                true
            }
            Transition::Stay => {
                match self.state {
                    SessionState::Playing => {
                        self.game.render(&mut board.display);
                        board.display.present();
                        board.clock.sleep_ms(self.game.frame_delay_ms());
                    }
                    SessionState::GameOver => board.clock.sleep_ms(GAME_OVER_POLL_MS),
                }
                true
            }
        }
    }
}

/// Run a game until the player quits. Blocks; returns the game so the caller
/// can keep its high score.
pub fn run_session<G, K, D, T, C, R>(game: G, board: &mut Board<K, D, T, C>, rng: &mut R) -> G
where
    G: ArcadeGame,
    K: Keypad,
    D: Canvas,
    T: Tone,
    C: Clock,
    R: RngCore,
{
    let mut session = Session::new(game);
    info!(game = session.game().title(), "session started");
    while session.run_frame(board, rng) {}
    info!(
        game = session.game().title(),
        high_score = session.game().high_score(),
        "session ended"
    );
    session.into_game()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::Xorshift32;
    use crate::hardware::{Color, Font};
    use std::collections::VecDeque;

    /// Counts ticks; collides on tick `crash_at`.
    struct Counter {
        ticks: u32,
        crash_at: u32,
        restarts: u32,
        applied: Vec<Command>,
    }

    impl Counter {
        fn new(crash_at: u32) -> Self {
            Self {
                ticks: 0,
                crash_at,
                restarts: 0,
                applied: Vec::new(),
            }
        }
    }

    impl ArcadeGame for Counter {
        fn title(&self) -> &'static str {
            "counter"
        }
        fn debounce_ms(&self) -> u32 {
            0
        }
        fn command_for(&self, key: Key) -> Option<Command> {
            match key {
                Key::Digit(5) => Some(Command::Jump),
                Key::C => Some(Command::Restart),
                Key::Hash => Some(Command::Quit),
                _ => None,
            }
        }
        fn apply(&mut self, command: Command) {
            self.applied.push(command);
        }
        fn step<R: RngCore>(&mut self, _rng: &mut R) -> StepOutcome {
            self.ticks += 1;
            if self.ticks == self.crash_at {
                StepOutcome::Collided
            } else {
                StepOutcome::Advanced
            }
        }
        fn restart<R: RngCore>(&mut self, _rng: &mut R) {
            self.ticks = 0;
            self.restarts += 1;
        }
        fn frame_delay_ms(&self) -> u32 {
            40
        }
        fn render<D: Canvas>(&self, _canvas: &mut D) {}
        fn render_game_over<D: Canvas>(&self, _canvas: &mut D) {}
        fn score(&self) -> u32 {
            self.ticks
        }
        fn high_score(&self) -> u32 {
            0
        }
    }

    struct Script(VecDeque<Option<Key>>);

    impl Keypad for Script {
        fn poll(&mut self) -> Option<Key> {
            self.0.pop_front().flatten()
        }
        fn is_attached(&self) -> bool {
            !self.0.is_empty()
        }
    }

    struct NullCanvas;

    impl Canvas for NullCanvas {
        fn width(&self) -> i32 {
            320
        }
        fn height(&self) -> i32 {
            240
        }
        fn set_color(&mut self, _color: Color) {}
        fn set_bg_color(&mut self, _color: Color) {}
        fn set_font(&mut self, _font: Font) {}
        fn clear(&mut self) {}
        fn fill_rect(&mut self, _x0: i32, _y0: i32, _x1: i32, _y1: i32) {}
        fn draw_rect(&mut self, _x0: i32, _y0: i32, _x1: i32, _y1: i32) {}
        fn draw_pixel(&mut self, _x: i32, _y: i32) {}
        fn draw_string_at(&mut self, _text: &str, _x: i32, _y: i32) {}
        fn draw_string_hcenter_at(&mut self, _text: &str, _x: i32, _y: i32) {}
    }

    struct Silent(u32);

    impl Tone for Silent {
        fn play(&mut self, _frequency_hz: u32, _duration_ms: u32) {
            self.0 += 1;
        }
    }

    #[derive(Default)]
    struct Sleeps {
        now: u32,
        log: Vec<u32>,
    }

    impl Clock for Sleeps {
        fn now_ms(&self) -> u32 {
            self.now
        }
        fn sleep_ms(&mut self, ms: u32) {
            self.now = self.now.wrapping_add(ms);
            self.log.push(ms);
        }
    }

    fn board(keys: Vec<Option<Key>>) -> Board<Script, NullCanvas, Silent, Sleeps> {
        Board::new(
            Script(keys.into_iter().collect()),
            NullCanvas,
            Silent(0),
            Sleeps::default(),
        )
    }

    #[test]
    fn test_transition_table() {
        use SessionEvent::*;
        use SessionState::*;
        assert_eq!(Playing.on(Stepped), Transition::Stay);
        assert_eq!(Playing.on(Collided), Transition::GameOver);
        assert_eq!(Playing.on(Restart), Transition::Restart);
        assert_eq!(Playing.on(Quit), Transition::Exit);
        assert_eq!(GameOver.on(Stepped), Transition::Stay);
        assert_eq!(GameOver.on(Collided), Transition::Stay);
        assert_eq!(GameOver.on(Restart), Transition::Restart);
        assert_eq!(GameOver.on(Quit), Transition::Exit);
    }

    #[test]
    fn test_playing_frame_steps_and_sleeps() {
        let mut b = board(vec![None, None]);
        let mut rng = Xorshift32::new();
        let mut s = Session::new(Counter::new(100));
        assert!(s.run_frame(&mut b, &mut rng));
        assert_eq!(s.game().ticks, 1);
        assert_eq!(b.clock.log, vec![40]);
    }

    #[test]
    fn test_collision_enters_game_over_and_plays_jingle() {
        let mut b = board(vec![None, None, None]);
        let mut rng = Xorshift32::new();
        let mut s = Session::new(Counter::new(1));
        assert!(s.run_frame(&mut b, &mut rng));
        assert_eq!(s.state(), SessionState::GameOver);
        assert_eq!(b.tone.0, 3);
    }

    #[test]
    fn test_game_over_freezes_world() {
        let mut b = board(vec![None; 6]);
        let mut rng = Xorshift32::new();
        let mut s = Session::new(Counter::new(1));
        s.run_frame(&mut b, &mut rng);
        let sleeps_before = b.clock.log.len();
        for _ in 0..3 {
            assert!(s.run_frame(&mut b, &mut rng));
        }
        assert_eq!(s.game().ticks, 1);
        assert_eq!(&b.clock.log[sleeps_before..], &[50, 50, 50]);
    }

    #[test]
    fn test_game_over_ignores_in_play_commands() {
        let mut b = board(vec![None, Some(Key::Digit(5)), None]);
        let mut rng = Xorshift32::new();
        let mut s = Session::new(Counter::new(1));
        s.run_frame(&mut b, &mut rng);
        s.run_frame(&mut b, &mut rng);
        assert!(s.game().applied.is_empty());
        assert_eq!(s.state(), SessionState::GameOver);
    }

    #[test]
    fn test_restart_from_game_over() {
        let mut b = board(vec![None, Some(Key::C), None]);
        let mut rng = Xorshift32::new();
        let mut s = Session::new(Counter::new(1));
        s.run_frame(&mut b, &mut rng);
        assert!(s.run_frame(&mut b, &mut rng));
        assert_eq!(s.state(), SessionState::Playing);
        assert_eq!(s.game().restarts, 1);
        assert_eq!(b.clock.log.last(), Some(&RESTART_SETTLE_MS));
    }

    #[test]
    fn test_quit_from_game_over() {
        let mut b = board(vec![None, Some(Key::Hash), None]);
        let mut rng = Xorshift32::new();
        let mut s = Session::new(Counter::new(1));
        s.run_frame(&mut b, &mut rng);
        assert!(!s.run_frame(&mut b, &mut rng));
    }

    #[test]
    fn test_quit_while_playing_skips_step() {
        let mut b = board(vec![Some(Key::Hash), None]);
        let mut rng = Xorshift32::new();
        let mut s = Session::new(Counter::new(100));
        assert!(!s.run_frame(&mut b, &mut rng));
        assert_eq!(s.game().ticks, 0);
    }

    #[test]
    fn test_hard_reset_while_playing() {
        let mut b = board(vec![None, None, Some(Key::C), None]);
        let mut rng = Xorshift32::new();
        let mut s = Session::new(Counter::new(100));
        s.run_frame(&mut b, &mut rng);
        s.run_frame(&mut b, &mut rng);
        assert!(s.run_frame(&mut b, &mut rng));
        assert_eq!(s.game().ticks, 0);
        assert_eq!(s.game().restarts, 1);
    }

    #[test]
    fn test_in_play_command_applied_before_step() {
        let mut b = board(vec![Some(Key::Digit(5)), None]);
        let mut rng = Xorshift32::new();
        let mut s = Session::new(Counter::new(100));
        s.run_frame(&mut b, &mut rng);
        assert_eq!(s.game().applied, vec![Command::Jump]);
        assert_eq!(s.game().ticks, 1);
    }

    #[test]
    fn test_detached_keypad_ends_session() {
        let mut b = board(Vec::new());
        let mut rng = Xorshift32::new();
        let game = run_session(Counter::new(100), &mut b, &mut rng);
        assert_eq!(game.ticks, 0);
    }

    #[test]
    fn test_run_session_returns_game() {
        let mut b = board(vec![None, None, Some(Key::Hash), None]);
        let mut rng = Xorshift32::new();
        let game = run_session(Counter::new(100), &mut b, &mut rng);
        assert_eq!(game.ticks, 2);
    }
}

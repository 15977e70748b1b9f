// Session pacing
pub const MENU_POLL_MS: u32 = 50;
pub const GAME_OVER_POLL_MS: u32 = 50;
/// Pause after a restart so the restart key can be released.
pub const RESTART_SETTLE_MS: u32 = 200;

// Input
pub const SNAKE_DEBOUNCE_MS: u32 = 150;
pub const FLAPPY_DEBOUNCE_MS: u32 = 0;

// PRNG
pub const DEFAULT_SEED: u32 = 0x1234_5678;

// Screen
pub const DEFAULT_SCREEN_WIDTH: u16 = 320;
pub const DEFAULT_SCREEN_HEIGHT: u16 = 240;
pub const MIN_SCREEN_WIDTH: u16 = 160;
pub const MIN_SCREEN_HEIGHT: u16 = 120;

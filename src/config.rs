//! Runtime settings for the host build.
//!
//! Loaded from `~/.arcade/config.json` (or `--config <path>`), then overridden
//! by command-line flags. Every field has a default, so a missing file or a
//! partial one is fine.

use crate::core::constants::{
    DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH, DEFAULT_SEED, MIN_SCREEN_HEIGHT, MIN_SCREEN_WIDTH,
};
use crate::error::ArcadeError;
use crate::games::snake::Boundary;
use crate::utils::persistence;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.json";
pub const LOG_FILE: &str = "arcade.log";
/// Environment variable that overrides `log_level`.
pub const LOG_ENV: &str = "ARCADE_LOG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeConfig {
    /// PRNG seed. Must be non-zero.
    pub seed: u32,
    pub snake_boundary: Boundary,
    /// Emulated panel size in pixels.
    pub screen_width: u16,
    pub screen_height: u16,
    /// Panel pixels per terminal cell column (rows pack two pixels each).
    pub pixel_scale: u16,
    pub sound: bool,
    /// `tracing` filter directive, e.g. "info" or "arcade=debug".
    pub log_level: String,
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            snake_boundary: Boundary::Walls,
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            pixel_scale: 4,
            sound: true,
            log_level: "info".to_string(),
        }
    }
}

impl ArcadeConfig {
    /// Load `~/.arcade/config.json`, or defaults if there is none.
    pub fn load() -> Result<Self, ArcadeError> {
        let path = persistence::arcade_path(CONFIG_FILE)?;
        Self::load_from(&path)
    }

    /// Load from an explicit path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ArcadeError> {
        let config = persistence::read_json::<Self>(path)?.unwrap_or_default();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ArcadeError> {
        if self.seed == 0 {
            return Err(ArcadeError::ZeroSeed);
        }
        if self.screen_width < MIN_SCREEN_WIDTH || self.screen_height < MIN_SCREEN_HEIGHT {
            return Err(ArcadeError::ScreenTooSmall {
                width: self.screen_width,
                height: self.screen_height,
                min_width: MIN_SCREEN_WIDTH,
                min_height: MIN_SCREEN_HEIGHT,
            });
        }
        Ok(())
    }

    /// Path of the log file.
    pub fn log_path() -> Result<PathBuf, ArcadeError> {
        Ok(persistence::arcade_path(LOG_FILE)?)
    }
}

//! Command-line flags.

use crate::config::ArcadeConfig;
use crate::error::ArcadeError;
use crate::games::snake::Boundary;
use std::path::PathBuf;

pub const USAGE: &str = "\
Keypad Arcade - snake and flappy bird for a 4x4 keypad

Usage: arcade [options]

Options:
  --config <path>  Read settings from <path> instead of ~/.arcade/config.json
  --seed <n>       PRNG seed, decimal or 0x-prefixed hex (non-zero)
  --wrap           Snake wraps around the screen edges instead of dying
  --version        Show version information
  --help           Show this help message

Keys:
  A/B/C/D pick a game from the menu, # returns to the menu.
  Snake: 2/4/6/8 or arrows steer, A restarts.
  Flappy: 5, Space or Enter jumps, C restarts.
  Ctrl-C exits.
";

/// Overrides collected from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub config: Option<PathBuf>,
    pub seed: Option<u32>,
    pub wrap: bool,
}

impl CliOptions {
    /// Apply the flags on top of a loaded config.
    pub fn apply(&self, config: &mut ArcadeConfig) {
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if self.wrap {
            config.snake_boundary = Boundary::Wrap;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    Run(CliOptions),
    Version,
    Help,
}

fn parse_seed(text: &str) -> Result<u32, ArcadeError> {
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => text.parse(),
    };
    parsed.map_err(|_| ArcadeError::Usage(format!("invalid seed: {text}")))
}

/// Parse arguments, program name excluded.
pub fn parse_args(args: &[String]) -> Result<CliAction, ArcadeError> {
    let mut options = CliOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--version" | "-v" => return Ok(CliAction::Version),
            "--help" | "-h" => return Ok(CliAction::Help),
            "--wrap" => options.wrap = true,
            "--seed" => {
                let value = iter
                    .next()
                    .ok_or_else(|| ArcadeError::Usage("--seed needs a value".to_string()))?;
                options.seed = Some(parse_seed(value)?);
            }
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| ArcadeError::Usage("--config needs a path".to_string()))?;
                options.config = Some(PathBuf::from(value));
            }
            other => {
                return Err(ArcadeError::Usage(format!(
                    "unknown argument: {other} (run 'arcade --help' for usage)"
                )))
            }
        }
    }

    Ok(CliAction::Run(options))
}

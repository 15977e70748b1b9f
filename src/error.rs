//! Runtime faults of the host program. Game failures are not errors; they end
//! in the GameOver state.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArcadeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("PRNG seed must be non-zero")]
    ZeroSeed,

    #[error("screen {width}x{height} is smaller than the {min_width}x{min_height} minimum")]
    ScreenTooSmall {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },

    #[error("invalid command line: {0}")]
    Usage(String),

    #[error("could not start logging: {0}")]
    Logging(String),
}

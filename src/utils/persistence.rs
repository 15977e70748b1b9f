//! JSON files under ~/.arcade/.
//!
//! Only configuration and logs live here. High scores are never written.

use crate::error::ArcadeError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the ~/.arcade/ directory path, creating it if needed.
pub fn arcade_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".arcade");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Full path for a file in ~/.arcade/.
pub fn arcade_path(filename: &str) -> io::Result<PathBuf> {
    Ok(arcade_dir()?.join(filename))
}

/// Read a JSON file. `Ok(None)` if it does not exist; a file that exists but
/// does not parse is an error naming the path.
pub fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>, ArcadeError> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    serde_json::from_str(&json)
        .map(Some)
        .map_err(|source| ArcadeError::Config {
            path: path.to_path_buf(),
            source,
        })
}

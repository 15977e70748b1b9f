//! Keypad Arcade - a cooperative minigame runtime for a small board with a
//! colour panel, a 4x4 matrix keypad and a tone generator.
//!
//! The engine (`core`, `games`) talks to the board only through the traits in
//! `hardware`. The `ui` module provides a terminal implementation of those
//! traits so the arcade runs on a desktop.

pub mod build_info;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod games;
pub mod hardware;
pub mod ui;
pub mod utils;

pub use error::ArcadeError;

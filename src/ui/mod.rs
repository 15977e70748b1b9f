//! Terminal board: every hardware collaborator backed by the host terminal.

pub mod framebuffer;
pub mod keyboard;
pub mod system;
pub mod terminal;

pub use framebuffer::{Framebuffer, TextLabel};
pub use keyboard::KeyboardKeypad;
pub use system::{SystemClock, TerminalTone};
pub use terminal::{required_size, with_restore, TerminalDisplay};

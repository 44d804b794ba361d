//! CLI Interface: User input and terminal rendering
//!
//! # Components
//! - `input.rs`: Keystroke capture using crossterm
//! - `display.rs`: Terminal rendering and pacing
//! - `login.rs`: Player profile form on plain stdin

pub mod display;
pub mod input;
pub mod login;

pub use display::{RenderContext, TerminalDisplay};
pub use input::TerminalKeys;

//! Keystroke capture using crossterm
//!
//! Features:
//! - Raw-mode key events mapped to the game's key vocabulary
//! - Ctrl+C and Escape as quit signals
//! - Blocking reads built on a short poll loop

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::arbiter::{KeyPress, KeySource};

/// Terminal key capture
pub struct TerminalKeys {
    /// Timeout for each poll pass (milliseconds)
    poll_timeout: Duration,
}

impl TerminalKeys {
    /// New handler with the default 50ms poll timeout
    pub fn new() -> Self {
        TerminalKeys {
            poll_timeout: Duration::from_millis(50),
        }
    }

    /// Enable raw mode for terminal input
    pub fn enable_raw_mode() -> io::Result<()> {
        crossterm::terminal::enable_raw_mode()
    }

    /// Disable raw mode and restore the terminal
    pub fn disable_raw_mode() -> io::Result<()> {
        crossterm::terminal::disable_raw_mode()
    }

    /// One poll pass; `None` when no relevant key arrived in time
    fn poll_key(&self) -> io::Result<Option<KeyPress>> {
        if !event::poll(self.poll_timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => Ok(Self::classify(&key)),
            _ => Ok(None),
        }
    }

    /// Map a terminal key event into the game's vocabulary
    fn classify(key: &KeyEvent) -> Option<KeyPress> {
        if Self::is_exit(key) {
            return Some(KeyPress::Quit);
        }
        match key.code {
            KeyCode::Enter => Some(KeyPress::Confirm),
            KeyCode::Backspace => Some(KeyPress::Backspace),
            KeyCode::Char(c) if c.is_ascii_digit() && !has_special_modifier(key) => {
                Some(KeyPress::Digit(c as u8 - b'0'))
            }
            _ => None,
        }
    }

    /// Ctrl+C or Escape
    fn is_exit(key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
            KeyCode::Esc => true,
            _ => false,
        }
    }
}

fn has_special_modifier(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) || key.modifiers.contains(KeyModifiers::ALT)
}

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> io::Result<KeyPress> {
        loop {
            if let Some(key) = self.poll_key()? {
                return Ok(key);
            }
        }
    }
}

impl Default for TerminalKeys {
    fn default() -> Self {
        Self::new()
    }
}

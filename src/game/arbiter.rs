//! Input arbitration: voice first, typing as fallback
//!
//! One `acquire` call produces the player's answer for a round. The voice
//! channel gets up to two capture attempts; a short or unintelligible
//! transcript costs one attempt, while a dead service or missing device
//! ends the channel at once. Whatever is left falls through to the typed
//! channel, which loops on key events until a full-length answer is
//! confirmed or the player quits.

use std::io;

use thiserror::Error;

use crate::game::ui::{MessageStyle, Renderer};
use crate::speech::recognizer::{digits_in, UtteranceRecognizer};

/// Voice capture attempts before falling back to typing
pub const VOICE_ATTEMPTS: u32 = 2;

/// Key vocabulary for typed capture, independent of any event-loop
/// mechanism
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyPress {
    /// A digit key 0-9
    Digit(u8),
    Backspace,
    /// Enter/submit
    Confirm,
    /// Ctrl+C, Escape, window close
    Quit,
}

/// Blocking source of typed key events
pub trait KeySource {
    /// Block until the player presses a key the game understands
    fn next_key(&mut self) -> io::Result<KeyPress>;
}

/// Why `acquire` returned no answer
#[derive(Debug, Error)]
pub enum InputError {
    /// The player quit mid-capture; the session ends with no report
    #[error("player quit during input")]
    Aborted,
    #[error("input device failed")]
    Io(#[from] io::Error),
}

/// Obtains one full-length answer per round, preferring speech
pub struct InputArbiter {
    voice: Option<Box<dyn UtteranceRecognizer>>,
    voice_attempts: u32,
}

impl InputArbiter {
    /// Arbiter with an optional voice channel; `None` means every round is
    /// typed
    pub fn new(voice: Option<Box<dyn UtteranceRecognizer>>) -> Self {
        InputArbiter {
            voice,
            voice_attempts: VOICE_ATTEMPTS,
        }
    }

    pub fn has_voice(&self) -> bool {
        self.voice.is_some()
    }

    /// Acquire exactly `length` digits from the player
    ///
    /// Returns a digit string of exactly `length` characters, or
    /// `InputError::Aborted` if the player quit. Never returns a partial
    /// answer.
    pub fn acquire(
        &mut self,
        length: usize,
        keys: &mut dyn KeySource,
        ui: &mut dyn Renderer,
    ) -> Result<String, InputError> {
        if let Some(answer) = self.try_voice(length, ui)? {
            return Ok(answer);
        }

        if self.has_voice() {
            ui.show_message("Switching to typed input...", MessageStyle::Info)?;
        }
        self.read_typed(length, keys, ui)
    }

    /// Run the voice channel; `Ok(None)` means fall through to typing
    fn try_voice(
        &mut self,
        length: usize,
        ui: &mut dyn Renderer,
    ) -> Result<Option<String>, InputError> {
        let Some(recognizer) = self.voice.as_mut() else {
            return Ok(None);
        };

        for attempt in 1..=self.voice_attempts {
            ui.show_message("Calibrating microphone... Please wait.", MessageStyle::Info)?;
            ui.show_message("Speak the sequence clearly...", MessageStyle::Prompt)?;

            match recognizer.recognize() {
                Ok(transcript) => {
                    let answer = digits_in(&transcript, length);
                    if answer.len() == length {
                        return Ok(Some(answer));
                    }
                    log::debug!(
                        "voice attempt {}/{}: heard {} of {} digits",
                        attempt,
                        self.voice_attempts,
                        answer.len(),
                        length
                    );
                    ui.show_message(
                        &format!("Please speak exactly {} numbers.", length),
                        MessageStyle::Warning,
                    )?;
                }
                Err(failure) if failure.ends_channel() => {
                    log::warn!("voice channel closed: {}", failure);
                    ui.show_message(
                        "Speech recognition is unavailable.",
                        MessageStyle::Warning,
                    )?;
                    return Ok(None);
                }
                Err(failure) => {
                    log::debug!("voice attempt {}/{}: {}", attempt, self.voice_attempts, failure);
                    ui.show_message(
                        "Sorry, I couldn't understand. Try again.",
                        MessageStyle::Warning,
                    )?;
                }
            }
        }

        Ok(None)
    }

    /// Typed capture: digits fill a buffer, Confirm submits at full length
    fn read_typed(
        &mut self,
        length: usize,
        keys: &mut dyn KeySource,
        ui: &mut dyn Renderer,
    ) -> Result<String, InputError> {
        let mut buffer = String::new();

        loop {
            ui.show_typed_input(length, &buffer)?;

            match keys.next_key()? {
                KeyPress::Digit(d) if buffer.len() < length => {
                    buffer.push((b'0' + d) as char);
                }
                KeyPress::Digit(_) => {}
                KeyPress::Backspace => {
                    buffer.pop();
                }
                KeyPress::Confirm if buffer.len() == length => return Ok(buffer),
                KeyPress::Confirm => {}
                KeyPress::Quit => return Err(InputError::Aborted),
            }
        }
    }
}

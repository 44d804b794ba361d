//! Renderer boundary trait
//!
//! The core drives the screen exclusively through this trait: flash a
//! digit, show a message, show a round result. Implementations own pacing
//! and styling; a test double can record calls instead of drawing.

use std::io;

use crate::game::sequence::Sequence;

/// Styling hint for free-form messages
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageStyle {
    /// Neutral information
    Info,
    /// The player should act on this now
    Prompt,
    /// Something went wrong but play continues
    Warning,
}

/// Presentation collaborator for the whole game
pub trait Renderer {
    /// Title and description lines shown before the session starts
    fn show_start_screen(&mut self, description: &[&str]) -> io::Result<()>;

    /// Flash one digit of the sequence, then clear it
    fn show_sequence_digit(&mut self, digit: u8) -> io::Result<()>;

    /// Free-form status or prompt line
    fn show_message(&mut self, text: &str, style: MessageStyle) -> io::Result<()>;

    /// Typed-capture echo: the buffer so far out of `length` digits
    fn show_typed_input(&mut self, length: usize, buffer: &str) -> io::Result<()>;

    /// Outcome of one attempt, with the chances left in this level
    fn show_result(
        &mut self,
        correct: bool,
        remaining_chances: u32,
        sequence: &Sequence,
        answer: &str,
    ) -> io::Result<()>;

    /// Promotion banner after a cleared level
    fn show_level_complete(&mut self, level: u32, score: u32) -> io::Result<()>;

    /// Final screen once the session is over
    fn show_game_over(&mut self, score: u32) -> io::Result<()>;
}

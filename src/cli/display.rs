//! Terminal rendering with crossterm
//!
//! Features:
//! - Paced digit flashing (visible, then blank, per digit)
//! - Color-coded answer echo and round results
//! - Start and game-over screens
//!
//! All timing and pacing lives in an explicitly constructed
//! `RenderContext`; there is no process-wide display state.

use std::io::{stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor, execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use crate::game::sequence::Sequence;
use crate::game::ui::{MessageStyle, Renderer};

/// Pacing configuration for the terminal renderer
#[derive(Clone, Copy, Debug)]
pub struct RenderContext {
    /// How long each sequence digit stays on screen
    pub digit_visible: Duration,
    /// Blank gap between consecutive digits
    pub digit_gap: Duration,
    /// Pause after a round result so the player can read it
    pub result_pause: Duration,
    /// Pause after transient messages (prompts, warnings)
    pub message_pause: Duration,
}

impl Default for RenderContext {
    fn default() -> Self {
        RenderContext {
            digit_visible: Duration::from_millis(1000),
            digit_gap: Duration::from_millis(500),
            result_pause: Duration::from_millis(2000),
            message_pause: Duration::from_millis(700),
        }
    }
}

/// Crossterm implementation of the game's renderer boundary
pub struct TerminalDisplay {
    ctx: RenderContext,
}

impl TerminalDisplay {
    pub fn new(ctx: RenderContext) -> Self {
        TerminalDisplay { ctx }
    }

    fn clear(&self) -> std::io::Result<()> {
        let mut stdout = stdout();
        execute!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        Ok(())
    }

    fn style_color(style: MessageStyle) -> Color {
        match style {
            MessageStyle::Info => Color::Cyan,
            MessageStyle::Prompt => Color::Yellow,
            MessageStyle::Warning => Color::Red,
        }
    }

    /// Reset colors before handing the screen back
    pub fn shutdown(&self) -> std::io::Result<()> {
        let mut stdout = stdout();
        execute!(stdout, ResetColor, Print("\n"))?;
        stdout.flush()?;
        Ok(())
    }
}

impl Renderer for TerminalDisplay {
    fn show_start_screen(&mut self, description: &[&str]) -> std::io::Result<()> {
        self.clear()?;
        let mut stdout = stdout();

        execute!(
            stdout,
            cursor::MoveTo(0, 1),
            SetForegroundColor(Color::Green),
            Print("Memory Test\n\n"),
            ResetColor
        )?;

        for line in description {
            execute!(stdout, Print(line), Print("\n"))?;
        }

        execute!(
            stdout,
            Print("\n"),
            SetForegroundColor(Color::DarkGrey),
            Print("ENTER to start  |  ESC or Ctrl+C to quit\n"),
            ResetColor
        )?;
        stdout.flush()?;
        Ok(())
    }

    fn show_sequence_digit(&mut self, digit: u8) -> std::io::Result<()> {
        self.clear()?;
        let mut stdout = stdout();

        execute!(
            stdout,
            cursor::MoveTo(0, 2),
            SetForegroundColor(Color::White),
            Print(format!("        {}\n", digit)),
            ResetColor
        )?;
        stdout.flush()?;
        std::thread::sleep(self.ctx.digit_visible);

        self.clear()?;
        std::thread::sleep(self.ctx.digit_gap);
        Ok(())
    }

    fn show_message(&mut self, text: &str, style: MessageStyle) -> std::io::Result<()> {
        self.clear()?;
        let mut stdout = stdout();

        execute!(
            stdout,
            cursor::MoveTo(0, 2),
            SetForegroundColor(Self::style_color(style)),
            Print(text),
            Print("\n"),
            ResetColor
        )?;
        stdout.flush()?;

        // Prompts stay up until the next draw; transient notices get a
        // fixed reading pause.
        if style != MessageStyle::Prompt {
            std::thread::sleep(self.ctx.message_pause);
        }
        Ok(())
    }

    fn show_typed_input(&mut self, length: usize, buffer: &str) -> std::io::Result<()> {
        self.clear()?;
        let mut stdout = stdout();

        execute!(
            stdout,
            cursor::MoveTo(0, 2),
            SetForegroundColor(Color::Yellow),
            Print(format!("Please type the {} numbers: ", length)),
            ResetColor,
            Print(buffer),
            SetForegroundColor(Color::DarkGrey),
            Print("_".repeat(length.saturating_sub(buffer.len()))),
            ResetColor,
            Print("\n\n"),
            SetForegroundColor(Color::DarkGrey),
            Print("ENTER to submit  |  BACKSPACE to correct  |  ESC to quit\n"),
            ResetColor
        )?;
        stdout.flush()?;
        Ok(())
    }

    fn show_result(
        &mut self,
        correct: bool,
        remaining_chances: u32,
        sequence: &Sequence,
        answer: &str,
    ) -> std::io::Result<()> {
        self.clear()?;
        let mut stdout = stdout();

        execute!(
            stdout,
            cursor::MoveTo(0, 2),
            Print(format!("Shown numbers: {}\n", sequence.to_answer_string())),
            Print(format!("Your answer:   {}\n\n", answer)),
        )?;

        if correct {
            execute!(
                stdout,
                SetForegroundColor(Color::Green),
                Print("Correct!\n"),
                ResetColor
            )?;
        } else {
            execute!(
                stdout,
                SetForegroundColor(Color::Red),
                Print("Wrong!\n"),
                Print(format!("Remaining Chances: {}\n", remaining_chances)),
                ResetColor
            )?;
        }
        stdout.flush()?;
        std::thread::sleep(self.ctx.result_pause);
        Ok(())
    }

    fn show_level_complete(&mut self, level: u32, score: u32) -> std::io::Result<()> {
        self.clear()?;
        let mut stdout = stdout();

        execute!(
            stdout,
            cursor::MoveTo(0, 2),
            SetForegroundColor(Color::Green),
            Print(format!("Level {} reached!\n", level)),
            ResetColor,
            Print(format!("Points: {}\n", score)),
        )?;
        stdout.flush()?;
        std::thread::sleep(self.ctx.result_pause);
        Ok(())
    }

    fn show_game_over(&mut self, score: u32) -> std::io::Result<()> {
        self.clear()?;
        let mut stdout = stdout();

        execute!(
            stdout,
            cursor::MoveTo(0, 2),
            SetForegroundColor(Color::Red),
            Print("Game Over\n\n"),
            ResetColor,
            Print(format!("Your score: {}\n", score)),
        )?;
        stdout.flush()?;
        std::thread::sleep(self.ctx.result_pause);
        Ok(())
    }
}

impl Drop for TerminalDisplay {
    fn drop(&mut self) {
        // Best effort cleanup
        let _ = self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pacing() {
        let ctx = RenderContext::default();
        assert_eq!(ctx.digit_visible, Duration::from_millis(1000));
        assert_eq!(ctx.digit_gap, Duration::from_millis(500));
        assert_eq!(ctx.result_pause, Duration::from_millis(2000));
    }

    #[test]
    fn test_style_colors_are_distinct() {
        let colors = [
            TerminalDisplay::style_color(MessageStyle::Info),
            TerminalDisplay::style_color(MessageStyle::Prompt),
            TerminalDisplay::style_color(MessageStyle::Warning),
        ];
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
    }
}

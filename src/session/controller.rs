//! Session controller
//!
//! Drives one whole session: start screen, the show/recall/score loop over
//! levels, and the final report. The controller only talks to boundary
//! traits (renderer, key source, report sink), so the entire flow runs
//! against fakes in tests.

use log::{error, info};

use crate::game::arbiter::{InputArbiter, InputError, KeyPress, KeySource};
use crate::game::evaluate::score_attempt;
use crate::game::progression::{LevelDecision, LevelProgression};
use crate::game::sequence::Sequence;
use crate::game::ui::Renderer;
use crate::session::report::{PlayerProfile, ReportSink, SessionReport};
use crate::session::stats::RecallTracker;

/// Start-screen copy shown before the first round
pub const START_DESCRIPTION: [&str; 4] = [
    "Understand your capacity to store, retain, and recollect information.",
    "This test will assess your working memory and decision-making.",
    "Memory is the capacity to recall and use information to make decisions.",
    "Press ENTER to begin.",
];

/// How a session ended
#[derive(Debug)]
pub enum SessionEnd {
    /// Played to game over; the report was emitted
    Completed(SessionReport),
    /// The player quit; no report is written
    Aborted,
}

/// Runs the game loop over the boundary collaborators
pub struct SessionController<'a> {
    profile: PlayerProfile,
    arbiter: InputArbiter,
    keys: &'a mut dyn KeySource,
    ui: &'a mut dyn Renderer,
    sink: &'a dyn ReportSink,
}

impl<'a> SessionController<'a> {
    pub fn new(
        profile: PlayerProfile,
        arbiter: InputArbiter,
        keys: &'a mut dyn KeySource,
        ui: &'a mut dyn Renderer,
        sink: &'a dyn ReportSink,
    ) -> Self {
        SessionController {
            profile,
            arbiter,
            keys,
            ui,
            sink,
        }
    }

    /// Play a full session
    pub fn run(mut self) -> Result<SessionEnd, InputError> {
        self.ui.show_start_screen(&START_DESCRIPTION)?;
        if !self.await_start()? {
            return Ok(SessionEnd::Aborted);
        }

        let mut progression = LevelProgression::new();
        let mut tracker = RecallTracker::new();

        loop {
            let sequence = Sequence::generate(progression.sequence_length());
            for &digit in sequence.digits() {
                self.ui.show_sequence_digit(digit)?;
            }

            let answer = match self
                .arbiter
                .acquire(sequence.len(), &mut *self.keys, &mut *self.ui)
            {
                Ok(answer) => answer,
                Err(InputError::Aborted) => return Ok(SessionEnd::Aborted),
                Err(e) => return Err(e),
            };

            let score = score_attempt(&answer, &sequence);
            tracker.record_attempt(&sequence, &answer, score);

            let remaining = if score.is_fully_correct {
                progression.remaining_chances()
            } else {
                progression.remaining_chances() - 1
            };
            let decision = progression.record_attempt(score.is_fully_correct);

            self.ui
                .show_result(score.is_fully_correct, remaining, &sequence, &answer)?;

            match decision {
                LevelDecision::Continue => {}
                LevelDecision::Advance => {
                    info!(
                        "level {} reached, sequence length now {}",
                        progression.level(),
                        progression.sequence_length()
                    );
                    self.ui
                        .show_level_complete(progression.level(), progression.score())?;
                }
                LevelDecision::GameOver => break,
            }
        }

        let report = SessionReport::new(self.profile.clone(), progression.score(), tracker.summary());
        match self.sink.persist(&report) {
            Ok(path) => info!("session report written to {}", path.display()),
            Err(e) => error!("could not persist session report: {}", e),
        }

        self.ui.show_game_over(report.final_score)?;
        Ok(SessionEnd::Completed(report))
    }

    /// Wait on the start screen for the player to begin or leave
    fn await_start(&mut self) -> Result<bool, InputError> {
        loop {
            match self.keys.next_key()? {
                KeyPress::Confirm => return Ok(true),
                KeyPress::Quit => return Ok(false),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ui::MessageStyle;
    use std::cell::RefCell;
    use std::io;
    use std::path::PathBuf;
    use std::rc::Rc;

    /// Renderer fake that records what was shown
    struct RecordingUi {
        shown: Rc<RefCell<Vec<u8>>>,
        results: Vec<bool>,
        level_completes: Vec<(u32, u32)>,
        game_over_score: Option<u32>,
    }

    impl RecordingUi {
        fn new(shown: Rc<RefCell<Vec<u8>>>) -> Self {
            RecordingUi {
                shown,
                results: Vec::new(),
                level_completes: Vec::new(),
                game_over_score: None,
            }
        }
    }

    impl Renderer for RecordingUi {
        fn show_start_screen(&mut self, _description: &[&str]) -> io::Result<()> {
            Ok(())
        }
        fn show_sequence_digit(&mut self, digit: u8) -> io::Result<()> {
            self.shown.borrow_mut().push(digit);
            Ok(())
        }
        fn show_message(&mut self, _text: &str, _style: MessageStyle) -> io::Result<()> {
            Ok(())
        }
        fn show_typed_input(&mut self, _length: usize, _buffer: &str) -> io::Result<()> {
            Ok(())
        }
        fn show_result(
            &mut self,
            correct: bool,
            _remaining_chances: u32,
            _sequence: &Sequence,
            _answer: &str,
        ) -> io::Result<()> {
            self.results.push(correct);
            Ok(())
        }
        fn show_level_complete(&mut self, level: u32, score: u32) -> io::Result<()> {
            self.level_completes.push((level, score));
            Ok(())
        }
        fn show_game_over(&mut self, score: u32) -> io::Result<()> {
            self.game_over_score = Some(score);
            Ok(())
        }
    }

    /// Key source that starts the game, echoes the shown digits perfectly
    /// for `echo_rounds` rounds, then answers zeros (always wrong)
    struct EchoPlayer {
        shown: Rc<RefCell<Vec<u8>>>,
        cursor: usize,
        rounds_done: usize,
        echo_rounds: usize,
        started: bool,
    }

    impl EchoPlayer {
        fn new(shown: Rc<RefCell<Vec<u8>>>, echo_rounds: usize) -> Self {
            EchoPlayer {
                shown,
                cursor: 0,
                rounds_done: 0,
                echo_rounds,
                started: false,
            }
        }
    }

    impl KeySource for EchoPlayer {
        fn next_key(&mut self) -> io::Result<KeyPress> {
            if !self.started {
                self.started = true;
                return Ok(KeyPress::Confirm);
            }

            let shown = self.shown.borrow();
            if self.cursor < shown.len() {
                let digit = if self.rounds_done < self.echo_rounds {
                    shown[self.cursor]
                } else {
                    0
                };
                self.cursor += 1;
                Ok(KeyPress::Digit(digit))
            } else {
                self.rounds_done += 1;
                Ok(KeyPress::Confirm)
            }
        }
    }

    /// Key source replaying a fixed script
    struct ScriptedKeys {
        script: Vec<KeyPress>,
        next: usize,
    }

    impl KeySource for ScriptedKeys {
        fn next_key(&mut self) -> io::Result<KeyPress> {
            let key = self.script[self.next];
            self.next += 1;
            Ok(key)
        }
    }

    /// Sink that captures the report in memory
    #[derive(Default)]
    struct MemorySink {
        report: RefCell<Option<SessionReport>>,
    }

    impl ReportSink for MemorySink {
        fn persist(
            &self,
            report: &SessionReport,
        ) -> Result<PathBuf, Box<dyn std::error::Error>> {
            *self.report.borrow_mut() = Some(report.clone());
            Ok(PathBuf::from("memory"))
        }
    }

    fn run_session(keys: &mut dyn KeySource, ui: &mut RecordingUi, sink: &MemorySink) -> SessionEnd {
        let controller = SessionController::new(
            PlayerProfile::anonymous(),
            InputArbiter::new(None),
            keys,
            ui,
            sink,
        );
        controller.run().unwrap()
    }

    #[test]
    fn test_failed_first_level_completes_with_report() {
        let shown = Rc::new(RefCell::new(Vec::new()));
        let mut ui = RecordingUi::new(Rc::clone(&shown));
        // Never echoes: every answer is zeros, so level 1 is failed 0/3.
        let mut keys = EchoPlayer::new(Rc::clone(&shown), 0);
        let sink = MemorySink::default();

        let end = run_session(&mut keys, &mut ui, &sink);

        let report = match end {
            SessionEnd::Completed(report) => report,
            SessionEnd::Aborted => panic!("session should complete"),
        };
        assert_eq!(report.final_score, 0);
        assert_eq!(report.levels_completed, 0);
        assert_eq!(shown.borrow().len(), 9, "3 attempts of 3 digits");
        assert_eq!(ui.results, vec![false, false, false]);
        assert!(ui.level_completes.is_empty());
        assert_eq!(ui.game_over_score, Some(0));
        assert_eq!(sink.report.borrow().as_ref().unwrap().final_score, 0);
    }

    #[test]
    fn test_perfect_level_then_failure_advances_once() {
        let shown = Rc::new(RefCell::new(Vec::new()));
        let mut ui = RecordingUi::new(Rc::clone(&shown));
        // Perfect for level 1's three attempts, zeros afterwards.
        let mut keys = EchoPlayer::new(Rc::clone(&shown), 3);
        let sink = MemorySink::default();

        let end = run_session(&mut keys, &mut ui, &sink);

        let report = match end {
            SessionEnd::Completed(report) => report,
            SessionEnd::Aborted => panic!("session should complete"),
        };
        assert_eq!(report.final_score, 3);
        assert_eq!(report.levels_completed, 1);
        assert_eq!(ui.level_completes, vec![(2, 3)]);
        // 3 attempts of length 3, then 3 attempts of length 4.
        assert_eq!(shown.borrow().len(), 9 + 12);
        assert_eq!(report.recall.fully_correct_attempts, 3);
    }

    #[test]
    fn test_quit_on_start_screen_aborts_without_report() {
        let shown = Rc::new(RefCell::new(Vec::new()));
        let mut ui = RecordingUi::new(Rc::clone(&shown));
        let mut keys = ScriptedKeys {
            script: vec![KeyPress::Quit],
            next: 0,
        };
        let sink = MemorySink::default();

        let end = run_session(&mut keys, &mut ui, &sink);

        assert!(matches!(end, SessionEnd::Aborted));
        assert!(sink.report.borrow().is_none());
        assert!(ui.game_over_score.is_none());
    }

    #[test]
    fn test_quit_during_typing_aborts_without_report() {
        let shown = Rc::new(RefCell::new(Vec::new()));
        let mut ui = RecordingUi::new(Rc::clone(&shown));
        let mut keys = ScriptedKeys {
            script: vec![KeyPress::Confirm, KeyPress::Digit(1), KeyPress::Quit],
            next: 0,
        };
        let sink = MemorySink::default();

        let end = run_session(&mut keys, &mut ui, &sink);

        assert!(matches!(end, SessionEnd::Aborted));
        assert!(sink.report.borrow().is_none());
    }
}

//! Level and attempt state machine
//!
//! Tracks:
//! - Current level and cumulative score
//! - Attempts and correct answers within the current level
//! - Promote/fail decision after the third attempt
//!
//! Each level is a fixed window of exactly three attempts at the same
//! sequence length. Two or more fully-correct attempts promote the player;
//! fewer end the session. Score is one point per fully-correct attempt with
//! no level-completion bonus.

/// Attempts allowed per level before it resolves
pub const ATTEMPTS_PER_LEVEL: u32 = 3;
/// Fully-correct attempts required to advance
pub const PROMOTE_THRESHOLD: u32 = 2;
/// Sequence length is this plus the current level
pub const BASE_SEQUENCE_LENGTH: u32 = 2;

/// What the progression decided after recording one attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelDecision {
    /// More attempts remain in the current level
    Continue,
    /// Level resolved with enough correct attempts; counters reset at the
    /// next (longer) sequence length
    Advance,
    /// Level resolved below the threshold; the session is over
    GameOver,
}

/// Session-long progression state
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelProgression {
    level: u32,
    score: u32,
    attempts_this_level: u32,
    correct_this_level: u32,
    finished: bool,
}

impl LevelProgression {
    /// Start a session at level 1 (sequence length 3)
    pub fn new() -> Self {
        LevelProgression {
            level: 1,
            score: 0,
            attempts_this_level: 0,
            correct_this_level: 0,
            finished: false,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    #[allow(dead_code)]
    pub fn attempts_this_level(&self) -> u32 {
        self.attempts_this_level
    }

    #[allow(dead_code)]
    pub fn correct_this_level(&self) -> u32 {
        self.correct_this_level
    }

    /// Sequence length for the current level
    pub fn sequence_length(&self) -> usize {
        (BASE_SEQUENCE_LENGTH + self.level) as usize
    }

    /// Incorrect attempts still affordable in this level (informational)
    pub fn remaining_chances(&self) -> u32 {
        let incorrect = self.attempts_this_level - self.correct_this_level;
        ATTEMPTS_PER_LEVEL - incorrect
    }

    #[allow(dead_code)]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Record one evaluated attempt and resolve the level if it was the third
    pub fn record_attempt(&mut self, fully_correct: bool) -> LevelDecision {
        debug_assert!(!self.finished, "attempt recorded after session end");

        self.attempts_this_level += 1;
        if fully_correct {
            self.correct_this_level += 1;
            self.score += 1;
        }

        if self.attempts_this_level < ATTEMPTS_PER_LEVEL {
            return LevelDecision::Continue;
        }

        if self.correct_this_level >= PROMOTE_THRESHOLD {
            self.level += 1;
            self.attempts_this_level = 0;
            self.correct_this_level = 0;
            LevelDecision::Advance
        } else {
            self.finished = true;
            LevelDecision::GameOver
        }
    }
}

impl Default for LevelProgression {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let p = LevelProgression::new();
        assert_eq!(p.level(), 1);
        assert_eq!(p.score(), 0);
        assert_eq!(p.sequence_length(), 3);
        assert_eq!(p.remaining_chances(), 3);
        assert!(!p.is_finished());
    }

    #[test]
    fn test_three_correct_attempts_advance_without_bonus() {
        let mut p = LevelProgression::new();
        assert_eq!(p.record_attempt(true), LevelDecision::Continue);
        assert_eq!(p.record_attempt(true), LevelDecision::Continue);
        assert_eq!(p.record_attempt(true), LevelDecision::Advance);

        assert_eq!(p.level(), 2);
        assert_eq!(p.score(), 3);
        assert_eq!(p.attempts_this_level(), 0);
        assert_eq!(p.correct_this_level(), 0);
        assert_eq!(p.sequence_length(), 4);
    }

    #[test]
    fn test_two_of_three_correct_advances_in_any_order() {
        for miss_at in 0..3 {
            let mut p = LevelProgression::new();
            let mut last = LevelDecision::Continue;
            for attempt in 0..3 {
                last = p.record_attempt(attempt != miss_at);
            }
            assert_eq!(last, LevelDecision::Advance, "miss at attempt {miss_at}");
            assert_eq!(p.level(), 2);
            assert_eq!(p.score(), 2);
        }
    }

    #[test]
    fn test_one_correct_ends_the_session() {
        let mut p = LevelProgression::new();
        p.record_attempt(true);
        p.record_attempt(false);
        assert_eq!(p.record_attempt(false), LevelDecision::GameOver);

        assert!(p.is_finished());
        assert_eq!(p.score(), 1);
        assert_eq!(p.level(), 1);
    }

    #[test]
    fn test_score_accumulates_across_levels() {
        let mut p = LevelProgression::new();
        // Clear level 1 with 2/3, then fail level 2 with 1/3.
        p.record_attempt(true);
        p.record_attempt(false);
        assert_eq!(p.record_attempt(true), LevelDecision::Advance);
        p.record_attempt(false);
        p.record_attempt(true);
        assert_eq!(p.record_attempt(false), LevelDecision::GameOver);

        assert_eq!(p.score(), 3);
        assert_eq!(p.level(), 2);
    }

    #[test]
    fn test_remaining_chances_counts_only_incorrect_attempts() {
        let mut p = LevelProgression::new();
        p.record_attempt(true);
        assert_eq!(p.remaining_chances(), 3);
        p.record_attempt(false);
        assert_eq!(p.remaining_chances(), 2);
    }
}

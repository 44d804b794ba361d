//! Recall statistics across a session
//!
//! Tracks:
//! - Attempt and per-digit tallies
//! - EMA of per-attempt digit accuracy for trend reporting
//! - Digit confusion pairs (shown digit vs. answered digit)
//!
//! The tallies end up in the session report so a player can see not just
//! the score but which digits they keep getting wrong.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::game::evaluate::AttemptScore;
use crate::game::sequence::Sequence;

/// Confusions of one digit pair before it counts as a problem digit
const CONFUSION_THRESHOLD: u32 = 3;
/// EMA decay factor
const EMA_ALPHA: f32 = 0.1;

/// Accumulates recall quality over a session
#[derive(Clone, Debug)]
pub struct RecallTracker {
    total_attempts: u32,
    fully_correct_attempts: u32,
    total_digits: u32,
    correct_digits: u32,
    ema_accuracy: f32,
    /// (shown digit, answered digit) -> occurrences; mismatches only
    confusions: FxHashMap<(char, char), u32>,
}

impl RecallTracker {
    pub fn new() -> Self {
        RecallTracker {
            total_attempts: 0,
            fully_correct_attempts: 0,
            total_digits: 0,
            correct_digits: 0,
            ema_accuracy: 1.0,
            confusions: FxHashMap::default(),
        }
    }

    /// Fold in one evaluated attempt
    pub fn record_attempt(&mut self, sequence: &Sequence, answer: &str, score: AttemptScore) {
        self.total_attempts += 1;
        if score.is_fully_correct {
            self.fully_correct_attempts += 1;
        }
        self.total_digits += sequence.len() as u32;
        self.correct_digits += score.correct_count as u32;

        let attempt_accuracy = if sequence.is_empty() {
            1.0
        } else {
            score.correct_count as f32 / sequence.len() as f32
        };
        self.ema_accuracy = EMA_ALPHA * attempt_accuracy + (1.0 - EMA_ALPHA) * self.ema_accuracy;

        let expected = sequence.to_answer_string();
        for (want, got) in expected.chars().zip(answer.chars()) {
            if want != got {
                *self.confusions.entry((want, got)).or_insert(0) += 1;
            }
        }
    }

    /// Fraction of all shown digits answered correctly in position
    pub fn digit_accuracy(&self) -> f32 {
        if self.total_digits == 0 {
            1.0
        } else {
            self.correct_digits as f32 / self.total_digits as f32
        }
    }

    #[allow(dead_code)]
    pub fn ema_accuracy(&self) -> f32 {
        self.ema_accuracy
    }

    /// Digits the player repeatedly answered wrong (3+ times the same way)
    pub fn problem_digits(&self) -> Vec<char> {
        let mut digits: Vec<char> = self
            .confusions
            .iter()
            .filter(|(_, &count)| count >= CONFUSION_THRESHOLD)
            .map(|(&(want, _), _)| want)
            .collect();
        digits.sort_unstable();
        digits.dedup();
        digits
    }

    /// Snapshot for the session report
    pub fn summary(&self) -> RecallSummary {
        RecallSummary {
            total_attempts: self.total_attempts,
            fully_correct_attempts: self.fully_correct_attempts,
            digit_accuracy: self.digit_accuracy(),
            ema_accuracy: self.ema_accuracy,
            problem_digits: self.problem_digits(),
        }
    }
}

impl Default for RecallTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Recall quality as persisted in the session report
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecallSummary {
    pub total_attempts: u32,
    pub fully_correct_attempts: u32,
    pub digit_accuracy: f32,
    pub ema_accuracy: f32,
    pub problem_digits: Vec<char>,
}

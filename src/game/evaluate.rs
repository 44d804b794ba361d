//! Positional answer scoring
//!
//! Compares the player's answer to the shown sequence digit by digit. A
//! correct digit in the wrong position earns nothing; scoring is purely
//! positional.

use crate::game::sequence::Sequence;

/// Result of comparing one answer against one sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttemptScore {
    /// Positions where answer and sequence agree
    pub correct_count: usize,
    /// True iff every position of the sequence was answered correctly
    pub is_fully_correct: bool,
}

/// Score an answer against the sequence it was given for
///
/// Comparison runs up to the shorter of the two lengths; the arbiter
/// guarantees equal lengths in normal play.
pub fn score_attempt(answer: &str, sequence: &Sequence) -> AttemptScore {
    let expected = sequence.to_answer_string();
    let correct_count = answer
        .chars()
        .zip(expected.chars())
        .filter(|(got, want)| got == want)
        .count();

    AttemptScore {
        correct_count,
        is_fully_correct: correct_count == sequence.len(),
    }
}

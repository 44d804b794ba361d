//! Random digit sequence generation
//!
//! Sequences are the memoranda of the game: a run of single digits flashed
//! to the player one at a time. Digits are drawn uniformly from 1-9; zero
//! never appears in a sequence.

use rand::Rng;

/// Smallest digit a sequence can contain
pub const DIGIT_MIN: u8 = 1;
/// Largest digit a sequence can contain
pub const DIGIT_MAX: u8 = 9;

/// Immutable digit sequence shown to the player for one attempt
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sequence {
    digits: Vec<u8>,
}

impl Sequence {
    /// Generate `length` uniform random digits in 1..=9
    pub fn generate(length: usize) -> Self {
        Self::generate_with(&mut rand::thread_rng(), length)
    }

    /// Generate with a caller-supplied RNG (seedable in tests)
    pub fn generate_with<R: Rng>(rng: &mut R, length: usize) -> Self {
        let digits = (0..length)
            .map(|_| rng.gen_range(DIGIT_MIN..=DIGIT_MAX))
            .collect();
        Sequence { digits }
    }

    /// Build a sequence from known digits (tests and replays)
    #[allow(dead_code)]
    pub fn from_digits(digits: Vec<u8>) -> Self {
        debug_assert!(
            digits.iter().all(|&d| (DIGIT_MIN..=DIGIT_MAX).contains(&d)),
            "sequence digits must be 1-9"
        );
        Sequence { digits }
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// The sequence as the digit string the player is expected to answer
    pub fn to_answer_string(&self) -> String {
        self.digits.iter().map(|d| (b'0' + d) as char).collect()
    }
}

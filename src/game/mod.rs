//! Game Core: Sequence generation, scoring, and round progression
//!
//! # Components
//! - `sequence.rs`: Random digit sequence generation
//! - `evaluate.rs`: Positional answer scoring
//! - `progression.rs`: Level/attempt state machine
//! - `arbiter.rs`: Voice-to-typed input fallback chain
//! - `ui.rs`: Renderer boundary trait

pub mod arbiter;
pub mod evaluate;
pub mod progression;
pub mod sequence;
pub mod ui;

pub use arbiter::{InputArbiter, InputError, KeyPress, KeySource};
pub use evaluate::{score_attempt, AttemptScore};
pub use progression::{LevelDecision, LevelProgression};
pub use sequence::Sequence;
pub use ui::{MessageStyle, Renderer};

//! Speech Input: Black-box utterance recognition
//!
//! # Components
//! - `recognizer.rs`: Recognizer trait, failure taxonomy, transcript filtering
//! - `command.rs`: External transcriber process with a listen timeout

pub mod command;
pub mod recognizer;

pub use command::CommandRecognizer;
pub use recognizer::{digits_in, RecognitionFailure, UtteranceRecognizer};

//! Utterance recognition boundary
//!
//! The speech engine is a black box: one call calibrates against ambient
//! noise, listens for a single utterance, and returns the transcript or a
//! classified failure. The game never sees audio, only text.

use thiserror::Error;

/// Why a capture attempt produced no transcript
#[derive(Debug, Error)]
pub enum RecognitionFailure {
    /// Audio was captured but could not be turned into text; worth retrying
    #[error("could not understand the audio")]
    Unintelligible,
    /// The recognition backend is unreachable; the voice channel is done
    #[error("speech service unavailable: {0}")]
    ServiceUnavailable(String),
    /// No usable capture device; the voice channel is done
    #[error("no capture device: {0}")]
    NoCaptureDevice(String),
}

impl RecognitionFailure {
    /// Failures that end the voice channel instead of costing one attempt
    pub fn ends_channel(&self) -> bool {
        matches!(
            self,
            RecognitionFailure::ServiceUnavailable(_) | RecognitionFailure::NoCaptureDevice(_)
        )
    }
}

/// One microphone capture turned into text
///
/// Implementations own the capture scope: the device is acquired for the
/// duration of the call and released unconditionally before it returns.
pub trait UtteranceRecognizer {
    fn recognize(&mut self) -> Result<String, RecognitionFailure>;
}

/// Extract up to `max` digit characters from a transcript, in order
///
/// Everything that is not an ASCII digit is dropped, so "4 8 then 1"
/// becomes "481".
pub fn digits_in(transcript: &str, max: usize) -> String {
    transcript
        .chars()
        .filter(char::is_ascii_digit)
        .take(max)
        .collect()
}

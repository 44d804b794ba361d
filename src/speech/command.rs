//! External transcriber process
//!
//! Runs a user-configured command (for example a whisper CLI wrapper) that
//! records one utterance and prints the transcript on stdout. The process
//! is the whole capture scope: microphone access begins when it spawns and
//! ends when it exits or is killed at the listen timeout.

use std::io::Read;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::speech::recognizer::{RecognitionFailure, UtteranceRecognizer};

const EXIT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Recognizer backed by an external transcriber command
pub struct CommandRecognizer {
    program: String,
    args: Vec<String>,
    listen_timeout: Duration,
}

impl CommandRecognizer {
    /// Build from a whitespace-separated command line and a per-utterance
    /// listen timeout
    pub fn new(command_line: &str, listen_timeout: Duration) -> Option<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(CommandRecognizer {
            program,
            args: parts.collect(),
            listen_timeout,
        })
    }

    #[allow(dead_code)]
    pub fn listen_timeout(&self) -> Duration {
        self.listen_timeout
    }
}

impl UtteranceRecognizer for CommandRecognizer {
    fn recognize(&mut self) -> Result<String, RecognitionFailure> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                RecognitionFailure::ServiceUnavailable(format!("{}: {}", self.program, e))
            })?;

        let deadline = Instant::now() + self.listen_timeout;
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) => {
                    if Instant::now() >= deadline {
                        log::warn!(
                            "transcriber exceeded listen timeout of {:?}, killing it",
                            self.listen_timeout
                        );
                        let _ = child.kill();
                        let _ = child.wait();
                        return Err(RecognitionFailure::Unintelligible);
                    }
                    std::thread::sleep(EXIT_POLL_INTERVAL);
                }
                Err(e) => {
                    return Err(RecognitionFailure::ServiceUnavailable(e.to_string()));
                }
            }
        };

        let mut transcript = String::new();
        if let Some(mut stdout) = child.stdout.take() {
            stdout
                .read_to_string(&mut transcript)
                .map_err(|e| RecognitionFailure::ServiceUnavailable(e.to_string()))?;
        }

        if !status.success() {
            log::debug!("transcriber exited with {}", status);
            return Err(RecognitionFailure::Unintelligible);
        }

        let transcript = transcript.trim().to_string();
        if transcript.is_empty() {
            return Err(RecognitionFailure::Unintelligible);
        }

        log::debug!("transcriber heard: {:?}", transcript);
        Ok(transcript)
    }
}

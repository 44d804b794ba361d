//! Session report and persistence
//!
//! At session end the player's profile, points, and recall statistics are
//! folded into a single report and handed to a sink. The shipped sink
//! writes one JSON artifact per player, keyed by name and phone.

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::session::stats::RecallSummary;

/// Score points per completed level (three attempts, one point each)
const POINTS_PER_LEVEL: u32 = 3;

/// Player identity collected at login; opaque pass-through after the form
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    pub age: String,
    pub sex: String,
    pub email: String,
    pub phone: String,
}

impl PlayerProfile {
    /// Placeholder profile for sessions without a login form (tests)
    #[allow(dead_code)]
    pub fn anonymous() -> Self {
        PlayerProfile {
            name: "anonymous".to_string(),
            age: String::new(),
            sex: String::new(),
            email: String::new(),
            phone: String::new(),
        }
    }
}

/// Everything the game knows about a finished session
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    pub profile: PlayerProfile,
    pub final_score: u32,
    pub levels_completed: u32,
    pub recall: RecallSummary,
}

impl SessionReport {
    pub fn new(profile: PlayerProfile, final_score: u32, recall: RecallSummary) -> Self {
        SessionReport {
            profile,
            final_score,
            levels_completed: final_score / POINTS_PER_LEVEL,
            recall,
        }
    }
}

/// Durable destination for finished-session reports
pub trait ReportSink {
    /// Persist the report, returning where it landed
    fn persist(&self, report: &SessionReport) -> Result<PathBuf, Box<dyn Error>>;
}

/// Writes `<name>_<phone>_memory_game_report.json` into a directory
pub struct FileReportSink {
    dir: PathBuf,
}

impl FileReportSink {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        FileReportSink { dir: dir.into() }
    }

    fn file_name(profile: &PlayerProfile) -> String {
        format!(
            "{}_{}_memory_game_report.json",
            sanitize(&profile.name),
            sanitize(&profile.phone)
        )
    }
}

impl ReportSink for FileReportSink {
    fn persist(&self, report: &SessionReport) -> Result<PathBuf, Box<dyn Error>> {
        let path = self.dir.join(Self::file_name(&report.profile));
        let file = File::create(&path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), report)?;
        Ok(path)
    }
}

/// Keep report filenames filesystem-safe regardless of what was typed into
/// the login form
fn sanitize(field: &str) -> String {
    let cleaned: String = field
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    if cleaned.is_empty() {
        "unknown".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::stats::RecallTracker;

    fn profile() -> PlayerProfile {
        PlayerProfile {
            name: "Ada Lovelace".to_string(),
            age: "28".to_string(),
            sex: "female".to_string(),
            email: "ada@example.com".to_string(),
            phone: "0123456789".to_string(),
        }
    }

    #[test]
    fn test_levels_completed_is_score_div_three() {
        for (score, levels) in [(0, 0), (1, 0), (2, 0), (3, 1), (5, 1), (6, 2), (11, 3)] {
            let report =
                SessionReport::new(profile(), score, RecallTracker::new().summary());
            assert_eq!(report.levels_completed, levels, "score {}", score);
        }
    }

    #[test]
    fn test_file_sink_writes_parseable_json() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileReportSink::new(dir.path());
        let report = SessionReport::new(profile(), 6, RecallTracker::new().summary());

        let path = sink.persist(&report).unwrap();

        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "Ada_Lovelace_0123456789_memory_game_report.json"
        );
        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: SessionReport = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_sanitize_handles_empty_and_strange_fields() {
        assert_eq!(sanitize(""), "unknown");
        assert_eq!(sanitize("a/b:c"), "a_b_c");
    }
}

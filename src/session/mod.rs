//! Session Layer: Controller, report persistence, and recall statistics
//!
//! # Components
//! - `controller.rs`: SessionController driving a whole session
//! - `report.rs`: Player profile, session report, and the report sink
//! - `stats.rs`: Recall accuracy and digit-confusion tracking

pub mod controller;
pub mod report;
pub mod stats;

pub use controller::{SessionController, SessionEnd};
pub use report::{FileReportSink, PlayerProfile, ReportSink, SessionReport};
pub use stats::{RecallSummary, RecallTracker};

//! Digit Span - memory training in the terminal
//!
//! A sequence of digits is flashed one at a time; the player repeats it by
//! voice (through an external transcriber command) or by typing. Three
//! attempts per level, two correct to advance, and a JSON report per
//! player at the end.

mod cli;
mod game;
mod session;
mod speech;

use std::error::Error;
use std::time::Duration;

use clap::Parser;

use cli::login;
use cli::{RenderContext, TerminalDisplay, TerminalKeys};
use game::InputArbiter;
use session::{FileReportSink, SessionController, SessionEnd};
use speech::{CommandRecognizer, UtteranceRecognizer};

#[derive(Parser, Debug)]
#[command(name = "Digit Span")]
#[command(about = "Memory training: recall flashed digit sequences by voice or keyboard")]
struct Args {
    /// External transcriber command; records one utterance and prints the
    /// transcript (voice input is disabled when omitted)
    #[arg(long)]
    voice_cmd: Option<String>,

    /// Seconds to wait for one spoken utterance
    #[arg(long, default_value = "8")]
    listen_timeout: u64,

    /// Directory for session reports
    #[arg(short, long, default_value = ".")]
    reports: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.debug { "debug" } else { "warn" }),
    )
    .init();

    println!("🧠 Digit Span v0.1.0");
    println!(
        "Voice: {} | Reports: {}",
        args.voice_cmd.as_deref().unwrap_or("disabled"),
        args.reports
    );
    println!();

    let profile = login::collect_profile()?;

    let voice: Option<Box<dyn UtteranceRecognizer>> = match args.voice_cmd.as_deref() {
        Some(cmd) => {
            match CommandRecognizer::new(cmd, Duration::from_secs(args.listen_timeout)) {
                Some(rec) => Some(Box::new(rec)),
                None => {
                    log::warn!("empty --voice-cmd, voice input disabled");
                    None
                }
            }
        }
        None => None,
    };

    let mut ui = TerminalDisplay::new(RenderContext::default());
    let mut keys = TerminalKeys::new();
    let sink = FileReportSink::new(args.reports.clone());
    let arbiter = InputArbiter::new(voice);

    TerminalKeys::enable_raw_mode()?;
    let outcome = SessionController::new(profile, arbiter, &mut keys, &mut ui, &sink).run();
    TerminalKeys::disable_raw_mode()?;
    ui.shutdown()?;

    match outcome? {
        SessionEnd::Completed(report) => {
            println!("\n🎉 Session Complete!");
            println!(
                "📊 Final Stats: {} points | {} levels completed | {:.0}% digit accuracy",
                report.final_score,
                report.levels_completed,
                report.recall.digit_accuracy * 100.0
            );
            if !report.recall.problem_digits.is_empty() {
                println!("⚠️  Problem digits: {:?}", report.recall.problem_digits);
            }
            println!("Thanks for playing!");
        }
        SessionEnd::Aborted => {
            println!("\nSession aborted. No report written.");
        }
    }

    Ok(())
}

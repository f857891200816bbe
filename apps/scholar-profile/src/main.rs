//! # Scholar Profile - Profile Builder
//!
//! The Profile Builder binary: one interactive interview per run,
//! classifying the user into a life stage and printing a summary.
//!
//! ## Usage
//!
//! ```bash
//! scholar-profile
//! scholar-profile --reference-year 2030
//! scholar-profile --json
//! ```

use clap::Parser;
use scholar_core::{DEFAULT_REFERENCE_YEAR, ScholarError};
use scholar_profile::interview;
use std::io::{BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Scholar Profile - Profile Builder
///
/// Interviews the user for a name, birth year, and hobbies, then prints
/// a life-stage profile summary.
#[derive(Parser, Debug)]
#[command(name = "scholar-profile")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Reference year used to derive the age from the birth year
    #[arg(short = 'y', long, default_value_t = DEFAULT_REFERENCE_YEAR)]
    reference_year: i64,

    /// Emit the finished profile as JSON instead of the text summary
    #[arg(long)]
    json: bool,
}

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Initialize tracing — SCHOLAR_LOG_FORMAT=json enables machine-parseable output.
    // The subscriber writes to stderr; stdout belongs to the interview.
    let log_format = std::env::var("SCHOLAR_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "scholar_profile=info".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    let cli = Cli::parse();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    if let Err(e) = run(&cli, &mut stdin.lock(), &mut stdout.lock()) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Run one interview and print the result in the selected format.
fn run<R: BufRead, W: Write>(cli: &Cli, input: &mut R, output: &mut W) -> Result<(), ScholarError> {
    let profile = interview::run(cli.reference_year, input, output)?;
    tracing::debug!(stage = %profile.stage, hobbies = profile.hobbies.len(), "interview complete");

    if cli.json {
        writeln!(
            output,
            "{}",
            serde_json::to_string_pretty(&profile).unwrap_or_default()
        )?;
    } else {
        interview::write_summary(&profile, output)?;
    }

    Ok(())
}

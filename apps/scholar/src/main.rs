//! # Scholar - Student Grade Analyzer
//!
//! The main binary for the Scholar grade analyzer.
//!
//! An interactive, single-session console: students and grades live in
//! memory for one run and are gone at exit.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │              apps/scholar (THE BINARY)        │
//! │                                               │
//! │   ┌─────────────┐        ┌────────────────┐   │
//! │   │   CLI       │        │  Menu Loop     │   │
//! │   │  (clap)     │        │  (stdin/stdout)│   │
//! │   └──────┬──────┘        └───────┬────────┘   │
//! │          └───────────┬──────────┘             │
//! │                      ▼                        │
//! │              ┌───────────────┐                │
//! │              │ scholar-core  │                │
//! │              │  (THE LOGIC)  │                │
//! │              └───────────────┘                │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! scholar
//! scholar --quiet
//! ```

use clap::Parser;
use scholar::menu;
use scholar_core::Roster;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Scholar - Student Grade Analyzer
///
/// An interactive console for managing students and their grades for one
/// session. Nothing is persisted between runs.
#[derive(Parser, Debug)]
#[command(name = "scholar")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Suppress banner output
    #[arg(short, long)]
    quiet: bool,
}

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Initialize tracing — SCHOLAR_LOG_FORMAT=json enables machine-parseable output.
    // The subscriber writes to stderr; stdout belongs to the interactive session.
    let log_format = std::env::var("SCHOLAR_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "scholar=info".into());

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

    // Parse CLI arguments
    let cli = Cli::parse();

    // Display startup banner
    if !cli.quiet {
        print_banner();
    }

    // The roster is owned here and passed into the loop; it lives exactly
    // as long as the session.
    let mut roster = Roster::new();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    if let Err(e) = menu::run(&mut roster, &mut stdin.lock(), &mut stdout.lock()) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the Scholar startup banner.
fn print_banner() {
    println!("Scholar Grade Analyzer v{}", env!("CARGO_PKG_VERSION"));
}

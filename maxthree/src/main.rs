//! MaxThree
//!
//! Prints the largest of the three integers in the built-in sample dataset.

use anyhow::Result;
use maxthree::{Report, SAMPLE, Triple};
use std::io;
use std::process::ExitCode;
use tracing::{debug, error};

fn main() -> ExitCode {
    let log_level = std::env::var("MAXTHREE_LOG").unwrap_or_else(|_| "warn".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("maxthree failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let triple = Triple::from(SAMPLE);
    debug!("Comparing {:?}, winner: {:?}", triple, triple.winner());

    Report::new(triple).write_to(io::stdout().lock())?;
    Ok(())
}

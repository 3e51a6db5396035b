//! Logging setup
//!
//! `RUST_LOG` overrides the default filter. Logs go to stderr, or to a file
//! when one is given. The TUI owns the terminal, so it logs to a file or not
//! at all.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Where log output should go
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    Discard,
}

fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("connections_plus=debug,info")
        } else {
            EnvFilter::new("connections_plus=info,warn")
        }
    })
}

/// Install the global subscriber
///
/// # Errors
/// Returns an error if the log file cannot be created.
pub fn init(target: LogTarget<'_>, verbose: bool) -> Result<()> {
    let fmt = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact();

    match target {
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(default_filter(verbose))
            .with(fmt.with_writer(std::io::stderr))
            .init(),
        LogTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(default_filter(verbose))
                .with(fmt.with_ansi(false).with_writer(Mutex::new(file)))
                .init();
        }
        LogTarget::Discard => {}
    }

    Ok(())
}

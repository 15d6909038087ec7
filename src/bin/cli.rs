//! wordladder CLI - word ladder graphs.
//!
//! Usage:
//!   wordladder generate words.txt        # Build snapshots (one per length)
//!   wordladder serve                     # Serve the HTTP API
//!   wordladder path <start> <end>        # Shortest ladder
//!   wordladder longpath <start> <end>    # Alternate ladder
//!   wordladder neighbors <word>          # Words one letter away
//!   wordladder reachable <word>          # Connected component
//!   wordladder stats <length>            # Graph statistics
//!   wordladder words <length>            # Word listing

use clap::Parser;
use wordladder::cli::{self, Cli};
use wordladder::config::LadderConfig;

fn main() {
    let cli = Cli::parse();

    // Tracing needs the config (log format) before anything can log, so a
    // bad config is only reported once the subscriber is installed.
    let loaded = LadderConfig::try_load(&cli.config);
    let log_json = loaded.as_ref().map(|c| c.log_json).unwrap_or(false);
    init_tracing(log_json);

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "using default config");
            LadderConfig::default()
        }
    };

    if let Err(e) = cli::run(cli, config) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so query output on stdout stays clean JSON.
fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

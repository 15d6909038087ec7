//! CLI module for wordladder.
//!
//! Commands:
//! - Offline: generate
//! - Service: serve
//! - Query: path, longpath, neighbors, reachable, stats, words

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::{LadderConfig, DEFAULT_CONFIG_FILE};
use crate::graph::{self, word_length, GraphRegistry};
use crate::query::{self, QueryContext};
use crate::server::{self, ServerState};
use crate::solve::SearchOrder;

#[derive(Parser, Debug)]
#[command(name = "wordladder")]
#[command(about = "Word ladder graphs: build snapshots, serve and query them")]
#[command(version)]
pub struct Cli {
    /// Config file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Snapshot directory (overrides `snapshot_dir` in the config)
    #[arg(short, long, global = true)]
    pub snapshots: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    // ─── Offline ──────────────────────────────────────────────────
    /// Build snapshots from a newline separated dictionary
    Generate {
        /// Dictionary file, one word per line
        words_file: PathBuf,

        /// Output directory (default: the snapshot directory)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    // ─── Service ──────────────────────────────────────────────────
    /// Load all snapshots and serve the HTTP API
    Serve {
        #[arg(long)]
        host: Option<std::net::IpAddr>,

        #[arg(short, long)]
        port: Option<u16>,
    },

    // ─── Query ────────────────────────────────────────────────────
    /// Shortest ladder between two words
    Path { start: String, end: String },

    /// Alternate (depth-first) ladder between two words
    Longpath { start: String, end: String },

    /// Words one letter away from a word
    Neighbors { word: String },

    /// Every word reachable from a word
    Reachable { word: String },

    /// Graph statistics for a word length
    Stats { length: String },

    /// All words of a length
    Words { length: String },
}

impl Cli {
    /// Resolve the effective config: file values plus command-line overrides.
    pub fn resolve_config(&self, mut config: LadderConfig) -> LadderConfig {
        if let Some(dir) = &self.snapshots {
            config.snapshot_dir = dir.clone();
        }
        if let Commands::Serve { host, port } = &self.command {
            if let Some(host) = host {
                config.host = *host;
            }
            if let Some(port) = port {
                config.port = *port;
            }
        }
        config
    }
}

pub fn run(cli: Cli, config: LadderConfig) -> Result<()> {
    let config = cli.resolve_config(config);

    match cli.command {
        Commands::Generate { words_file, out } => {
            let out_dir = out.unwrap_or_else(|| config.snapshot_dir.clone());
            let generated = graph::generate_snapshots(
                &words_file,
                &out_dir,
                config.min_length,
                config.max_length,
            )
            .with_context(|| format!("generating snapshots from {}", words_file.display()))?;

            println!("✓ Snapshots written to {}", out_dir.display());
            for snapshot in &generated {
                println!(
                    "  length {:>2}: {:>7} words, {:>9} bytes",
                    snapshot.length, snapshot.words, snapshot.bytes
                );
            }
        }

        Commands::Serve { .. } => {
            let registry =
                GraphRegistry::load_all(&config.snapshot_dir, config.min_length, config.max_length);
            let state = ServerState::new(registry, config.min_length, config.max_length);
            let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
            runtime.block_on(server::serve(state, config.socket_addr()))?;
        }

        Commands::Path { start, end } => {
            let registry = load_for_word(&config, &start);
            let ctx = QueryContext::new(&registry, config.min_length, config.max_length);
            print_result(query::ladder_path(&ctx, &start, &end, SearchOrder::BreadthFirst))?;
        }

        Commands::Longpath { start, end } => {
            let registry = load_for_word(&config, &start);
            let ctx = QueryContext::new(&registry, config.min_length, config.max_length);
            print_result(query::ladder_path(&ctx, &start, &end, SearchOrder::DepthFirst))?;
        }

        Commands::Neighbors { word } => {
            let registry = load_for_word(&config, &word);
            let ctx = QueryContext::new(&registry, config.min_length, config.max_length);
            print_result(query::ladder_neighbors(&ctx, &word))?;
        }

        Commands::Reachable { word } => {
            let registry = load_for_word(&config, &word);
            let ctx = QueryContext::new(&registry, config.min_length, config.max_length);
            print_result(query::ladder_reachable(&ctx, &word))?;
        }

        Commands::Stats { length } => {
            let registry = load_for_length(&config, &length);
            let ctx = QueryContext::new(&registry, config.min_length, config.max_length);
            print_result(query::ladder_stats(&ctx, &length))?;
        }

        Commands::Words { length } => {
            let registry = load_for_length(&config, &length);
            let ctx = QueryContext::new(&registry, config.min_length, config.max_length);
            print_result(query::ladder_words(&ctx, &length))?;
        }
    }

    Ok(())
}

/// One-shot queries only need the snapshot for a single length.
fn load_single(dir: &Path, length: usize) -> GraphRegistry {
    info!(length, dir = %dir.display(), "loading snapshot");
    GraphRegistry::load_all(dir, length, length)
}

fn load_for_word(config: &LadderConfig, word: &str) -> GraphRegistry {
    load_single(&config.snapshot_dir, word_length(word))
}

fn load_for_length(config: &LadderConfig, raw: &str) -> GraphRegistry {
    match raw.trim().parse::<usize>() {
        Ok(length) if config.supports_length(length) => load_single(&config.snapshot_dir, length),
        _ => GraphRegistry::new(),
    }
}

fn print_result<T: Serialize>(result: Result<T, query::QueryError>) -> Result<()> {
    let value = result?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_command() {
        let cli = Cli::parse_from(["wordladder", "path", "cat", "dog"]);
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_FILE));
        assert!(matches!(
            cli.command,
            Commands::Path { ref start, ref end } if start == "cat" && end == "dog"
        ));
    }

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::parse_from([
            "wordladder",
            "--snapshots",
            "/data",
            "serve",
            "--port",
            "9000",
        ]);
        let config = cli.resolve_config(LadderConfig::default());
        assert_eq!(config.port, 9000);
        assert_eq!(config.snapshot_dir, PathBuf::from("/data"));
        assert_eq!(config.host, LadderConfig::default().host);
    }

    #[test]
    fn test_generate_then_query() {
        let dir = tempfile::tempdir().unwrap();
        let dict = dir.path().join("words.txt");
        std::fs::write(&dict, "cat\nbat\nbag\nbog\ndog\n").unwrap();
        let snapshots = dir.path().join("snapshots");
        let snapshots_arg = snapshots.to_str().unwrap();

        let cli = Cli::parse_from([
            "wordladder",
            "--snapshots",
            snapshots_arg,
            "generate",
            dict.to_str().unwrap(),
        ]);
        run(cli, LadderConfig::default()).unwrap();
        assert!(snapshots.join("wordladder3.bin").exists());

        let registry = load_for_word(
            &Cli::parse_from(["wordladder", "--snapshots", snapshots_arg, "words", "3"])
                .resolve_config(LadderConfig::default()),
            "cat",
        );
        assert_eq!(registry.get(3).len(), 5);

        let cli = Cli::parse_from(["wordladder", "--snapshots", snapshots_arg, "path", "cat", "dog"]);
        assert!(run(cli, LadderConfig::default()).is_ok());
    }

    #[test]
    fn test_query_error_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::parse_from([
            "wordladder",
            "--snapshots",
            dir.path().to_str().unwrap(),
            "neighbors",
            "cat",
        ]);
        let err = run(cli, LadderConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "Starting word <cat> not found in dictionary.");
    }

    #[test]
    fn test_load_for_length_rejects_bad_input() {
        let config = LadderConfig::default();
        assert_eq!(load_for_length(&config, "abc").lengths().count(), 0);
        assert_eq!(load_for_length(&config, "42").lengths().count(), 0);
    }
}

//! # wordladder
//!
//! Word ladder graphs: which words of a dictionary can be turned into one
//! another by changing one letter at a time.
//!
//! ## Key Features
//!
//! - **Precomputed**: adjacency for each word length is built offline and
//!   stored as a compact snapshot
//! - **Read-only at query time**: snapshots are loaded once into a
//!   [`GraphRegistry`] and shared across requests
//! - **Queries**: shortest and alternate ladders, neighbors, reachability,
//!   word listings and graph statistics
//! - **Surfaces**: an HTTP API and a CLI over the same query functions
//!
//! ## Quick Start
//!
//! ```rust
//! use wordladder::{build, shortest_path};
//!
//! let graph = build(&["cat", "bat", "bag", "bog", "dog"]);
//! let path = shortest_path("cat", "dog", &graph).unwrap();
//! assert_eq!(path, vec!["cat", "bat", "bag", "bog", "dog"]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod query;
pub mod server;
pub mod solve;

// Re-exports for convenience
pub use error::{LadderError, Result};

// Graph re-exports
pub use graph::{build, decode, encode, one_edit_away, GraphRegistry, WordGraph};
pub use solve::{aggregate, alt_path, reachable, shortest_path, GraphStats};

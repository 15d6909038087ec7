//! Traversal and statistics over a loaded word graph.
//!
//! Everything here is synchronous, read-only and runs entirely in memory.

pub mod path;
pub mod reachable;
pub mod stats;

pub use path::{alt_path, find_path, shortest_path, SearchOrder};
pub use reachable::reachable;
pub use stats::{aggregate, GraphStats, MostConnected, Singletons};

//! Word graph module: the adjacency data behind every query.
//!
//! Provides the graph data model, the offline builder, the snapshot codec
//! and the per-length registry used at query time.

pub mod builder;
pub mod codec;
pub mod registry;
pub mod types;

pub use builder::{build, generate_snapshots, one_edit_away, GeneratedSnapshot};
pub use codec::{decode, encode};
pub use registry::GraphRegistry;
pub use types::{word_length, WordGraph};

//! Registry of loaded word graphs, one per word length.
//!
//! The registry is built once at startup and never mutated afterwards, so
//! request handlers share it through an `Arc` without locking.

use std::collections::BTreeMap;
use std::path::Path;
use tracing::{info, warn};

use super::codec;
use super::types::WordGraph;

#[derive(Debug, Default)]
pub struct GraphRegistry {
    graphs: BTreeMap<usize, WordGraph>,
    empty: WordGraph,
}

impl GraphRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the snapshot for every length in `[min_length, max_length]` from
    /// `dir`.
    ///
    /// A length whose snapshot is missing or corrupt gets an empty graph;
    /// the failure is logged and does not affect the other lengths.
    pub fn load_all(dir: &Path, min_length: usize, max_length: usize) -> Self {
        let mut registry = Self::new();

        for length in min_length..=max_length {
            let path = codec::snapshot_path(dir, length);
            let graph = match codec::load(&path) {
                Ok(graph) => {
                    info!(length, words = graph.len(), "loaded word graph");
                    graph
                }
                Err(e) => {
                    warn!(length, error = %e, "no word graph for length");
                    WordGraph::new()
                }
            };
            registry.insert(length, graph);
        }

        registry
    }

    pub fn insert(&mut self, length: usize, graph: WordGraph) {
        self.graphs.insert(length, graph);
    }

    /// The graph for `length`, or an empty graph if none was loaded.
    pub fn get(&self, length: usize) -> &WordGraph {
        self.graphs.get(&length).unwrap_or(&self.empty)
    }

    /// Lengths that were installed, including those that loaded empty.
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.graphs.keys().copied()
    }

    /// Total number of words across all lengths.
    pub fn word_count(&self) -> usize {
        self.graphs.values().map(WordGraph::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::build;

    #[test]
    fn test_get_unknown_length_is_empty() {
        let registry = GraphRegistry::new();
        assert!(registry.get(3).is_empty());
        assert!(registry.get(0).is_empty());
        assert_eq!(registry.lengths().count(), 0);
    }

    #[test]
    fn test_insert_and_get() {
        let mut registry = GraphRegistry::new();
        registry.insert(3, build(&["cat", "bat"]));

        assert_eq!(registry.get(3).len(), 2);
        assert!(registry.get(4).is_empty());
        assert_eq!(registry.word_count(), 2);
    }

    #[test]
    fn test_load_all_isolates_failures() {
        let dir = tempfile::tempdir().unwrap();
        let three = build(&["cat", "bat", "dog"]);
        codec::save(&three, &codec::snapshot_path(dir.path(), 3)).unwrap();
        std::fs::write(dir.path().join("wordladder4.bin"), [0xffu8; 9]).unwrap();

        let registry = GraphRegistry::load_all(dir.path(), 1, 5);

        assert_eq!(registry.lengths().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        assert_eq!(registry.get(3).len(), 3);
        assert!(registry.get(3).contains("dog"));
        assert!(registry.get(4).is_empty());
        assert!(registry.get(1).is_empty());
        assert!(registry.get(8).is_empty());
    }

    #[test]
    fn test_independent_registries() {
        let mut a = GraphRegistry::new();
        let b = GraphRegistry::new();
        a.insert(3, build(&["cat"]));

        assert!(a.get(3).contains("cat"));
        assert!(!b.get(3).contains("cat"));
    }
}

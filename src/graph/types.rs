//! Core types for the word graph.
//!
//! A [`WordGraph`] maps every word of one length class to its adjacency
//! sequence. The sequence always starts with the word itself, followed by
//! its true neighbors (words one substitution away). The self entry is kept
//! because it is what the snapshots contain; use [`WordGraph::neighbors`]
//! and [`WordGraph::neighbor_count`] to see only true neighbors.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of characters in a word. All lengths in this crate are in chars.
pub fn word_length(word: &str) -> usize {
    word.chars().count()
}

/// Adjacency mapping for words of a single length.
///
/// Backed by a `BTreeMap` so key iteration is lexicographic and every
/// consumer (stats tie-breaks, word listings) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordGraph {
    adjacency: BTreeMap<String, Vec<String>>,
}

impl WordGraph {
    /// Create a new empty word graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a word with a raw adjacency sequence (self entry included).
    pub fn insert(&mut self, word: String, sequence: Vec<String>) {
        self.adjacency.insert(word, sequence);
    }

    pub fn contains(&self, word: &str) -> bool {
        self.adjacency.contains_key(word)
    }

    /// Full adjacency sequence, self entry first.
    pub fn sequence(&self, word: &str) -> Option<&[String]> {
        self.adjacency.get(word).map(|v| v.as_slice())
    }

    /// True neighbors of `word`; empty for unknown words.
    pub fn neighbors(&self, word: &str) -> &[String] {
        match self.adjacency.get(word) {
            Some(seq) if !seq.is_empty() => &seq[1..],
            _ => &[],
        }
    }

    /// True-neighbor count: sequence length minus the self entry.
    pub fn neighbor_count(&self, word: &str) -> usize {
        self.neighbors(word).len()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_empty_graph() {
        let graph = WordGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.len(), 0);
        assert!(graph.neighbors("cat").is_empty());
        assert_eq!(graph.sequence("cat"), None);
    }

    #[test]
    fn test_neighbors_skip_self_entry() {
        let mut graph = WordGraph::new();
        graph.insert("cat".into(), seq(&["cat", "bat", "can"]));
        graph.insert("dog".into(), seq(&["dog"]));

        assert_eq!(graph.sequence("cat").unwrap()[0], "cat");
        assert_eq!(graph.neighbors("cat"), &seq(&["bat", "can"])[..]);
        assert_eq!(graph.neighbor_count("cat"), 2);
        assert_eq!(graph.neighbor_count("dog"), 0);
    }

    #[test]
    fn test_words_are_sorted() {
        let mut graph = WordGraph::new();
        for w in ["dog", "ant", "cat"] {
            graph.insert(w.into(), seq(&[w]));
        }
        let words: Vec<&str> = graph.words().collect();
        assert_eq!(words, vec!["ant", "cat", "dog"]);
    }

    #[test]
    fn test_word_length_counts_chars() {
        assert_eq!(word_length("café"), 4);
        assert_eq!(word_length(""), 0);
    }
}

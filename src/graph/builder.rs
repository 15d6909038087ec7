//! Graph builder: turns a dictionary into word graphs and snapshots.
//!
//! Building is the offline half of the system: a dictionary file is split
//! by word length, each length class gets its adjacency mapping computed,
//! and the result is written as one snapshot per length. The pairwise scan
//! is O(n² · L), so it runs on the rayon pool.

use rayon::prelude::*;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use super::codec;
use super::types::{word_length, WordGraph};
use crate::error::{LadderError, Result};

/// True iff `a` and `b` differ in exactly one character position.
///
/// Stops at the second difference. Identical words are not adjacent, and
/// words of different lengths never are.
pub fn one_edit_away(a: &str, b: &str) -> bool {
    let mut edits = 0;
    let mut a_chars = a.chars();
    let mut b_chars = b.chars();

    loop {
        match (a_chars.next(), b_chars.next()) {
            (Some(x), Some(y)) => {
                if x != y {
                    edits += 1;
                    if edits >= 2 {
                        return false;
                    }
                }
            }
            (None, None) => return edits == 1,
            _ => return false,
        }
    }
}

/// Build the adjacency mapping for a list of equal-length words.
///
/// Every word's sequence starts with the word itself; true neighbors follow
/// in source-list order. Repeated input words are kept once. Mixed lengths
/// are not rejected: such words are simply never adjacent.
pub fn build<S: AsRef<str>>(words: &[S]) -> WordGraph {
    let mut seen = HashSet::with_capacity(words.len());
    let unique: Vec<&str> = words
        .iter()
        .map(|w| w.as_ref())
        .filter(|w| seen.insert(*w))
        .collect();

    let sequences: Vec<(String, Vec<String>)> = unique
        .par_iter()
        .map(|&w1| {
            let mut seq = vec![w1.to_string()];
            seq.extend(
                unique
                    .iter()
                    .filter(|&&w2| w1 != w2 && one_edit_away(w1, w2))
                    .map(|w2| w2.to_string()),
            );
            (w1.to_string(), seq)
        })
        .collect();

    let mut graph = WordGraph::new();
    for (word, seq) in sequences {
        graph.insert(word, seq);
    }

    debug!(words = graph.len(), "built word graph");
    graph
}

/// Read a newline separated dictionary. Words are trimmed and lowercased;
/// blank lines are dropped.
pub fn load_word_list(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| LadderError::io(path, e))?;
    Ok(parse_word_list(&content))
}

pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Split a mixed dictionary into per-length lists, keeping source order and
/// dropping words outside `[min_length, max_length]`.
pub fn group_by_length(
    words: Vec<String>,
    min_length: usize,
    max_length: usize,
) -> BTreeMap<usize, Vec<String>> {
    let mut groups: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    for word in words {
        let len = word_length(&word);
        if (min_length..=max_length).contains(&len) {
            groups.entry(len).or_default().push(word);
        }
    }
    groups
}

/// Outcome of generating one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSnapshot {
    pub length: usize,
    pub words: usize,
    pub bytes: usize,
}

/// Build and write snapshots for every word length found in `words_file`.
pub fn generate_snapshots(
    words_file: &Path,
    out_dir: &Path,
    min_length: usize,
    max_length: usize,
) -> Result<Vec<GeneratedSnapshot>> {
    let words = load_word_list(words_file)?;
    info!(file = %words_file.display(), words = words.len(), "loaded dictionary");

    fs::create_dir_all(out_dir).map_err(|e| LadderError::io(out_dir, e))?;

    let mut generated = Vec::new();
    for (length, group) in group_by_length(words, min_length, max_length) {
        let graph = build(&group);
        let path = codec::snapshot_path(out_dir, length);
        let bytes = codec::save(&graph, &path)?;

        info!(
            length,
            words = graph.len(),
            bytes,
            path = %path.display(),
            "wrote snapshot"
        );
        generated.push(GeneratedSnapshot {
            length,
            words: graph.len(),
            bytes,
        });
    }

    Ok(generated)
}

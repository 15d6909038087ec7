//! Path search between two words.
//!
//! Both searches keep a frontier of whole candidate paths and one visited
//! set for the entire run. A word is marked visited when a path ending in it
//! is taken off the frontier, not when the path is queued, so a word can sit
//! on the frontier several times. The only
//! difference between the two searches is which end of the frontier is
//! taken:
//!
//! - [`shortest_path`] takes from the front (breadth-first) and returns a
//!   path with the fewest steps.
//! - [`alt_path`] takes from the back (depth-first order). Because the
//!   visited set is shared across branches this is *not* a longest-path
//!   search; it returns whichever path the depth-first order reaches first.

use std::collections::{HashSet, VecDeque};
use tracing::debug;

use crate::graph::WordGraph;

/// Which end of the frontier the next candidate is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOrder {
    BreadthFirst,
    DepthFirst,
}

/// Fewest-step path from `start` to `end`, or `None` if unreachable.
pub fn shortest_path(start: &str, end: &str, graph: &WordGraph) -> Option<Vec<String>> {
    find_path(start, end, graph, SearchOrder::BreadthFirst)
}

/// Some path from `start` to `end` found in depth-first order.
pub fn alt_path(start: &str, end: &str, graph: &WordGraph) -> Option<Vec<String>> {
    find_path(start, end, graph, SearchOrder::DepthFirst)
}

pub fn find_path(
    start: &str,
    end: &str,
    graph: &WordGraph,
    order: SearchOrder,
) -> Option<Vec<String>> {
    let mut frontier: VecDeque<Vec<&str>> = VecDeque::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut expanded = 0usize;

    frontier.push_back(vec![start]);

    loop {
        let path = match order {
            SearchOrder::BreadthFirst => frontier.pop_front(),
            SearchOrder::DepthFirst => frontier.pop_back(),
        }?;

        // Paths are never empty: the seed holds `start` and extensions only grow.
        let word = *path.last()?;
        // Breadth-first reaches a word along a shortest path the first time,
        // so later copies only grow the frontier. Depth-first still expands
        // them, which decides the branch the alternate path takes.
        if !visited.insert(word) && order == SearchOrder::BreadthFirst {
            continue;
        }
        expanded += 1;

        if word == end {
            debug!(?order, expanded, steps = path.len() - 1, "path found");
            return Some(path.into_iter().map(String::from).collect());
        }

        for next in graph.neighbors(word) {
            if !visited.contains(next.as_str()) {
                let mut extended = Vec::with_capacity(path.len() + 1);
                extended.extend_from_slice(&path);
                extended.push(next.as_str());
                frontier.push_back(extended);
            }
        }
    }
}

//! Connected component of a word.

use std::collections::{BTreeSet, HashSet, VecDeque};
use tracing::debug;

use crate::graph::WordGraph;

/// Every word reachable from `start` through true-neighbor edges, `start`
/// included.
///
/// Breadth-first, marking words visited as they leave the frontier, the
/// same way [`shortest_path`](super::path::shortest_path) does but without a
/// target. A start word missing from the graph yields just `{start}`.
pub fn reachable(start: &str, graph: &WordGraph) -> BTreeSet<String> {
    let mut frontier: VecDeque<&str> = VecDeque::new();
    let mut visited: HashSet<&str> = HashSet::new();

    frontier.push_back(start);

    while let Some(word) = frontier.pop_front() {
        if !visited.insert(word) {
            continue;
        }
        for next in graph.neighbors(word) {
            if !visited.contains(next.as_str()) {
                frontier.push_back(next);
            }
        }
    }

    debug!(start, reachable = visited.len(), "reachability computed");
    visited.into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build;

    #[test]
    fn test_reachable_component() {
        let graph = build(&["cat", "bat", "bag", "dog", "dot", "cot"]);

        let from_cat = reachable("cat", &graph);
        let expected: BTreeSet<String> = ["cat", "bat", "bag", "cot", "dot", "dog"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        assert_eq!(from_cat, expected);
    }

    #[test]
    fn test_reachable_includes_start() {
        let graph = build(&["cat", "dog"]);
        let from_dog = reachable("dog", &graph);
        assert_eq!(from_dog.len(), 1);
        assert!(from_dog.contains("dog"));
    }

    #[test]
    fn test_reachable_separate_components() {
        let graph = build(&["cat", "bat", "dog", "dig"]);
        let from_cat = reachable("cat", &graph);
        assert!(from_cat.contains("bat"));
        assert!(!from_cat.contains("dog"));
        assert!(!from_cat.contains("dig"));
    }

    #[test]
    fn test_reachable_is_stable() {
        let graph = build(&["cold", "cord", "card", "ward", "warm", "word", "worm"]);
        assert_eq!(reachable("cold", &graph), reachable("cold", &graph));
        assert_eq!(reachable("cold", &graph), reachable("warm", &graph));
    }
}

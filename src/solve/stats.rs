//! Structural statistics over a word graph.

use serde::{Deserialize, Serialize};

use crate::graph::WordGraph;

/// Summary of one word graph. Counts are of true neighbors only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub nodes: usize,
    /// Sum of true-neighbor counts; each adjacency contributes twice.
    pub edges: usize,
    /// `None` when no word has a neighbor.
    pub most_connected: Option<MostConnected>,
    pub singletons: Singletons,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MostConnected {
    pub word: String,
    #[serde(rename = "number_of_connections")]
    pub connections: usize,
}

/// Words with no true neighbor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Singletons {
    pub words: Vec<String>,
    pub count: usize,
}

/// Compute [`GraphStats`] in one pass over the graph.
///
/// Words are visited in lexicographic order and only a strictly larger
/// count replaces the current maximum, so ties go to the smallest word.
pub fn aggregate(graph: &WordGraph) -> GraphStats {
    let mut stats = GraphStats::default();

    for word in graph.words() {
        let connections = graph.neighbor_count(word);
        stats.nodes += 1;
        stats.edges += connections;

        let current = stats.most_connected.as_ref().map_or(0, |m| m.connections);
        if connections > current {
            stats.most_connected = Some(MostConnected {
                word: word.to_string(),
                connections,
            });
        }

        if connections == 0 {
            stats.singletons.words.push(word.to_string());
        }
    }

    stats.singletons.count = stats.singletons.words.len();
    stats
}

//! Query API: the entry points the HTTP server and the CLI share.
//!
//! Each function normalises its input (lowercasing words, parsing lengths),
//! validates it against the supported length range, picks the right graph
//! from the registry and hands off to the solvers. Responses are plain
//! serde types.

pub mod types;

pub use types::{
    ErrorResponse, NeighborsResponse, PathResponse, QueryError, ReachableResponse, WordsResponse,
};

use std::ops::RangeInclusive;
use tracing::debug;

use crate::graph::{word_length, GraphRegistry, WordGraph};
use crate::solve::{self, GraphStats, SearchOrder};

/// Registry plus the length range queries are allowed to ask for.
pub struct QueryContext<'a> {
    pub registry: &'a GraphRegistry,
    pub lengths: RangeInclusive<usize>,
}

impl<'a> QueryContext<'a> {
    pub fn new(registry: &'a GraphRegistry, min_length: usize, max_length: usize) -> Self {
        Self {
            registry,
            lengths: min_length..=max_length,
        }
    }

    fn graph_for_length(&self, length: usize) -> Result<&'a WordGraph, QueryError> {
        if self.lengths.contains(&length) {
            Ok(self.registry.get(length))
        } else {
            Err(QueryError::LengthOutOfRange {
                min: *self.lengths.start(),
                max: *self.lengths.end(),
            })
        }
    }
}

fn parse_length(raw: &str) -> Result<usize, QueryError> {
    raw.trim().parse().map_err(|_| QueryError::MalformedLength)
}

fn require<'g>(graph: &'g WordGraph, word: &str) -> Result<&'g WordGraph, QueryError> {
    if graph.contains(word) {
        Ok(graph)
    } else {
        Err(QueryError::NotFound(word.to_string()))
    }
}

/// Path between two words; `order` selects shortest or alternate search.
///
/// Lengths outside the supported range fall through to "not found", since
/// no graph holds such words.
pub fn ladder_path(
    ctx: &QueryContext<'_>,
    start: &str,
    end: &str,
    order: SearchOrder,
) -> Result<PathResponse, QueryError> {
    let start = start.to_lowercase();
    let end = end.to_lowercase();
    let length = word_length(&start);

    if word_length(&end) != length {
        return Err(QueryError::UnequalLengths);
    }

    let graph = ctx.registry.get(length);
    require(graph, &start)?;
    require(graph, &end)?;

    debug!(%start, %end, ?order, "path query");
    let path = solve::find_path(&start, &end, graph, order);
    Ok(PathResponse::new(path))
}

/// True neighbors of a word.
pub fn ladder_neighbors(ctx: &QueryContext<'_>, word: &str) -> Result<NeighborsResponse, QueryError> {
    let word = word.to_lowercase();
    let graph = require(ctx.graph_for_length(word_length(&word))?, &word)?;

    let neighbors = graph.neighbors(&word).to_vec();
    Ok(NeighborsResponse {
        length: neighbors.len(),
        neighbors,
    })
}

/// Connected component of a word, sorted.
pub fn ladder_reachable(ctx: &QueryContext<'_>, word: &str) -> Result<ReachableResponse, QueryError> {
    let word = word.to_lowercase();
    let graph = require(ctx.graph_for_length(word_length(&word))?, &word)?;

    let reachables: Vec<String> = solve::reachable(&word, graph).into_iter().collect();
    let percent_of_graph = reachables.len() as f32 / graph.len() as f32 * 100.0;

    Ok(ReachableResponse {
        count: reachables.len(),
        reachables,
        percent_of_graph,
    })
}

/// Statistics for the graph of `length`-letter words. `length` is raw input.
pub fn ladder_stats(ctx: &QueryContext<'_>, length: &str) -> Result<GraphStats, QueryError> {
    let graph = ctx.graph_for_length(parse_length(length)?)?;
    Ok(solve::aggregate(graph))
}

/// All words of `length` letters, sorted. `length` is raw input.
pub fn ladder_words(ctx: &QueryContext<'_>, length: &str) -> Result<WordsResponse, QueryError> {
    let graph = ctx.graph_for_length(parse_length(length)?)?;
    let words: Vec<String> = graph.words().map(String::from).collect();
    Ok(WordsResponse {
        count: words.len(),
        words,
    })
}

//! Response and error types for word ladder queries.
//!
//! Field names are the JSON contract of the HTTP API and the CLI output.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResponse {
    /// Number of words in the path, 0 when there is none.
    pub length: usize,
    pub path: Option<Vec<String>>,
}

impl PathResponse {
    pub fn new(path: Option<Vec<String>>) -> Self {
        Self {
            length: path.as_ref().map_or(0, Vec::len),
            path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeighborsResponse {
    pub length: usize,
    pub neighbors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReachableResponse {
    pub count: usize,
    pub reachables: Vec<String>,
    /// Share of the word's length class that is reachable, in percent.
    pub percent_of_graph: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordsResponse {
    pub count: usize,
    pub words: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// Reasons a query is rejected before reaching the graph algorithms.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("Starting word <{0}> not found in dictionary.")]
    NotFound(String),

    #[error("Please provide two equal length words.")]
    UnequalLengths,

    #[error("Please provide a word of length >= {min} and <= {max}.")]
    LengthOutOfRange { min: usize, max: usize },

    #[error("Please provide an integer word length.")]
    MalformedLength,
}

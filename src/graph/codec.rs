//! Snapshot codec for word graphs.
//!
//! A snapshot is the bincode encoding of the word → sequence map. There is
//! no header, version or checksum: file identity is the word length alone,
//! and a corrupt file surfaces as [`LadderError::Decode`].

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::types::WordGraph;
use crate::error::{LadderError, Result};

/// File name of the snapshot holding words of `length` characters.
pub fn snapshot_file_name(length: usize) -> String {
    format!("wordladder{}.bin", length)
}

/// Snapshot location for `length` inside `dir`.
pub fn snapshot_path(dir: &Path, length: usize) -> PathBuf {
    dir.join(snapshot_file_name(length))
}

pub fn encode(graph: &WordGraph) -> Result<Vec<u8>> {
    bincode::serialize(graph).map_err(LadderError::Encode)
}

pub fn decode(bytes: &[u8]) -> Result<WordGraph> {
    bincode::deserialize(bytes).map_err(LadderError::Decode)
}

/// Write `graph` to `path`, returning the number of bytes written.
pub fn save(graph: &WordGraph, path: &Path) -> Result<usize> {
    let bytes = encode(graph)?;
    fs::write(path, &bytes).map_err(|e| LadderError::io(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "saved snapshot");
    Ok(bytes.len())
}

pub fn load(path: &Path) -> Result<WordGraph> {
    let bytes = fs::read(path).map_err(|e| LadderError::io(path, e))?;
    decode(&bytes)
}

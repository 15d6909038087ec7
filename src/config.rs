//! Service configuration, read from `wordladder.toml`.
//!
//! Every field has a default, so a missing file is not an error. An
//! unparsable file is reported to the caller, which decides whether to fall
//! back to the defaults.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use crate::error::{LadderError, Result};

pub const DEFAULT_CONFIG_FILE: &str = "wordladder.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LadderConfig {
    /// Directory holding the `wordladder{N}.bin` snapshots.
    pub snapshot_dir: PathBuf,
    /// Shortest supported word length (inclusive).
    pub min_length: usize,
    /// Longest supported word length (inclusive).
    pub max_length: usize,
    pub host: IpAddr,
    pub port: u16,
    /// Emit logs as JSON lines instead of the human-readable format.
    pub log_json: bool,
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            snapshot_dir: PathBuf::from("."),
            min_length: 1,
            max_length: 8,
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            log_json: false,
        }
    }
}

impl LadderConfig {
    /// Load config from `path`. A missing file yields the defaults.
    pub fn try_load(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(LadderError::io(path, e)),
        };
        toml::from_str(&content).map_err(|source| LadderError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn supports_length(&self, length: usize) -> bool {
        (self.min_length..=self.max_length).contains(&length)
    }
}

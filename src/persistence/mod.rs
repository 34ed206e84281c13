//! Key-value score persistence
//!
//! A small string-keyed store with two backends: an in-memory map for tests
//! and a JSON file for native runs. Loading is lenient - a missing or
//! corrupt file degrades to an empty store with a warning, never an error.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Store key for the last match's score
pub const LAST_SCORE_KEY: &str = "lastScore";
/// Store key for the best score ever
pub const HIGH_SCORE_KEY: &str = "highScore";

/// String-keyed scalar storage capability
pub trait ScoreStore {
    fn get(&self, key: &str) -> Option<u64>;
    fn set(&mut self, key: &str, value: u64);
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, u64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self, key: &str) -> Option<u64> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: u64) {
        self.values.insert(key.to_string(), value);
    }
}

/// JSON-file-backed store
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: HashMap<String, u64>,
}

impl FileStore {
    /// Open a store at `path`, reading existing values if the file parses.
    /// Anything else (missing file, bad JSON) starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(values) => values,
                Err(err) => {
                    log::warn!("corrupt score file {}: {err}", path.display());
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };
        Self { path, values }
    }

    /// Write the current values out. Failures are logged, not raised.
    pub fn flush(&self) {
        let json = match serde_json::to_string_pretty(&self.values) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("failed to serialize scores: {err}");
                return;
            }
        };
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            let _ = std::fs::create_dir_all(dir);
        }
        if let Err(err) = std::fs::write(&self.path, json) {
            log::warn!("failed to write {}: {err}", self.path.display());
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileStore {
    fn get(&self, key: &str) -> Option<u64> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: u64) {
        self.values.insert(key.to_string(), value);
    }
}

//! Caller-owned dataset cache
//!
//! Holds the records of one CSV file and reloads them when the file's
//! modification time changes.

use super::loader::load_csv;
use crate::{MatchRecord, Result};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Loaded match records plus the file state they were read from
#[derive(Debug)]
pub struct DatasetCache {
    path: PathBuf,
    matches: Vec<MatchRecord>,
    modified: Option<SystemTime>,
    loaded: bool,
    loads: usize,
}

impl DatasetCache {
    /// Create an empty cache for the given file; nothing is read yet
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        DatasetCache {
            path: path.as_ref().to_path_buf(),
            matches: Vec::new(),
            modified: None,
            loaded: false,
            loads: 0,
        }
    }

    /// Records from the file, reading it again if it changed since last load
    pub fn get(&mut self) -> Result<&[MatchRecord]> {
        let modified = std::fs::metadata(&self.path)?.modified().ok();

        if !self.loaded || modified.is_none() || modified != self.modified {
            if self.loaded {
                log::info!("{} changed, reloading", self.path.display());
            }
            self.matches = load_csv(&self.path)?;
            self.modified = modified;
            self.loaded = true;
            self.loads += 1;
        }

        Ok(&self.matches)
    }

    /// Force a reload on the next `get`
    pub fn invalidate(&mut self) {
        self.loaded = false;
        self.matches.clear();
        self.modified = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Number of times the file has been read
    pub fn loads(&self) -> usize {
        self.loads
    }
}

//! Cache directory access

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::key::is_cache_file_name;
use super::CacheKey;
use crate::error::Result;

/// Status of a single cache file
#[derive(Debug, Clone, Serialize)]
pub struct CacheEntryStatus {
    pub name: String,
    pub size: u64,
    pub age_secs: u64,
    pub modified: DateTime<Utc>,
    pub fresh: bool,
}

/// Cache directory holding raw API responses
#[derive(Debug, Clone)]
pub struct CacheStore {
    dir: PathBuf,
}

impl CacheStore {
    /// Create a store rooted at `dir` (created lazily on first write)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The cache directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &CacheKey) -> PathBuf {
        self.dir.join(key.as_str())
    }

    /// Modification time of the cache file, `None` when it does not exist
    pub fn last_modified(&self, key: &CacheKey) -> Option<SystemTime> {
        fs::metadata(self.path_for(key))
            .and_then(|m| m.modified())
            .ok()
    }

    /// Whether the cache file exists and is younger than `window`
    ///
    /// A file is stale once `now - window >= modified`, so a zero window
    /// never yields a fresh entry.
    pub fn is_fresh(&self, key: &CacheKey, window: Duration) -> bool {
        match self.last_modified(key) {
            Some(modified) => is_fresh_at(modified, SystemTime::now(), window),
            None => false,
        }
    }

    /// Read the raw stored content
    pub fn read(&self, key: &CacheKey) -> Result<Vec<u8>> {
        Ok(fs::read(self.path_for(key))?)
    }

    /// Replace the stored content atomically (temp file, then rename)
    pub fn write(&self, key: &CacheKey, content: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        let target = self.path_for(key);
        let tmp = self.dir.join(format!(".{}.tmp", key.as_str()));
        if let Err(e) = fs::write(&tmp, content).and_then(|()| fs::rename(&tmp, &target)) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }

    /// List cached responses, sorted by name
    pub fn entries(&self, window: Duration) -> Result<Vec<CacheEntryStatus>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let now = SystemTime::now();
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if !is_cache_file_name(&name) {
                continue;
            }

            let metadata = entry.metadata()?;
            if !metadata.is_file() {
                continue;
            }
            let modified = metadata.modified()?;
            let age_secs = now
                .duration_since(modified)
                .map(|d| d.as_secs())
                .unwrap_or(0);

            entries.push(CacheEntryStatus {
                name,
                size: metadata.len(),
                age_secs,
                modified: DateTime::<Utc>::from(modified),
                fresh: is_fresh_at(modified, now, window),
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    /// Remove every cached response, returning how many were deleted
    pub fn clear(&self) -> Result<usize> {
        if !self.dir.exists() {
            return Ok(0);
        }

        let mut removed = 0;
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            let is_cache = is_cache_file_name(&name);
            if entry.file_type()?.is_file() && (is_cache || name.ends_with(".tmp")) {
                fs::remove_file(entry.path())?;
                if is_cache {
                    removed += 1;
                }
            }
        }
        Ok(removed)
    }
}

fn is_fresh_at(modified: SystemTime, now: SystemTime, window: Duration) -> bool {
    match now.checked_sub(window) {
        Some(threshold) => threshold < modified,
        None => true,
    }
}

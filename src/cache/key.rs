use std::fmt;

use crate::error::{DrNuError, Result};

/// File name binding a logical request to a cache file
///
/// Keys are plain `*.json` file names without a leading dot, which is exactly
/// the set of files the cache store lists and clears.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Create a key, rejecting anything that is not a single `*.json` file name
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let valid = is_cache_file_name(&name) && !name.contains(['/', '\\', '\0']);

        if !valid {
            return Err(DrNuError::invalid(format!("invalid cache key: '{name}'")));
        }
        Ok(Self(name))
    }

    /// The file name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Whether `name` looks like a cache file (`*.json`, not hidden)
pub(crate) fn is_cache_file_name(name: &str) -> bool {
    name.len() > ".json".len() && name.ends_with(".json") && !name.starts_with('.')
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//! Cache management commands

use std::time::Duration;

use colored::Colorize;

use crate::cache::CacheStore;
use crate::cli::args::{CacheArgs, CacheCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::Result;
use crate::output::pretty;

/// Handle cache commands
pub fn cache(config: &Config, paths: &Paths, args: &CacheArgs, format: OutputFormat) -> Result<String> {
    let store = CacheStore::new(config.cache_dir(paths));

    match &args.command {
        CacheCommands::Status => status(&store, config.cache.minutes, format),
        CacheCommands::Clear => clear(&store, format),
    }
}

fn status(store: &CacheStore, minutes: u64, format: OutputFormat) -> Result<String> {
    let entries = store.entries(Duration::from_secs(minutes.saturating_mul(60)))?;
    let dir = store.dir().display().to_string();

    match format {
        OutputFormat::Pretty => Ok(pretty::format_cache_status(&dir, minutes, &entries)),
        OutputFormat::Json => {
            let json = serde_json::json!({
                "cache_dir": dir,
                "minutes": minutes,
                "entries": entries,
            });
            Ok(serde_json::to_string_pretty(&json)?)
        }
    }
}

fn clear(store: &CacheStore, format: OutputFormat) -> Result<String> {
    let removed = store.clear()?;

    match format {
        OutputFormat::Pretty => Ok(format!(
            "{} Cache cleared ({} file{})",
            "✓".green(),
            removed,
            if removed == 1 { "" } else { "s" }
        )),
        OutputFormat::Json => {
            let json = serde_json::json!({
                "status": "cleared",
                "removed": removed,
            });
            Ok(serde_json::to_string_pretty(&json)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheKey;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Paths, Config) {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path());
        (temp_dir, paths, Config::default())
    }

    #[test]
    fn test_status_json_lists_entries() {
        let (_tmp, paths, config) = setup();
        let store = CacheStore::new(config.cache_dir(&paths));
        store.write(&CacheKey::new("newest.json").unwrap(), b"[]").unwrap();

        let args = CacheArgs { command: CacheCommands::Status };
        let output = cache(&config, &paths, &args, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["minutes"], 60);
        assert_eq!(value["entries"][0]["name"], "newest.json");
        assert_eq!(value["entries"][0]["fresh"], true);
    }

    #[test]
    fn test_clear_reports_count() {
        let (_tmp, paths, config) = setup();
        let store = CacheStore::new(config.cache_dir(&paths));
        store.write(&CacheKey::new("a.json").unwrap(), b"[]").unwrap();
        store.write(&CacheKey::new("b.json").unwrap(), b"[]").unwrap();

        let args = CacheArgs { command: CacheCommands::Clear };
        let output = cache(&config, &paths, &args, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["removed"], 2);
        assert!(store.entries(Duration::ZERO).unwrap().is_empty());
    }
}

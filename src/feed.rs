//! Feed download and the flat-file cache.
//!
//! The raw feed is cached once under `<cache_dir>/<calendar_name>.ics` and
//! reused on every later run; there is no expiry. `pull` is the only way to
//! refresh it.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::{self, Config};

/// Path of the cache file for this calendar.
pub fn cache_path(cfg: &Config) -> PathBuf {
    config::expand_path(&cfg.cache_dir).join(format!("{}.ics", cfg.calendar_name))
}

/// Read the cached feed. A missing cache file is not an error.
pub fn read_cache(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => {
            Err(e).with_context(|| format!("Failed to read cached feed at {}", path.display()))
        }
    }
}

/// Write the raw feed to the cache file, creating the cache directory.
pub fn write_cache(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create cache directory at {}", parent.display()))?;
    }

    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write cached feed at {}", path.display()))?;

    Ok(())
}

/// Download the feed. Failures propagate as-is; there is no retry.
pub async fn fetch(url: &str) -> Result<String> {
    let response = reqwest::get(url)
        .await
        .with_context(|| format!("Failed to fetch calendar feed from {}", url))?;

    let response = response
        .error_for_status()
        .with_context(|| format!("Calendar feed request to {} was rejected", url))?;

    response
        .text()
        .await
        .context("Failed to read calendar feed body")
}

/// Return the feed text, from cache when present, otherwise from the network
/// (caching the downloaded payload byte-for-byte for the next run).
pub async fn load(cfg: &Config) -> Result<String> {
    let path = cache_path(cfg);

    if let Some(cached) = read_cache(&path)? {
        return Ok(cached);
    }

    let contents = fetch(&cfg.feed_url).await?;
    write_cache(&path, &contents)?;

    Ok(contents)
}

/// Download the feed unconditionally and overwrite the cache.
pub async fn refresh(cfg: &Config) -> Result<String> {
    let contents = fetch(&cfg.feed_url).await?;
    write_cache(&cache_path(cfg), &contents)?;
    Ok(contents)
}

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::cache::{CacheKey, CacheStore};
use crate::error::{ApiError, DrNuError, Result};

const USER_AGENT: &str = concat!("drnu/", env!("CARGO_PKG_VERSION"));

/// Timeout applied to every live request
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Resolves API requests to JSON, consulting the file cache when asked to
pub struct CachedFetcher {
    client: Client,
    base_url: Url,
    store: CacheStore,
    window: Duration,
}

impl CachedFetcher {
    /// Create a fetcher trusting cached files for `cache_minutes`
    pub fn new(base_url: Url, store: CacheStore, cache_minutes: u64) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url,
            store,
            window: Duration::from_secs(cache_minutes.saturating_mul(60)),
        })
    }

    /// API base URL requests are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The backing cache store
    pub fn store(&self) -> &CacheStore {
        &self.store
    }

    /// Turn a path fragment into a full URL; absolute URLs pass through
    pub fn resolve(&self, request: &str) -> Result<Url> {
        let raw = if is_absolute(request) {
            request.to_string()
        } else {
            format!("{}{}", self.base_url, request)
        };

        Url::parse(&raw).map_err(|e| DrNuError::invalid(format!("invalid API URL '{raw}': {e}")))
    }

    /// Fetch `request` as JSON
    ///
    /// Without a cache key the request always goes to the network. With one,
    /// a fresh cache file is returned as-is; otherwise the response is fetched
    /// and written back to the cache on a best-effort basis.
    pub fn call_api(&self, request: &str, cache_key: Option<&CacheKey>) -> Result<Value> {
        let url = self.resolve(request)?;
        debug!("Calling API: {url}");

        let content = match cache_key {
            None => self.http_request(&url)?,
            Some(key) if self.store.is_fresh(key, self.window) => {
                debug!(cache_key = %key, "serving from cache");
                self.store.read(key)?
            }
            Some(key) => {
                let content = self.http_request(&url)?;
                if !content.is_empty() {
                    match self.store.write(key, &content) {
                        Ok(()) => debug!(cache_key = %key, "cache refreshed"),
                        Err(e) => warn!(cache_key = %key, error = %e, "could not write cache file"),
                    }
                }
                content
            }
        };

        parse_content(&content)
    }

    /// Issue a GET and return the raw body
    fn http_request(&self, url: &Url) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(ApiError::Transport)?;

        let body = response.bytes().map_err(ApiError::Transport)?;
        Ok(body.to_vec())
    }
}

fn is_absolute(request: &str) -> bool {
    request.starts_with("http://") || request.starts_with("https://")
}

/// Parse raw content; blank content is an empty list
fn parse_content(content: &[u8]) -> Result<Value> {
    if content.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Array(Vec::new()));
    }
    serde_json::from_slice(content).map_err(|e| ApiError::Decode(e).into())
}

use std::borrow::Cow;
use std::collections::BTreeSet;

use serde_json::Value;
use tracing::info;

use super::fetcher::CachedFetcher;
use super::images;
use super::types::{self, VideoCategory};
use crate::cache::{CacheKey, CacheStore};
use crate::config::{Config, Paths};
use crate::error::{DrNuError, Result};

/// Result count used when a search does not ask for one
pub const DEFAULT_SEARCH_LIMIT: u32 = 100;

const PROGRAM_SERIES_PATH: &str = "programseries";
const PROGRAM_SERIES_CACHE: &str = "programseries.json";

/// Restricts the program series listing
#[derive(Debug, Clone, Default)]
pub struct SeriesFilter {
    /// Keep only series with these slugs, in this order
    pub slugs: Option<Vec<String>>,
    /// Keep only series carrying this label
    pub label: Option<String>,
}

impl SeriesFilter {
    /// Limit to the given slugs
    pub fn slugs<I, S>(mut self, slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.slugs = Some(slugs.into_iter().map(Into::into).collect());
        self
    }

    /// Limit to series with `label`
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Apply the filter to a series listing
    ///
    /// The slug filter walks the requested slugs and collects every matching
    /// series for each, so the result follows the order of the slug list.
    pub fn apply(&self, series: Vec<Value>) -> Vec<Value> {
        let series: Vec<Value> = match &self.slugs {
            Some(slugs) => slugs
                .iter()
                .flat_map(|wanted| {
                    series
                        .iter()
                        .filter(move |s| types::slug(s) == Some(wanted.as_str()))
                        .cloned()
                })
                .collect(),
            None => series,
        };

        match &self.label {
            Some(label) => series
                .into_iter()
                .filter(|s| types::has_label(s, label))
                .collect(),
            None => series,
        }
    }
}

/// DR NU catalog client
pub struct DrNuApi {
    fetcher: CachedFetcher,
}

impl DrNuApi {
    /// Create a client from configuration
    pub fn new(config: &Config, paths: &Paths) -> Result<Self> {
        let store = CacheStore::new(config.cache_dir(paths));
        let fetcher = CachedFetcher::new(config.base_url()?, store, config.cache.minutes)?;
        Ok(Self::with_fetcher(fetcher))
    }

    /// Create a client around an existing fetcher
    pub fn with_fetcher(fetcher: CachedFetcher) -> Self {
        Self { fetcher }
    }

    fn cached(&self, path: &str, cache_file: &str) -> Result<Value> {
        let key = CacheKey::new(cache_file)?;
        self.fetcher.call_api(path, Some(&key))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Program Series
    // ─────────────────────────────────────────────────────────────────────────

    /// List program series, optionally filtered
    pub fn program_series(&self, filter: &SeriesFilter) -> Result<Vec<Value>> {
        let series = types::into_list(self.cached(PROGRAM_SERIES_PATH, PROGRAM_SERIES_CACHE)?);
        Ok(filter.apply(series))
    }

    /// Every program series
    pub fn all_program_series(&self) -> Result<Vec<Value>> {
        self.program_series(&SeriesFilter::default())
    }

    /// Look up one program series by slug
    pub fn program_series_info(&self, slug: &str) -> Result<Option<Value>> {
        Ok(self
            .all_program_series()?
            .into_iter()
            .find(|s| types::slug(s) == Some(slug)))
    }

    /// All labels used by any program series, deduplicated and sorted
    pub fn program_series_labels(&self) -> Result<Vec<String>> {
        let series = self.all_program_series()?;
        let labels: BTreeSet<String> = series
            .iter()
            .flat_map(types::labels)
            .map(str::to_string)
            .collect();
        Ok(labels.into_iter().collect())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Videos
    // ─────────────────────────────────────────────────────────────────────────

    /// Videos in a curated category
    pub fn videos(&self, category: VideoCategory) -> Result<Vec<Value>> {
        Ok(types::into_list(
            self.cached(category.path(), category.cache_file())?,
        ))
    }

    pub fn all_videos(&self) -> Result<Vec<Value>> {
        self.videos(VideoCategory::All)
    }

    pub fn newest_videos(&self) -> Result<Vec<Value>> {
        self.videos(VideoCategory::Newest)
    }

    pub fn last_chance_videos(&self) -> Result<Vec<Value>> {
        self.videos(VideoCategory::LastChance)
    }

    pub fn most_viewed_videos(&self) -> Result<Vec<Value>> {
        self.videos(VideoCategory::MostViewed)
    }

    pub fn spotlight_videos(&self) -> Result<Vec<Value>> {
        self.videos(VideoCategory::Spotlight)
    }

    pub fn highlight_videos(&self) -> Result<Vec<Value>> {
        self.videos(VideoCategory::Highlight)
    }

    pub fn premiere_videos(&self) -> Result<Vec<Value>> {
        self.videos(VideoCategory::Premiere)
    }

    /// Videos belonging to a program series
    pub fn program_series_videos(&self, slug: &str) -> Result<Vec<Value>> {
        let response = self.cached(
            &format!("programseries/{}/videos", path_segment(slug)?),
            &format!("programseries-{slug}.json"),
        )?;
        Ok(types::into_list(response))
    }

    /// A single video, `None` when the API does not know it
    ///
    /// The API answers unknown ids with a bare JSON string instead of an
    /// object.
    pub fn video_by_id(&self, video_id: u64) -> Result<Option<Value>> {
        let response = self.cached(
            &format!("videos/{video_id}"),
            &format!("videobyid-{video_id}.json"),
        )?;

        match response {
            Value::String(_) | Value::Null => {
                info!("Video with ID {video_id} not found");
                Ok(None)
            }
            video => Ok(Some(video)),
        }
    }

    /// Resource document behind a video's `videoResourceUrl`
    pub fn video_resource(&self, video: &Value) -> Result<Value> {
        let url = types::str_field(video, "videoResourceUrl").ok_or_else(|| {
            DrNuError::invalid(format!(
                "video {} has no videoResourceUrl",
                types::id(video).unwrap_or_else(|| "?".to_string())
            ))
        })?;
        self.fetcher.call_api(url, None)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────

    /// Free-text search; results are never cached
    pub fn search(&self, term: &str, limit: u32) -> Result<Vec<Value>> {
        if term.is_empty() {
            return Ok(Vec::new());
        }

        let path = format!("search/{}?limit={limit}", urlencoding::encode(term));
        Ok(types::into_list(self.fetcher.call_api(&path, None)?))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Images
    // ─────────────────────────────────────────────────────────────────────────

    pub fn program_series_image_url(&self, slug: &str, width: u32, height: Option<u32>) -> String {
        images::program_series_image_url(self.fetcher.base_url(), slug, width, height)
    }

    pub fn video_image_url(&self, video_id: u64, width: u32, height: Option<u32>) -> String {
        images::video_image_url(self.fetcher.base_url(), video_id, width, height)
    }

    pub fn chapter_image_url(&self, chapter_id: u64, width: u32, height: Option<u32>) -> String {
        images::chapter_image_url(self.fetcher.base_url(), chapter_id, width, height)
    }
}

/// Percent-encode a caller-supplied value as exactly one path segment
fn path_segment(value: &str) -> Result<Cow<'_, str>> {
    if value.is_empty() || value == "." || value == ".." {
        return Err(DrNuError::invalid(format!("invalid path segment: '{value}'")));
    }
    Ok(urlencoding::encode(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;
    use url::Url;

    const SERIES: &str = r#"[
        {"slug": "a", "title": "Alpha", "labels": ["Drama", "Krimi"]},
        {"slug": "b", "title": "Bravo", "labels": ["Dokumentar"]},
        {"slug": "c", "title": "Charlie", "labels": ["Krimi", "Drama"]}
    ]"#;

    fn api(server: &mockito::Server, dir: &TempDir, minutes: u64) -> DrNuApi {
        let base = Url::parse(&format!("{}/NU/api/", server.url())).unwrap();
        let fetcher = CachedFetcher::new(base, CacheStore::new(dir.path()), minutes).unwrap();
        DrNuApi::with_fetcher(fetcher)
    }

    fn series_fixture() -> Vec<Value> {
        serde_json::from_str(SERIES).unwrap()
    }

    fn slugs(series: &[Value]) -> Vec<&str> {
        series.iter().filter_map(types::slug).collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Series Filtering
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_filter_by_slugs_keeps_matches() {
        let filtered = SeriesFilter::default().slugs(["a", "b"]).apply(series_fixture());
        assert_eq!(slugs(&filtered), vec!["a", "b"]);
    }

    #[test]
    fn test_filter_by_slugs_follows_requested_order() {
        let filtered = SeriesFilter::default()
            .slugs(["c", "missing", "a"])
            .apply(series_fixture());
        assert_eq!(slugs(&filtered), vec!["c", "a"]);
    }

    #[test]
    fn test_filter_by_label() {
        let filtered = SeriesFilter::default().label("Krimi").apply(series_fixture());
        assert_eq!(slugs(&filtered), vec!["a", "c"]);
    }

    #[test]
    fn test_filter_by_slugs_and_label() {
        let filtered = SeriesFilter::default()
            .slugs(["b", "c"])
            .label("Drama")
            .apply(series_fixture());
        assert_eq!(slugs(&filtered), vec!["c"]);
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let filtered = SeriesFilter::default().apply(series_fixture());
        assert_eq!(slugs(&filtered), vec!["a", "b", "c"]);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Program Series Calls
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_program_series_is_cached_once() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/NU/api/programseries")
            .with_body(SERIES)
            .expect(1)
            .create();
        let dir = TempDir::new().unwrap();
        let api = api(&server, &dir, 60);

        let filtered = api
            .program_series(&SeriesFilter::default().slugs(["a", "b"]))
            .unwrap();
        let info = api.program_series_info("c").unwrap().unwrap();
        let missing = api.program_series_info("zzz").unwrap();

        mock.assert();
        assert_eq!(slugs(&filtered), vec!["a", "b"]);
        assert_eq!(info["title"], "Charlie");
        assert!(missing.is_none());
        assert!(dir.path().join("programseries.json").exists());
    }

    #[test]
    fn test_labels_are_deduplicated_and_sorted() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/NU/api/programseries")
            .with_body(SERIES)
            .create();
        let dir = TempDir::new().unwrap();

        let labels = api(&server, &dir, 0).program_series_labels().unwrap();
        assert_eq!(labels, vec!["Dokumentar", "Drama", "Krimi"]);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Video Calls
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_category_listing_uses_its_cache_file() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/NU/api/videos/lastchance")
            .with_body(r#"[{"id": 1}, {"id": 2}]"#)
            .create();
        let dir = TempDir::new().unwrap();

        let videos = api(&server, &dir, 60).last_chance_videos().unwrap();
        assert_eq!(videos.len(), 2);
        assert!(dir.path().join("lastchance.json").exists());
    }

    #[test]
    fn test_null_listing_is_empty() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/NU/api/videos/premiere")
            .with_body("null")
            .create();
        let dir = TempDir::new().unwrap();

        assert!(api(&server, &dir, 60).premiere_videos().unwrap().is_empty());
    }

    #[test]
    fn test_program_series_videos() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/NU/api/programseries/den-store-bagedyst/videos")
            .with_body(r#"[{"id": 84011, "title": "Afsnit 1"}]"#)
            .create();
        let dir = TempDir::new().unwrap();

        let videos = api(&server, &dir, 60)
            .program_series_videos("den-store-bagedyst")
            .unwrap();
        assert_eq!(videos[0]["id"], 84011);
        assert!(dir
            .path()
            .join("programseries-den-store-bagedyst.json")
            .exists());
    }

    #[test]
    fn test_program_series_videos_encodes_slug() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/NU/api/programseries/a%3Fb%23c/videos")
            .with_body(r#"[{"id": 1}]"#)
            .expect(1)
            .create();
        let dir = TempDir::new().unwrap();

        let videos = api(&server, &dir, 60).program_series_videos("a?b#c").unwrap();

        mock.assert();
        assert_eq!(videos.len(), 1);
    }

    #[test]
    fn test_program_series_videos_rejects_dot_segments() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", mockito::Matcher::Any)
            .expect(0)
            .create();
        let dir = TempDir::new().unwrap();
        let api = api(&server, &dir, 60);

        for slug in ["..", ".", ""] {
            let err = api.program_series_videos(slug).unwrap_err();
            assert!(matches!(err, DrNuError::InvalidArgument(_)), "{slug:?}");
        }

        mock.assert();
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_path_segment() {
        assert_eq!(path_segment("den-store-bagedyst").unwrap(), "den-store-bagedyst");
        assert_eq!(path_segment("a/b").unwrap(), "a%2Fb");
        assert!(path_segment("..").is_err());
    }

    #[test]
    fn test_video_by_id_returns_object() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/NU/api/videos/84011")
            .with_body(r#"{"id": 84011, "title": "Afsnit 1"}"#)
            .create();
        let dir = TempDir::new().unwrap();

        let video = api(&server, &dir, 60).video_by_id(84011).unwrap().unwrap();
        assert_eq!(video["title"], "Afsnit 1");
        assert!(dir.path().join("videobyid-84011.json").exists());
    }

    #[test]
    fn test_video_by_id_string_response_is_not_found() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/NU/api/videos/1")
            .with_body(r#""Video not found""#)
            .create();
        let dir = TempDir::new().unwrap();

        assert!(api(&server, &dir, 60).video_by_id(1).unwrap().is_none());
    }

    #[test]
    fn test_video_resource_fetches_absolute_url() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/resources/84011")
            .with_body(r#"{"links": [{"uri": "rtmp://example/cms/x"}]}"#)
            .expect(1)
            .create();
        let dir = TempDir::new().unwrap();
        let video = json!({
            "id": 84011,
            "videoResourceUrl": format!("{}/resources/84011", server.url()),
        });

        let resource = api(&server, &dir, 60).video_resource(&video).unwrap();

        mock.assert();
        assert_eq!(resource["links"][0]["uri"], "rtmp://example/cms/x");
    }

    #[test]
    fn test_video_resource_requires_url() {
        let server = mockito::Server::new();
        let dir = TempDir::new().unwrap();

        let err = api(&server, &dir, 60)
            .video_resource(&json!({"id": 5}))
            .unwrap_err();
        assert!(matches!(err, DrNuError::InvalidArgument(_)));
        assert!(err.to_string().contains("video 5"));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_empty_search_term_makes_no_request() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", mockito::Matcher::Any)
            .expect(0)
            .create();
        let dir = TempDir::new().unwrap();

        let results = api(&server, &dir, 60).search("", DEFAULT_SEARCH_LIMIT).unwrap();

        mock.assert();
        assert!(results.is_empty());
    }

    #[test]
    fn test_search_encodes_term_and_limit() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/NU/api/search/store%20bagedyst")
            .match_query(mockito::Matcher::UrlEncoded("limit".into(), "10".into()))
            .with_body(r#"[{"id": 1}]"#)
            .expect(2)
            .create();
        let dir = TempDir::new().unwrap();
        let api = api(&server, &dir, 60);

        api.search("store bagedyst", 10).unwrap();
        let results = api.search("store bagedyst", 10).unwrap();

        mock.assert();
        assert_eq!(results.len(), 1);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Images
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_image_urls_use_configured_base() {
        let server = mockito::Server::new();
        let dir = TempDir::new().unwrap();
        let api = api(&server, &dir, 60);

        assert_eq!(
            api.video_image_url(3, 64, None),
            format!("{}/NU/api/videos/3/images/64x64.jpg", server.url())
        );
    }
}

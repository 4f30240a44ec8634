mod catalog;
mod fetcher;
pub mod images;
pub mod types;

pub use catalog::{DrNuApi, SeriesFilter, DEFAULT_SEARCH_LIMIT};
pub use fetcher::CachedFetcher;
pub use types::*;

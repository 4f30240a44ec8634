//! Client for the DR NU video catalog API
//!
//! [`api::DrNuApi`] exposes the catalog operations; responses are cached on
//! disk by [`api::CachedFetcher`] according to the configured freshness
//! window.

pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;

pub use api::{CachedFetcher, DrNuApi, SeriesFilter, VideoCategory};
pub use config::Config;
pub use error::{ApiError, DrNuError, Result};

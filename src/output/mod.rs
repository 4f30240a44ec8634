pub mod json;
pub mod pretty;

use serde_json::Value;

use crate::cli::OutputFormat;
use crate::error::Result;

/// Format a list of program series based on output format
pub fn format_series_list(series: &[Value], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_series_list(series)),
        OutputFormat::Json => json::format_values(series),
    }
}

/// Format a single program series based on output format
pub fn format_series(serie: &Value, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_series(serie)),
        OutputFormat::Json => json::format_json(serie),
    }
}

/// Format label names based on output format
pub fn format_labels(labels: &[String], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_labels(labels)),
        OutputFormat::Json => json::format_json(labels),
    }
}

/// Format a list of videos based on output format
pub fn format_videos(title: &str, videos: &[Value], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_videos(title, videos)),
        OutputFormat::Json => json::format_values(videos),
    }
}

/// Format a single video based on output format
pub fn format_video(video: &Value, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_video(video)),
        OutputFormat::Json => json::format_json(video),
    }
}

use colored::Colorize;
use serde_json::Value;

use crate::api::types::{self, str_field};
use crate::cache::CacheEntryStatus;

/// Safely truncate a string to n characters, appending "..." if truncated.
/// Works correctly with multi-byte UTF-8 characters.
fn truncate_str(s: &str, max_chars: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() > max_chars {
        let truncated: String = chars.iter().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    } else {
        s.to_string()
    }
}

/// Scalar JSON field rendered as text
fn field_text(value: &Value, name: &str) -> Option<String> {
    match value.get(name)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn header(title: &str, width: usize) -> String {
    format!("{}\n{}\n", title.bold(), "─".repeat(width))
}

/// Format a list of program series
pub fn format_series_list(series: &[Value]) -> String {
    if series.is_empty() {
        return "No program series found.".to_string();
    }

    let mut output = header("Program Series", 70);
    for serie in series {
        output.push_str(&format!(
            "{}\n",
            types::title(serie).unwrap_or("(untitled)").bold()
        ));
        if let Some(slug) = types::slug(serie) {
            output.push_str(&format!("  {} {}\n", "Slug:".cyan(), slug));
        }
        let labels: Vec<&str> = types::labels(serie).collect();
        if !labels.is_empty() {
            output.push_str(&format!("  {} {}\n", "Labels:".cyan(), labels.join(", ")));
        }
        if let Some(count) = field_text(serie, "videoCount") {
            output.push_str(&format!("  {} {}\n", "Videos:".cyan(), count));
        }
        output.push('\n');
    }

    output.push_str(&format!("{} series", series.len()).dimmed().to_string());
    output
}

/// Format one program series
pub fn format_series(serie: &Value) -> String {
    let mut output = header(types::title(serie).unwrap_or("(untitled)"), 50);

    if let Some(slug) = types::slug(serie) {
        output.push_str(&format!("{} {}\n", "Slug:".cyan(), slug));
    }
    let labels: Vec<&str> = types::labels(serie).collect();
    if !labels.is_empty() {
        output.push_str(&format!("{} {}\n", "Labels:".cyan(), labels.join(", ")));
    }
    if let Some(count) = field_text(serie, "videoCount") {
        output.push_str(&format!("{} {}\n", "Videos:".cyan(), count));
    }
    if let Some(newest) = field_text(serie, "newestVideoPublishTime") {
        output.push_str(&format!("{} {}\n", "Newest:".cyan(), newest));
    }
    if let Some(description) = str_field(serie, "description") {
        output.push_str(&format!("\n{}\n", description));
    }

    output
}

/// Format label names
pub fn format_labels(labels: &[String]) -> String {
    if labels.is_empty() {
        return "No labels found.".to_string();
    }

    let mut output = header("Labels", 40);
    for label in labels {
        output.push_str(&format!("  {}\n", label));
    }
    output
}

/// Format a list of videos
pub fn format_videos(title: &str, videos: &[Value]) -> String {
    if videos.is_empty() {
        return "No videos found.".to_string();
    }

    let mut output = header(title, 90);
    for video in videos {
        let id = types::id(video).unwrap_or_else(|| "?".to_string());
        let name = truncate_str(types::title(video).unwrap_or("(untitled)"), 60);
        let mut line = format!("{}  {}", format!("{:>8}", id).dimmed(), name.bold());
        if let Some(duration) = field_text(video, "duration") {
            line.push_str(&format!("  {}", duration.dimmed()));
        }
        if video.get("isPremiere").and_then(Value::as_bool) == Some(true) {
            line.push_str(&format!("  {}", "premiere".yellow()));
        }
        output.push_str(&line);
        output.push('\n');

        if let Some(slug) = field_text(video, "programSeriesSlug") {
            output.push_str(&format!("          {} {}\n", "Series:".cyan(), slug));
        }
    }

    output.push_str(&format!("\n{} videos", videos.len()).dimmed().to_string());
    output
}

/// Format one video
pub fn format_video(video: &Value) -> String {
    let mut output = header(types::title(video).unwrap_or("(untitled)"), 50);

    let rows = [
        ("ID:", "id"),
        ("Series:", "programSeriesSlug"),
        ("Channel:", "broadcastChannel"),
        ("Broadcast:", "broadcastTime"),
        ("Expires:", "expireTime"),
        ("Duration:", "duration"),
        ("Resource:", "videoResourceUrl"),
    ];
    for (label, name) in rows {
        if let Some(text) = field_text(video, name) {
            output.push_str(&format!("{} {}\n", label.cyan(), text));
        }
    }

    if let Some(chapters) = video.get("chapters").and_then(Value::as_array) {
        if !chapters.is_empty() {
            output.push_str(&format!("\n{}\n", "Chapters".bold()));
            for chapter in chapters {
                output.push_str(&format!(
                    "  {} {}\n",
                    types::id(chapter).unwrap_or_default().dimmed(),
                    types::title(chapter).unwrap_or("(untitled)")
                ));
            }
        }
    }

    if let Some(description) = str_field(video, "description") {
        output.push_str(&format!("\n{}\n", description));
    }

    output
}

/// Format cache status
pub fn format_cache_status(dir: &str, minutes: u64, entries: &[CacheEntryStatus]) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", "Cache Status".bold()));
    output.push_str(&format!("Location: {}\n", dir));
    output.push_str(&format!("Freshness window: {} min\n\n", minutes));

    if entries.is_empty() {
        output.push_str(&format!("  {}\n", "Not cached".dimmed()));
        return output.trim_end().to_string();
    }

    for entry in entries {
        let state = if entry.fresh {
            "(fresh)".green()
        } else {
            "(stale)".yellow()
        };
        output.push_str(&format!(
            "  {:<40} {:>9} B  {} {}\n",
            entry.name,
            entry.size,
            format_age(entry.age_secs),
            state
        ));
    }

    output.trim_end().to_string()
}

/// Format age in human-readable form
pub fn format_age(secs: u64) -> String {
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    }
}

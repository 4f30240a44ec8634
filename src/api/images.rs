//! Thumbnail URL builders
//!
//! Pure string formatting; nothing here touches the network. Height defaults
//! to the width, giving a square image.

use url::Url;

/// Thumbnail of a program series
pub fn program_series_image_url(base: &Url, slug: &str, width: u32, height: Option<u32>) -> String {
    image_url(base, "programseries", slug, width, height)
}

/// Thumbnail of a video
pub fn video_image_url(base: &Url, video_id: u64, width: u32, height: Option<u32>) -> String {
    image_url(base, "videos", &video_id.to_string(), width, height)
}

/// Thumbnail of a chapter within a video
pub fn chapter_image_url(base: &Url, chapter_id: u64, width: u32, height: Option<u32>) -> String {
    image_url(base, "chapters", &chapter_id.to_string(), width, height)
}

fn image_url(base: &Url, kind: &str, id: &str, width: u32, height: Option<u32>) -> String {
    let height = height.unwrap_or(width);
    format!("{base}{kind}/{id}/images/{width}x{height}.jpg")
}

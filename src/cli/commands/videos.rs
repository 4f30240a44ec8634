use crate::api::DrNuApi;
use crate::cli::args::{OutputFormat, SlugArgs, VideoArgs, VideosArgs};
use crate::error::{DrNuError, Result};
use crate::output;

/// Handle the videos command
pub fn videos(api: &DrNuApi, args: &VideosArgs, format: OutputFormat) -> Result<String> {
    let category = args.category.to_category();
    let videos = api.videos(category)?;

    let title = format!("Videos: {category}");
    output::format_videos(&title, &videos, format)
}

/// Handle the series-videos command
pub fn series_videos(api: &DrNuApi, args: &SlugArgs, format: OutputFormat) -> Result<String> {
    let videos = api.program_series_videos(&args.slug)?;

    let title = format!("Videos in {}", args.slug);
    output::format_videos(&title, &videos, format)
}

/// Handle the video command
pub fn video(api: &DrNuApi, args: &VideoArgs, format: OutputFormat) -> Result<String> {
    let video = api
        .video_by_id(args.id)?
        .ok_or_else(|| DrNuError::NotFound(format!("video {}", args.id)))?;

    output::format_video(&video, format)
}

/// Handle the resource command
pub fn resource(api: &DrNuApi, args: &VideoArgs) -> Result<String> {
    let video = api
        .video_by_id(args.id)?
        .ok_or_else(|| DrNuError::NotFound(format!("video {}", args.id)))?;

    let resource = api.video_resource(&video)?;
    output::json::format_json(&resource)
}

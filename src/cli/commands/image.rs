use crate::api::images;
use crate::cli::args::{ImageArgs, ImageKind, OutputFormat};
use crate::config::Config;
use crate::error::{DrNuError, Result};

/// Handle the image command
///
/// Only formats a URL; no request is made.
pub fn image(config: &Config, args: &ImageArgs, format: OutputFormat) -> Result<String> {
    if args.width == 0 || args.height == Some(0) {
        return Err(DrNuError::invalid("image dimensions must be positive"));
    }

    let base = config.base_url()?;
    let url = match args.kind {
        ImageKind::Series => {
            images::program_series_image_url(&base, &args.id, args.width, args.height)
        }
        ImageKind::Video => images::video_image_url(&base, parse_id(&args.id)?, args.width, args.height),
        ImageKind::Chapter => {
            images::chapter_image_url(&base, parse_id(&args.id)?, args.width, args.height)
        }
    };

    match format {
        OutputFormat::Pretty => Ok(url),
        OutputFormat::Json => {
            let result = serde_json::json!({ "url": url });
            Ok(serde_json::to_string_pretty(&result)?)
        }
    }
}

fn parse_id(id: &str) -> Result<u64> {
    id.parse()
        .map_err(|_| DrNuError::invalid(format!("expected a numeric id, got '{id}'")))
}

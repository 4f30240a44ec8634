use crate::api::DrNuApi;
use crate::cli::args::{OutputFormat, SearchArgs};
use crate::error::Result;
use crate::output;

/// Handle the search command
pub fn search(api: &DrNuApi, args: &SearchArgs, format: OutputFormat) -> Result<String> {
    let results = api.search(args.term.trim(), args.limit)?;

    let title = format!("Search: {}", args.term.trim());
    output::format_videos(&title, &results, format)
}

use crate::api::{DrNuApi, SeriesFilter};
use crate::cli::args::{OutputFormat, SeriesArgs, SlugArgs};
use crate::error::{DrNuError, Result};
use crate::output;

/// Handle the series command
pub fn series(api: &DrNuApi, args: &SeriesArgs, format: OutputFormat) -> Result<String> {
    let filter = SeriesFilter {
        slugs: (!args.slugs.is_empty()).then(|| args.slugs.clone()),
        label: args.label.clone(),
    };

    let series = api.program_series(&filter)?;
    output::format_series_list(&series, format)
}

/// Handle the series-info command
pub fn series_info(api: &DrNuApi, args: &SlugArgs, format: OutputFormat) -> Result<String> {
    let serie = api
        .program_series_info(&args.slug)?
        .ok_or_else(|| DrNuError::NotFound(format!("program series '{}'", args.slug)))?;

    output::format_series(&serie, format)
}

/// Handle the labels command
pub fn labels(api: &DrNuApi, format: OutputFormat) -> Result<String> {
    let labels = api.program_series_labels()?;
    output::format_labels(&labels, format)
}

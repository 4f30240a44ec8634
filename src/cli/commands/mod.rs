mod cache;
mod config;
mod image;
mod search;
mod series;
mod videos;

pub use self::cache::cache;
pub use self::config::config;
pub use self::image::image;
pub use self::search::search;
pub use self::series::{labels, series, series_info};
pub use self::videos::{resource, series_videos, video, videos};

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ApiConfig, CacheConfig, Config, OutputConfig, DEFAULT_BASE_URL};

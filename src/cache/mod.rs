//! On-disk response cache
//!
//! Raw API responses are stored as plain JSON files inside a single cache
//! directory, one file per cache key. The age of a file (its modification
//! time) decides whether it is trusted; nothing is evicted automatically.

mod key;
mod store;

pub use key::CacheKey;
pub use store::{CacheEntryStatus, CacheStore};

//! Keyed query cache with freshness windows and single-flight fetches.

pub mod query_cache;

pub use query_cache::{FetchResult, QueryCache};

//! Layered configuration loading.

mod loader;

pub use loader::{ConfigError, ConfigLoader};

//! Domain models shared across the client.

pub mod config;
pub mod filters;
pub mod property;
pub mod user;

pub use config::{ApiConfig, CacheConfig, Config, LoggingConfig, RetryConfig, StorageConfig};
pub use filters::SearchFilters;
pub use property::{
    AgentContact, Features, ListingStatus, Location, NewProperty, Property, PropertyPatch,
    PropertyType,
};
pub use user::{AuthResponse, Credentials, Role, User};

//! Hearth - Real-Estate Listings Client SDK
//!
//! Hearth is an async client for a real-estate listings service: typed
//! property search with client-side filtering, a keyed query cache with
//! stale-while-revalidate and single-flight semantics, and a token-based
//! auth session store.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Pure data models, filter predicates, and ports
//! - **Adapters Layer** (`adapters`): HTTP repository, query cache, token storage
//! - **Service Layer** (`services`): Search orchestration and session management
//! - **Infrastructure Layer** (`infrastructure`): Configuration and logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use hearth::services::SearchOrchestrator;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Build a repository, wrap it in an orchestrator, issue a search
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::cache::QueryCache;
pub use adapters::http::{HttpAuthApi, HttpPropertyRepository, RetryPolicy};
pub use adapters::storage::{FileTokenStorage, MemoryTokenStorage};
pub use domain::errors::{ApiError, ApiResult};
pub use domain::filter::matches;
pub use domain::models::{
    AgentContact, ApiConfig, AuthResponse, CacheConfig, Config, Credentials, Features,
    ListingStatus, Location, LoggingConfig, NewProperty, Property, PropertyPatch, PropertyType,
    RetryConfig, Role, SearchFilters, StorageConfig, User,
};
pub use domain::ports::{AuthApi, PropertyRepository, TokenStorage};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{AuthState, SearchOrchestrator, SearchOutcome, SearchSnapshot, SessionStore};

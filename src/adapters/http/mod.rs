//! HTTP implementations of the listings and auth ports, built on reqwest.

pub mod auth;
pub mod properties;
pub mod retry;

pub use auth::HttpAuthApi;
pub use properties::HttpPropertyRepository;
pub use retry::RetryPolicy;

//! Ports implemented by adapters: the listings API, the auth API, and
//! durable client storage.

pub mod auth_api;
pub mod property_repository;
pub mod token_storage;

pub use auth_api::AuthApi;
pub use property_repository::PropertyRepository;
pub use token_storage::{TokenStorage, KEY_REFRESH_TOKEN, KEY_TOKEN, KEY_USER};

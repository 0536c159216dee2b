//! Adapters: concrete implementations of the domain ports plus the
//! query cache that sits between services and the HTTP repository.

pub mod cache;
pub mod http;
pub mod storage;

//! CLI command implementations.

pub mod auth;
pub mod featured;
pub mod listing;
pub mod map;
pub mod search;
pub mod show;

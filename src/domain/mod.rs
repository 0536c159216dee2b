//! Domain layer: pure data models, the filter predicate engine,
//! validation, errors, and the ports implemented by adapters.

pub mod errors;
pub mod filter;
pub mod models;
pub mod ports;
pub mod validation;

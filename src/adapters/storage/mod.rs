//! Durable client storage implementations.

pub mod file;
pub mod memory;

pub use file::FileTokenStorage;
pub use memory::MemoryTokenStorage;

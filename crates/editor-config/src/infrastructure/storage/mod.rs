//! Storage infrastructure: durable key-value adapters.
//!
//! The store persists exactly one value, the active locale code, through the
//! [`KeyValueStorage`](crate::KeyValueStorage) trait.  Two adapters exist:
//!
//! - [`file::TomlFileStorage`] – a flat string table in a TOML file under the
//!   platform config directory.  Survives restarts.
//! - [`memory::MemoryStorage`] – an in-memory map.  Used by tests and by
//!   embedders that do not want anything written to disk.

pub mod file;
pub mod memory;

pub use file::TomlFileStorage;
pub use memory::MemoryStorage;

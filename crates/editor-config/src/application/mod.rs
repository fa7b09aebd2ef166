//! Application layer of the configuration store.
//!
//! # What lives here?
//!
//! - **`config_store`** – [`config_store::ConfigStore`]: the record, its read-only and
//!   derived views, the named setters, and the construction-time locale
//!   cascade.
//! - **`collaborators`** – the traits the store talks to (durable storage,
//!   locale loading, default timezone) and their error types.  Concrete
//!   adapters are injected at construction time.
//! - **`locale_load`** – the fire-and-forget handle returned by `set_locale`.
//! - **`snapshot`** – the owned value published to change subscribers.

pub mod collaborators;
pub mod config_store;
pub mod locale_load;
pub mod snapshot;

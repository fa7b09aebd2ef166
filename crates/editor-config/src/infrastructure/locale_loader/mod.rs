//! Locale loader adapters.
//!
//! Catalog management belongs to the embedding application's i18n layer;
//! the store only needs something that implements
//! [`LocaleLoader`](crate::LocaleLoader).  The [`mock::MockLocaleLoader`]
//! here is always compiled so tests and headless tools can wire a store
//! without an i18n layer.

pub mod mock;

pub use mock::MockLocaleLoader;

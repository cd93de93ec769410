//! API clients for external services
//!
//! - Catalog: the remote content catalog (id -> playable entry)

pub mod catalog;

pub use catalog::{CatalogClient, TransportError, DEFAULT_CATALOG_URL};

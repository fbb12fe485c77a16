//! Infrastructure layer: local persistence.

pub mod store;

pub use store::{CatalogStore, KvStore, PRODUCTS_KEY};

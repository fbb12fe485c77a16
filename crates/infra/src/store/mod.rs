//! SQLite-backed key-value storage for the catalog.

pub mod catalog;
pub mod kv;

pub use catalog::{CatalogStore, PRODUCTS_KEY};
pub use kv::{KvStore, store_db_path};

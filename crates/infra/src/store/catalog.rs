//! Persisted catalog storage on top of the key-value store.

use anyhow::Context;

use coletor_catalog::Catalog;

use crate::store::kv::KvStore;

/// Storage key holding the JSON-serialized product catalog.
pub const PRODUCTS_KEY: &str = "coletor:products";

/// Typed access to the persisted catalog.
///
/// The catalog is written wholesale on each successful import and read
/// once at startup; there are no partial updates.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    kv: KvStore,
}

impl CatalogStore {
    pub fn new(kv: KvStore) -> Self {
        Self { kv }
    }

    /// Load the persisted catalog, if one has been imported before.
    pub async fn load(&self) -> anyhow::Result<Option<Catalog>> {
        let Some(data) = self.kv.get(PRODUCTS_KEY).await? else {
            return Ok(None);
        };

        let catalog: Catalog =
            serde_json::from_str(&data).context("failed to deserialize persisted catalog")?;
        tracing::debug!(products = catalog.len(), "loaded persisted catalog");

        Ok(Some(catalog))
    }

    /// Persist `catalog` wholesale, replacing any previous one.
    pub async fn save(&self, catalog: &Catalog) -> anyhow::Result<()> {
        let payload = serde_json::to_string(catalog).context("failed to serialize catalog")?;
        self.kv.put(PRODUCTS_KEY, &payload).await?;
        tracing::debug!(products = catalog.len(), "persisted catalog");

        Ok(())
    }

    /// Drop the persisted catalog.
    pub async fn clear(&self) -> anyhow::Result<()> {
        self.kv.delete(PRODUCTS_KEY).await
    }
}

//! Application state: catalog + session owned by a single controller.

use std::path::Path;

use anyhow::Context;

use coletor_catalog::{Catalog, Product, Session, parse_catalog};
use coletor_core::DomainResult;
use coletor_infra::CatalogStore;

/// Owns the mutable application state (the catalog and the session's
/// selection list) plus the persistence handle. Query/update operations
/// borrow the controller explicitly.
#[derive(Debug)]
pub struct AppController {
    catalog: Catalog,
    session: Session,
    store: CatalogStore,
}

impl AppController {
    pub fn new(store: CatalogStore) -> Self {
        Self {
            catalog: Catalog::new(),
            session: Session::new(),
            store,
        }
    }

    /// One-time startup step: restore the persisted catalog.
    ///
    /// Runs to completion before the first user interaction. An absent
    /// store yields an empty catalog.
    pub async fn init(&mut self) -> anyhow::Result<()> {
        if let Some(catalog) = self.store.load().await.context("failed to restore catalog")? {
            self.catalog = catalog;
        }
        tracing::info!(products = self.catalog.len(), "catalog restored");

        Ok(())
    }

    /// Import catalog CSV text: parse, persist wholesale, replace the
    /// in-memory catalog. Returns the record count.
    pub async fn import_text(&mut self, text: &str) -> anyhow::Result<usize> {
        let catalog = parse_catalog(text);
        self.store
            .save(&catalog)
            .await
            .context("failed to persist imported catalog")?;
        tracing::info!(products = catalog.len(), "catalog imported");
        self.catalog = catalog;

        Ok(self.catalog.len())
    }

    /// Read `path` as UTF-8 text and import it.
    pub async fn import_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<usize> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read catalog file {path:?}"))?;

        self.import_text(&text).await
    }

    /// Look up a scanned code; a match is appended to the session's
    /// selection list.
    pub fn scan(&mut self, code: &str) -> DomainResult<Product> {
        self.session.scan(&self.catalog, code)
    }

    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }

    pub fn selected(&self) -> &[Product] {
        self.session.selected()
    }

    /// Clear both the persisted and the in-memory catalog. The session's
    /// selection list is untouched.
    pub async fn clear_catalog(&mut self) -> anyhow::Result<()> {
        self.store
            .clear()
            .await
            .context("failed to clear persisted catalog")?;
        self.catalog = Catalog::new();
        tracing::info!("catalog cleared");

        Ok(())
    }
}

//! Session-scoped selection list fed by successful lookups.

use coletor_core::{DomainError, DomainResult};

use crate::catalog::Catalog;
use crate::product::Product;

/// Append-only list of matched products for the current session.
///
/// Starts empty, grows by append only. Never persisted, never
/// deduplicated, never removed from.
#[derive(Debug, Default)]
pub struct Session {
    selected: Vec<Product>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `code` in `catalog` and append the match to the selection
    /// list, returning a copy of the matched record.
    ///
    /// A miss returns [`DomainError::NotFound`] and leaves the list
    /// unchanged. Matches are not deduplicated: scanning the same code
    /// twice appends two entries.
    pub fn scan(&mut self, catalog: &Catalog, code: &str) -> DomainResult<Product> {
        let product = catalog.find_by_ean(code).ok_or(DomainError::NotFound)?;
        self.selected.push(product.clone());
        Ok(product.clone())
    }

    pub fn selected(&self) -> &[Product] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

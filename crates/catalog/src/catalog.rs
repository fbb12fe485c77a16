//! Imported product catalog: an ordered record sequence with linear lookup.

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// The full imported product list.
///
/// A catalog is created wholesale on import (replacing any prior catalog)
/// and loaded from persistent storage at startup; it is never partially
/// updated. EANs are expected unique within a catalog but this is not
/// enforced: lookups return the first match in file order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Linear scan for the first record whose EAN equals `code` exactly
    /// (case-sensitive, byte-exact).
    pub fn find_by_ean(&self, code: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.ean.matches(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coletor_core::Ean;

    fn product(id: &str, ean: &str, description: &str) -> Product {
        Product {
            id: id.to_string(),
            ean: Ean::new(ean),
            description: description.to_string(),
            manufacturer: "Acme".to_string(),
            quantity: "1".to_string(),
        }
    }

    #[test]
    fn find_by_ean_returns_first_match_in_file_order() {
        let catalog = Catalog::from_products(vec![
            product("1", "789", "first"),
            product("2", "790", "other"),
            product("3", "789", "duplicate"),
        ]);

        let found = catalog.find_by_ean("789").unwrap();
        assert_eq!(found.description, "first");
    }

    #[test]
    fn find_by_ean_is_exact_and_case_sensitive() {
        let catalog = Catalog::from_products(vec![product("1", "78a9", "item")]);

        assert!(catalog.find_by_ean("78a9").is_some());
        assert!(catalog.find_by_ean("78A9").is_none());
        assert!(catalog.find_by_ean("78a").is_none());
        assert!(catalog.find_by_ean("78a99").is_none());
    }

    #[test]
    fn serializes_as_a_bare_json_array() {
        let catalog = Catalog::from_products(vec![product("1", "789", "Soap")]);

        let json = serde_json::to_string(&catalog).unwrap();
        assert!(json.starts_with('['), "expected a JSON array, got: {json}");

        let back: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, catalog);
    }

    #[test]
    fn empty_catalog_finds_nothing() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.find_by_ean("789").is_none());
    }
}

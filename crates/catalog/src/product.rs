//! Product record as ingested from catalog CSV rows.

use serde::{Deserialize, Serialize};

use coletor_core::Ean;

/// A single catalog record.
///
/// Fields mirror the positional CSV layout
/// (`id,ean,description,manufacturer,quantity`). `quantity` stays the raw
/// CSV text: the source data is not trusted to hold a parseable number and
/// nothing downstream does arithmetic on it.
///
/// Rows shorter than five fields are accepted; the missing fields default
/// to empty, both on import and when deserializing a previously persisted
/// catalog.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: String,
    pub ean: Ean,
    pub description: String,
    pub manufacturer: String,
    pub quantity: String,
}

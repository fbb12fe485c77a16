//! CSV catalog ingestion.
//!
//! The import contract is deliberately permissive and positional: any
//! line-ending convention, fields split on bare commas, every double-quote
//! character stripped. There is no header detection, no delimiter escaping
//! inside quotes, and no numeric coercion — a quoted field containing a
//! comma splits into two fields. Short rows pad their missing fields with
//! empty strings; extra fields are discarded.

use crate::catalog::Catalog;
use crate::product::Product;

/// Parse raw CSV text into a new catalog.
///
/// Lines are recognized on CRLF, LF or bare CR. Fully empty lines produce
/// no record, so a file with N non-empty lines yields exactly N records in
/// file order regardless of the line-ending convention or a trailing
/// newline.
pub fn parse_catalog(text: &str) -> Catalog {
    let products = text
        .split(['\r', '\n'])
        .filter(|line| !line.is_empty())
        .map(parse_row)
        .collect();

    Catalog::from_products(products)
}

/// Map one raw line to a product record.
///
/// The first five comma-separated fields are positional:
/// `id,ean,description,manufacturer,quantity`.
fn parse_row(line: &str) -> Product {
    let mut fields = line.split(',').map(|field| field.replace('"', ""));

    Product {
        id: fields.next().unwrap_or_default(),
        ean: fields.next().unwrap_or_default().into(),
        description: fields.next().unwrap_or_default(),
        manufacturer: fields.next().unwrap_or_default(),
        quantity: fields.next().unwrap_or_default(),
    }
}

//! Strongly-typed barcode identifier used across the domain.

use serde::{Deserialize, Serialize};

/// An EAN barcode as it appeared in the source data.
///
/// This is an opaque string, not a validated article number: catalogs are
/// ingested permissively, so the value may be empty or malformed. Matching
/// against scanned input is byte-exact and case-sensitive.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ean(String);

impl Ean {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact, case-sensitive comparison against scanned input.
    pub fn matches(&self, code: &str) -> bool {
        self.0 == code
    }
}

impl core::fmt::Display for Ean {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<String> for Ean {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Ean {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for Ean {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_is_exact_and_case_sensitive() {
        let ean = Ean::new("7891000100103");
        assert!(ean.matches("7891000100103"));
        assert!(!ean.matches("7891000100104"));
        assert!(!ean.matches("789100010010"));

        let alpha = Ean::new("abc123");
        assert!(alpha.matches("abc123"));
        assert!(!alpha.matches("ABC123"));
    }

    #[test]
    fn serializes_as_a_bare_string() {
        let ean = Ean::new("7891000100103");
        let json = serde_json::to_string(&ean).unwrap();
        assert_eq!(json, "\"7891000100103\"");

        let back: Ean = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ean);
    }
}

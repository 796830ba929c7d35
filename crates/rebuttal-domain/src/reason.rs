//! Denial-code reason table

use std::collections::HashMap;

/// Reason text used when a CARC has no table entry
pub const UNRESOLVED_REASON: &str = "No predefined reason available.";

/// Immutable mapping from denial codes (CARC or RARC) to short labels.
///
/// Built once at startup from configuration and shared read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReasonTable {
    labels: HashMap<String, String>,
}

impl ReasonTable {
    /// The built-in table shipped with Rebuttal
    pub fn standard() -> Self {
        [
            ("CO-50", "Medical Neccesity"),
            ("CO-45", "Coding Error"),
            ("N10", "Payment based on the findings of a review organization"),
            ("N30", "Patient ineligible for this service"),
        ]
        .into_iter()
        .collect()
    }

    /// Label for `code`, if the table has one
    pub fn label(&self, code: &str) -> Option<&str> {
        self.labels.get(code).map(String::as_str)
    }

    /// Number of codes in the table
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate over `(code, label)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.labels.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for ReasonTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            labels: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

//! Clinical documents - schemaless trees of text

/// A clinical note as an untyped tree.
///
/// Notes arrive with no fixed schema: sections may hold plain text, nested
/// sections, or lists of either. Mapping entries keep their insertion order
/// so that traversal is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClinicalDocument {
    /// Keyed sub-documents, in insertion order
    Mapping(Vec<(String, ClinicalDocument)>),

    /// Ordered sub-documents
    Sequence(Vec<ClinicalDocument>),

    /// Free text
    Leaf(String),
}

impl ClinicalDocument {
    /// Build a mapping node from key/value pairs.
    pub fn mapping<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, ClinicalDocument)>,
    {
        Self::Mapping(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Build a sequence node.
    pub fn sequence<I>(items: I) -> Self
    where
        I: IntoIterator<Item = ClinicalDocument>,
    {
        Self::Sequence(items.into_iter().collect())
    }

    /// Build a leaf node.
    pub fn leaf(text: impl Into<String>) -> Self {
        Self::Leaf(text.into())
    }

    /// Look up a direct child of a mapping node by key.
    ///
    /// Returns `None` for sequences, leaves, and missing keys. When a key is
    /// repeated the first entry wins.
    pub fn get(&self, key: &str) -> Option<&ClinicalDocument> {
        match self {
            Self::Mapping(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// The text of a leaf node.
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Self::Leaf(text) => Some(text),
            _ => None,
        }
    }

    /// Visit every leaf depth-first: mapping entries in insertion order,
    /// sequence items in element order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuttal_domain::ClinicalDocument;
    ///
    /// let note = ClinicalDocument::mapping([
    ///     ("CC", ClinicalDocument::leaf("Shoulder pain.")),
    ///     ("Plan", ClinicalDocument::sequence([
    ///         ClinicalDocument::leaf("X-ray."),
    ///         ClinicalDocument::leaf("PT referral."),
    ///     ])),
    /// ]);
    ///
    /// let mut seen = Vec::new();
    /// note.visit_leaves(&mut |text| seen.push(text.to_string()));
    /// assert_eq!(seen, ["Shoulder pain.", "X-ray.", "PT referral."]);
    /// ```
    pub fn visit_leaves<F>(&self, visit: &mut F)
    where
        F: FnMut(&str),
    {
        match self {
            Self::Mapping(entries) => {
                for (_, child) in entries {
                    child.visit_leaves(visit);
                }
            }
            Self::Sequence(items) => {
                for child in items {
                    child.visit_leaves(visit);
                }
            }
            Self::Leaf(text) => visit(text),
        }
    }

    /// Number of leaves in the tree
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        self.visit_leaves(&mut |_| count += 1);
        count
    }
}

impl From<&str> for ClinicalDocument {
    fn from(text: &str) -> Self {
        Self::Leaf(text.to_string())
    }
}

impl From<String> for ClinicalDocument {
    fn from(text: String) -> Self {
        Self::Leaf(text)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: wrapping leaves in arbitrarily deep sequences keeps their order
        #[test]
        fn test_nesting_preserves_leaf_order(
            leaves in proptest::collection::vec("[a-z ]{0,12}", 0..8),
            depth in 0usize..6,
        ) {
            let mut doc = ClinicalDocument::sequence(
                leaves.iter().cloned().map(ClinicalDocument::Leaf),
            );
            for level in 0..depth {
                doc = if level % 2 == 0 {
                    ClinicalDocument::sequence([doc])
                } else {
                    ClinicalDocument::mapping([("section", doc)])
                };
            }

            let mut seen = Vec::new();
            doc.visit_leaves(&mut |t| seen.push(t.to_string()));
            prop_assert_eq!(seen, leaves);
        }
    }
}

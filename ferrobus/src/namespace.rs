//! Namespace table: URI array indexed by `u16`.
//!
//! Node identifiers carry a namespace index rather than a full URI; this
//! table maps between the two. Index 0 is always the standard namespace.

/// URI of the standard namespace, always present at index 0.
pub const STANDARD_NAMESPACE_URI: &str = "urn:ferrobus:standard";

/// Mapping between namespace URIs and the `u16` indices used in node
/// identifiers.
///
/// Seeded once at client construction from configuration. Lookups are by
/// position: the first URI is index 0, the second index 1, and so on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceTable {
    uris: Vec<String>,
}

impl NamespaceTable {
    /// Create a table containing only the standard namespace.
    pub fn new() -> Self {
        Self {
            uris: vec![STANDARD_NAMESPACE_URI.to_string()],
        }
    }

    /// Create a table with the standard namespace plus additional URIs in
    /// order. Duplicates of already-present URIs are skipped.
    pub fn with_uris(uris: &[String]) -> Self {
        let mut table = Self::new();
        for uri in uris {
            table.add(uri.clone());
        }
        table
    }

    /// Register a URI, returning its index.
    ///
    /// If the URI is already present its existing index is returned instead
    /// of adding a duplicate entry.
    pub fn add(&mut self, uri: String) -> u16 {
        if let Some(index) = self.index_of(&uri) {
            return index;
        }
        self.uris.push(uri);
        (self.uris.len() - 1) as u16
    }

    /// Look up the URI registered at `index`.
    pub fn uri(&self, index: u16) -> Option<&str> {
        self.uris.get(index as usize).map(String::as_str)
    }

    /// Look up the index of `uri`.
    pub fn index_of(&self, uri: &str) -> Option<u16> {
        self.uris.iter().position(|u| u == uri).map(|i| i as u16)
    }

    /// Number of registered namespaces.
    pub fn len(&self) -> usize {
        self.uris.len()
    }

    /// Whether the table is empty. Never true in practice: the standard
    /// namespace is always present.
    pub fn is_empty(&self) -> bool {
        self.uris.is_empty()
    }
}

impl Default for NamespaceTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_namespace_at_index_zero() {
        let table = NamespaceTable::new();
        assert_eq!(table.uri(0), Some(STANDARD_NAMESPACE_URI));
        assert_eq!(table.index_of(STANDARD_NAMESPACE_URI), Some(0));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_add_assigns_sequential_indices() {
        let mut table = NamespaceTable::new();
        assert_eq!(table.add("urn:plant:line-1".to_string()), 1);
        assert_eq!(table.add("urn:plant:line-2".to_string()), 2);
        assert_eq!(table.uri(2), Some("urn:plant:line-2"));
    }

    #[test]
    fn test_add_deduplicates() {
        let mut table = NamespaceTable::new();
        let first = table.add("urn:plant:line-1".to_string());
        let second = table.add("urn:plant:line-1".to_string());
        assert_eq!(first, second);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_with_uris_seeds_in_order() {
        let table = NamespaceTable::with_uris(&[
            "urn:plant:line-1".to_string(),
            "urn:plant:line-2".to_string(),
        ]);
        assert_eq!(table.index_of("urn:plant:line-1"), Some(1));
        assert_eq!(table.index_of("urn:plant:line-2"), Some(2));
    }

    #[test]
    fn test_unknown_lookups() {
        let table = NamespaceTable::new();
        assert_eq!(table.uri(5), None);
        assert_eq!(table.index_of("urn:unknown"), None);
    }
}

//! Containment search over the catalog.
//!
//! Matching is deliberately plain: the query, trimmed and lowercased, is
//! looked for as a substring of each entry's haystack (label, description
//! and keywords, lowercased and space-joined). No fuzzy matching, no
//! scoring; ties keep catalog order. The haystacks are precomputed once
//! because the catalog never changes, so per-keystroke matching does not
//! allocate per entry.

use crate::catalog::{Catalog, SearchEntry};

/// Maximum number of rows the results dropdown shows.
pub const MAX_RESULTS: usize = 8;

/// Queryable view over the catalog: one precomputed lowercase haystack
/// per entry, in catalog order.
pub struct SearchIndex {
    catalog: Catalog,
    haystacks: Vec<String>,
}

impl SearchIndex {
    pub fn build(catalog: Catalog) -> Self {
        let haystacks = catalog.entries().iter().map(haystack).collect();
        SearchIndex { catalog, haystacks }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Match entries against a raw query.
    ///
    /// Pure and deterministic; safe to call on every keystroke. An empty
    /// or whitespace-only query returns the first [`MAX_RESULTS`] catalog
    /// entries unfiltered.
    pub fn matches(&self, query: &str) -> Vec<&SearchEntry> {
        let q = normalize(query);
        if q.is_empty() {
            return self.catalog.entries().iter().take(MAX_RESULTS).collect();
        }
        self.catalog
            .entries()
            .iter()
            .zip(&self.haystacks)
            .filter(|(_, haystack)| haystack.contains(&q))
            .map(|(entry, _)| entry)
            .take(MAX_RESULTS)
            .collect()
    }
}

/// Normalized form of a query: trimmed and lowercased.
fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}

fn haystack(entry: &SearchEntry) -> String {
    format!(
        "{} {} {}",
        entry.label,
        entry.description,
        entry.keywords.join(" ")
    )
    .to_lowercase()
}

//! Session collection: append-only, unique by name, insertion order kept.

use std::collections::HashSet;

use super::item::CatalogItem;

#[derive(Debug, Clone, Default)]
pub struct SessionCollection {
    items: Vec<CatalogItem>,
    names: HashSet<String>,
}

impl SessionCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends, in order, every item whose name is not present yet. Returns how many were added.
    ///
    /// Duplicates inside `page` itself are collapsed too; the first occurrence wins.
    pub fn merge<I>(&mut self, page: I) -> usize
    where
        I: IntoIterator<Item = CatalogItem>,
    {
        let before = self.items.len();
        for item in page {
            if self.names.insert(item.name.clone()) {
                self.items.push(item);
            }
        }
        self.items.len() - before
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items whose name matches `query`, in collection order.
    pub fn filter<'a>(&'a self, query: &'a FilterQuery) -> impl Iterator<Item = &'a CatalogItem> + 'a {
        self.items.iter().filter(move |item| query.matches(&item.name))
    }
}

/// Lower-cased substring query. Normalised once on construction so every
/// comparison sees the same form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery(String);

impl FilterQuery {
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Empty query matches everything.
    pub fn matches(&self, name: &str) -> bool {
        self.0.is_empty() || name.to_lowercase().contains(&self.0)
    }
}

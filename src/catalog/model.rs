use std::collections::HashMap;

use crate::catalog::category::Category;
use crate::foundation::error::{LoopreelError, LoopreelResult};

/// Display metadata for one animation. Pure data.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CatalogEntry {
    pub key: String,
    pub label: String,
    pub description: String,
    pub category: Category,
    /// Short badge token, e.g. `IDX`.
    pub icon: String,
    /// The visual is a metaphor rather than a literal depiction of the mechanism.
    pub metaphor: bool,
}

impl CatalogEntry {
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        category: Category,
        icon: impl Into<String>,
        metaphor: bool,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            description: description.into(),
            category,
            icon: icon.into(),
            metaphor,
        }
    }
}

/// Immutable key -> entry mapping that remembers declaration order.
#[derive(Clone, Debug)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog; keys must be non-empty and unique.
    pub fn new(entries: Vec<CatalogEntry>) -> LoopreelResult<Self> {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, e) in entries.iter().enumerate() {
            if e.key.trim().is_empty() {
                return Err(LoopreelError::validation("catalog key must be non-empty"));
            }
            if index.insert(e.key.clone(), i).is_some() {
                return Err(LoopreelError::validation(format!(
                    "duplicate catalog key '{}'",
                    e.key
                )));
            }
        }
        Ok(Self { entries, index })
    }

    pub fn lookup(&self, key: &str) -> LoopreelResult<&CatalogEntry> {
        self.index
            .get(key)
            .map(|&i| &self.entries[i])
            .ok_or_else(|| LoopreelError::unknown_key(key))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// All entries in declaration order.
    pub fn list_all(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Entries of one category, preserving declaration order.
    pub fn list_by_category(&self, category: Category) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter().filter(move |e| e.category == category)
    }

    /// `None` lists everything.
    pub fn list_filtered(&self, filter: Option<Category>) -> Vec<&CatalogEntry> {
        match filter {
            Some(c) => self.list_by_category(c).collect(),
            None => self.entries.iter().collect(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/model.rs"]
mod tests;

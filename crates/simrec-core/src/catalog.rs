//! Ordered item catalog
//!
//! Row order is the join key into the similarity matrix: an item's row index
//! is fixed once it is appended, and appends never reorder or drop rows.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::bail_invalid_item;
use crate::error::{Result, SimrecError};

/// Prefix for identifiers assigned to items that arrive without one
pub const SYNTHETIC_ID_PREFIX: &str = "custom_";

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique within a catalog; empty means "assign one on append"
    #[serde(default)]
    pub id: String,
    pub title: String,
    /// Whitespace-joined feature text
    #[serde(default)]
    pub tags: String,
}

impl Item {
    pub fn new(id: impl Into<String>, title: impl Into<String>, tags: impl Into<String>) -> Self {
        Item {
            id: id.into(),
            title: title.into(),
            tags: tags.into(),
        }
    }

    /// An item whose identifier is assigned by the catalog
    pub fn without_id(title: impl Into<String>, tags: impl Into<String>) -> Self {
        Item::new(String::new(), title, tags)
    }
}

/// Ordered, append-only sequence of items
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    /// First row for each title
    by_title: HashMap<String, usize>,
    ids: HashSet<String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a catalog from persisted rows, keeping their order
    pub fn from_items(items: Vec<Item>) -> Result<Self> {
        let mut catalog = Catalog::new();
        for (index, item) in items.iter().enumerate() {
            if item.id.is_empty() {
                bail_invalid_item!(index, "missing id");
            }
            if catalog.ids.contains(&item.id) {
                bail_invalid_item!(index, format!("duplicate id '{}'", item.id));
            }
            catalog.index_row(item, index);
        }
        catalog.items = items;
        Ok(catalog)
    }

    /// Append `items` in order, returning the new catalog size
    ///
    /// Items with an empty id get a synthetic `custom_<n>` identifier. The
    /// batch is checked in full before anything is appended, so a rejected
    /// batch leaves the catalog untouched.
    pub fn append(&mut self, items: Vec<Item>) -> Result<usize> {
        self.validate_batch(&items)?;

        let reserved: HashSet<String> = items
            .iter()
            .filter(|item| !item.id.is_empty())
            .map(|item| item.id.clone())
            .collect();

        for mut item in items {
            if item.id.is_empty() {
                item.id = self.next_synthetic_id(&reserved);
            }
            let row = self.items.len();
            self.index_row(&item, row);
            self.items.push(item);
        }

        Ok(self.items.len())
    }

    fn validate_batch(&self, items: &[Item]) -> Result<()> {
        let mut batch_ids = HashSet::new();
        for (index, item) in items.iter().enumerate() {
            if item.title.trim().is_empty() {
                bail_invalid_item!(index, "missing title");
            }
            if item.id.is_empty() {
                continue;
            }
            if self.ids.contains(&item.id) {
                bail_invalid_item!(index, format!("id '{}' already in catalog", item.id));
            }
            if !batch_ids.insert(item.id.as_str()) {
                bail_invalid_item!(index, format!("duplicate id '{}' in batch", item.id));
            }
        }
        Ok(())
    }

    /// `custom_<n>` with `n` the 1-based row the next item will occupy,
    /// bumped past identifiers that are already taken or reserved by the batch
    fn next_synthetic_id(&self, reserved: &HashSet<String>) -> String {
        let mut n = self.items.len() + 1;
        loop {
            let candidate = format!("{}{}", SYNTHETIC_ID_PREFIX, n);
            if !self.ids.contains(&candidate) && !reserved.contains(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    fn index_row(&mut self, item: &Item, row: usize) {
        self.by_title.entry(item.title.clone()).or_insert(row);
        self.ids.insert(item.id.clone());
    }

    /// First item whose title matches exactly (case-sensitive)
    pub fn get_by_title(&self, title: &str) -> Result<&Item> {
        self.row_of(title).map(|row| &self.items[row])
    }

    /// Row index of the first item titled `title`
    pub fn row_of(&self, title: &str) -> Result<usize> {
        self.by_title
            .get(title)
            .copied()
            .ok_or_else(|| SimrecError::not_found(title))
    }

    pub fn get_by_row(&self, row: usize) -> Option<&Item> {
        self.items.get(row)
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Tag strings in row order
    pub fn tags(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.tags.as_str()).collect()
    }
}

//! Item catalog: the fixed, name-sorted set of things that can go into the
//! knapsack.
//!
//! The catalog is loaded once at startup and never mutated. Its length
//! defines the chromosome width `N`, and the position of an item in the
//! name-sorted order is that item's gene index for the whole run. That
//! index assignment is the only link between items and genes, which is why
//! names must be unique and the sort must happen exactly once, at
//! construction.

use crate::error::CatalogError;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// One thing that can be packed: a name, how much room it takes, and what
/// it is worth. Volumes and values are non-negative integers; no floating
/// point is involved anywhere in fitness arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Item {
    pub name: String,
    pub volume: u64,
    pub value: u64,
}

/// An ordered, name-sorted, unique-by-name sequence of [`Item`]s.
///
/// # Construction
///
/// ```
/// use knapsack_ga::{Catalog, Item};
///
/// let catalog = Catalog::new(vec![
///     Item { name: "rope".into(), volume: 10, value: 60 },
///     Item { name: "axe".into(), volume: 20, value: 100 },
/// ]).unwrap();
///
/// // Sorted by name: "axe" gets gene index 0.
/// assert_eq!(catalog.get(0).name, "axe");
/// assert_eq!(catalog.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Builds a catalog from an arbitrary item list.
    ///
    /// Sorts by name ascending and rejects duplicate names and empty input.
    pub fn new(mut items: Vec<Item>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }
        items.sort_by(|a, b| a.name.cmp(&b.name));
        for pair in items.windows(2) {
            if pair[0].name == pair[1].name {
                return Err(CatalogError::DuplicateName(pair[0].name.clone()));
            }
        }
        Ok(Self { items })
    }

    /// Loads a catalog from a headerless, comma-delimited file with one
    /// `name,volume,value` record per line.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Loads a catalog from any reader producing `name,volume,value` lines.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut items = Vec::new();
        for record in csv_reader.deserialize() {
            let item: Item = record?;
            items.push(item);
        }
        log::debug!("loaded {} catalog records", items.len());
        Self::new(items)
    }

    /// Number of items, which is also the chromosome width `N`.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item at gene index `i`.
    ///
    /// # Panics
    /// Panics if `i` is out of range.
    pub fn get(&self, i: usize) -> &Item {
        &self.items[i]
    }

    /// All items in catalog (name) order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }
}

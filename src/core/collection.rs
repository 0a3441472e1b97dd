//! Ordered container of validation failures.

use crate::core::ValidationItem;
use serde::Serialize;
use std::ops::Index;
use std::slice;

/// An ordered, appendable collection of [`ValidationItem`]s.
///
/// Insertion order is preserved and duplicates are allowed: the same
/// property may legitimately appear multiple times when several rules fail
/// on it during one pass. An empty collection means the configuration is
/// valid.
///
/// # Examples
///
/// ```rust
/// use config_vet::core::{ValidationCollection, ValidationItem, Value};
///
/// let mut failures = ValidationCollection::new();
/// failures.push(ValidationItem::new("App", "port", Value::from(0i32), "Port not set"));
///
/// assert_eq!(failures.len(), 1);
/// assert_eq!(failures[0].item(), "port");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationCollection {
    items: Vec<ValidationItem>,
}

impl ValidationCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded failures.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the pass recorded no failures.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&ValidationItem> {
        self.items.get(index)
    }

    /// Append one failure.
    pub fn push(&mut self, item: ValidationItem) {
        self.items.push(item);
    }

    /// Append many failures, preserving their order.
    pub fn extend(&mut self, items: impl IntoIterator<Item = ValidationItem>) {
        self.items.extend(items);
    }

    /// Iterate over the recorded failures in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, ValidationItem> {
        self.items.iter()
    }
}

impl Index<usize> for ValidationCollection {
    type Output = ValidationItem;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl IntoIterator for ValidationCollection {
    type Item = ValidationItem;
    type IntoIter = std::vec::IntoIter<ValidationItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationCollection {
    type Item = &'a ValidationItem;
    type IntoIter = slice::Iter<'a, ValidationItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<ValidationItem> for ValidationCollection {
    fn from_iter<I: IntoIterator<Item = ValidationItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<ValidationItem>> for ValidationCollection {
    fn from(items: Vec<ValidationItem>) -> Self {
        Self { items }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Ordered, read-only image collection.

use super::{ImageId, ImageRecord};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Error raised when building a collection from invalid records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// Two records share the same identity.
    DuplicateId(ImageId),
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionError::DuplicateId(id) => write!(f, "duplicate image id `{id}`"),
        }
    }
}

impl std::error::Error for CollectionError {}

/// Snapshot of the images the viewer can move through.
///
/// Keys are unique and the order is significant. Cloning is cheap (the
/// records live behind an `Arc`), so the viewer keeps its own copy and the
/// provider swaps in a new snapshot whenever the underlying list changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedCollection {
    records: Arc<[ImageRecord]>,
}

impl OrderedCollection {
    /// Builds a collection, rejecting duplicate identities.
    pub fn new(records: Vec<ImageRecord>) -> Result<Self, CollectionError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id()) {
                return Err(CollectionError::DuplicateId(record.id().clone()));
            }
        }
        Ok(Self {
            records: records.into(),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Position of `id` in the collection, if present.
    #[must_use]
    pub fn position(&self, id: &ImageId) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ImageRecord> {
        self.records.get(index)
    }

    #[must_use]
    pub fn find(&self, id: &ImageId) -> Option<&ImageRecord> {
        self.records.iter().find(|record| record.id() == id)
    }

    #[must_use]
    pub fn first(&self) -> Option<&ImageRecord> {
        self.records.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageRecord> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> ImageRecord {
        ImageRecord::new(id, id.to_uppercase(), format!("/shots/{id}.png"), "")
    }

    #[test]
    fn new_keeps_insertion_order() {
        let collection =
            OrderedCollection::new(vec![record("b"), record("a"), record("c")]).unwrap();
        let ids: Vec<_> = collection.iter().map(|r| r.id().as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = OrderedCollection::new(vec![record("a"), record("b"), record("a")]);
        assert_eq!(
            result.unwrap_err(),
            CollectionError::DuplicateId(ImageId::new("a"))
        );
    }

    #[test]
    fn position_and_find_locate_records() {
        let collection = OrderedCollection::new(vec![record("a"), record("b")]).unwrap();
        assert_eq!(collection.position(&ImageId::new("b")), Some(1));
        assert_eq!(collection.position(&ImageId::new("z")), None);
        assert_eq!(
            collection.find(&ImageId::new("a")).map(ImageRecord::display_name),
            Some("A")
        );
    }

    #[test]
    fn default_collection_is_empty() {
        let collection = OrderedCollection::default();
        assert!(collection.is_empty());
        assert!(collection.first().is_none());
    }
}

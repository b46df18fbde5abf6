// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered grouping of items under section keys.

use alloc::vec::Vec;
use core::fmt;
use core::hash::{BuildHasher, Hash};

use hashbrown::{DefaultHashBuilder, HashTable};

use crate::{ItemPosition, SectionIndex, SectionListError};

/// An insertion-ordered map from section keys to the items listed under them.
///
/// Section order is the order in which keys were first inserted; item order within a
/// section is the order of its `Vec`. A section may be empty: it still takes a section
/// index but contributes no rows.
///
/// The [`SectionIndex`] over the section lengths is updated by every mutation, so the
/// flat-position queries on this type are always consistent with its contents.
///
/// ```rust
/// use understory_section_list::Sections;
///
/// let sections: Sections<&str, u32> = [("A", vec![1, 2]), ("B", vec![3])]
///     .into_iter()
///     .collect();
///
/// assert_eq!(sections.len(), 3);
/// assert_eq!(sections.item(2), Some(&3));
/// assert_eq!(sections.key_at(1), Some(&"A"));
/// ```
#[derive(Clone)]
pub struct Sections<K, T> {
    keys: Vec<K>,
    items: Vec<Vec<T>>,
    /// Section indices, hashed by their key.
    slots: HashTable<usize>,
    hasher: DefaultHashBuilder,
    index: SectionIndex,
}

impl<K, T> Sections<K, T> {
    /// Creates an empty grouping.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty grouping with room for `sections` sections.
    #[must_use]
    pub fn with_capacity(sections: usize) -> Self {
        Self {
            keys: Vec::with_capacity(sections),
            items: Vec::with_capacity(sections),
            slots: HashTable::with_capacity(sections),
            hasher: DefaultHashBuilder::default(),
            index: SectionIndex::new(),
        }
    }

    /// Total number of items across all sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if there are no items, even if there are (empty) sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of sections, including empty ones.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.keys.len()
    }

    /// The position index over the current section lengths.
    #[must_use]
    pub fn index(&self) -> &SectionIndex {
        &self.index
    }

    /// Section keys, in section order.
    #[must_use]
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// The key and items of `section`.
    #[must_use]
    pub fn section(&self, section: usize) -> Option<(&K, &[T])> {
        Some((self.keys.get(section)?, self.items.get(section)?.as_slice()))
    }

    /// Iterates sections in order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[T])> {
        self.keys.iter().zip(self.items.iter().map(Vec::as_slice))
    }

    /// Resolves a flat position into its section and offset.
    pub fn locate(&self, position: usize) -> Result<ItemPosition, SectionListError> {
        self.index.locate(position)
    }

    /// The item at flat `position`, or `None` if it is out of range.
    #[must_use]
    pub fn item(&self, position: usize) -> Option<&T> {
        self.try_item(position).ok()
    }

    /// The item at flat `position`.
    pub fn try_item(&self, position: usize) -> Result<&T, SectionListError> {
        let at = self.index.locate(position)?;
        self.entry(at).map(|(_, item)| item)
    }

    /// The section key and item at `at`.
    pub fn entry(&self, at: ItemPosition) -> Result<(&K, &T), SectionListError> {
        let (key, items) = self
            .section(at.section)
            .ok_or(SectionListError::SectionOutOfBounds {
                section: at.section,
                count: self.section_count(),
            })?;
        let item = items
            .get(at.offset)
            .ok_or(SectionListError::OffsetOutOfBounds {
                section: at.section,
                offset: at.offset,
                len: items.len(),
            })?;
        Ok((key, item))
    }

    /// The key of the section owning flat `position`.
    #[must_use]
    pub fn key_at(&self, position: usize) -> Option<&K> {
        self.keys.get(self.index.section_for_position(position)?)
    }

    /// Removes all sections.
    pub fn clear(&mut self) {
        self.keys.clear();
        self.items.clear();
        self.slots.clear();
        self.index.clear();
    }
}

impl<K: Hash + Eq, T> Sections<K, T> {
    /// Sets the items listed under `key`.
    ///
    /// A new key appends a section at the end. An existing key keeps its place and has
    /// its items replaced; the previous items are returned.
    pub fn insert(&mut self, key: K, items: Vec<T>) -> Option<Vec<T>> {
        let hash = self.hasher.hash_one(&key);
        if let Some(&section) = self.slots.find(hash, |&i| self.keys[i] == key) {
            let len = items.len();
            let replaced = core::mem::replace(&mut self.items[section], items);
            // `slots` only holds indices of pushed sections, and the index tracks each
            // section's length.
            self.index.resize_section(section, replaced.len(), len);
            return Some(replaced);
        }

        let section = self.keys.len();
        self.keys.push(key);
        let (keys, hasher) = (&self.keys, &self.hasher);
        self.slots
            .insert_unique(hash, section, |&i| hasher.hash_one(&keys[i]));
        self.index.push(items.len());
        self.items.push(items);
        None
    }

    /// Index of the section keyed by `key`.
    #[must_use]
    pub fn section_index_of(&self, key: &K) -> Option<usize> {
        let hash = self.hasher.hash_one(key);
        self.slots.find(hash, |&i| self.keys[i] == *key).copied()
    }

    /// Items listed under `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&[T]> {
        let section = self.section_index_of(key)?;
        Some(&self.items[section])
    }
}

impl<K, T> Default for Sections<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, T: fmt::Debug> fmt::Debug for Sections<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Hash + Eq, T> Extend<(K, Vec<T>)> for Sections<K, T> {
    fn extend<I: IntoIterator<Item = (K, Vec<T>)>>(&mut self, iter: I) {
        for (key, items) in iter {
            self.insert(key, items);
        }
    }
}

impl<K: Hash + Eq, T> FromIterator<(K, Vec<T>)> for Sections<K, T> {
    fn from_iter<I: IntoIterator<Item = (K, Vec<T>)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut sections = Self::with_capacity(iter.size_hint().0);
        sections.extend(iter);
        sections
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::Sections;
    use crate::{ItemPosition, SectionListError};

    fn letters() -> Sections<&'static str, u32> {
        [("A", vec![1, 2]), ("B", vec![3])].into_iter().collect()
    }

    #[test]
    fn items_follow_section_then_item_order() {
        let sections = letters();
        assert_eq!(sections.len(), 3);
        assert_eq!(sections.section_count(), 2);
        let items: Vec<u32> = (0..sections.len())
            .map(|p| *sections.item(p).unwrap())
            .collect();
        assert_eq!(items, [1, 2, 3]);
        assert_eq!(sections.keys(), ["A", "B"]);
        assert_eq!(sections.item(3), None);
    }

    #[test]
    fn empty_leading_section_keeps_its_slot() {
        let sections: Sections<&str, u32> =
            [("A", vec![]), ("B", vec![9])].into_iter().collect();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections.section_count(), 2);
        assert_eq!(sections.key_at(0), Some(&"B"));
        assert_eq!(
            sections.locate(0),
            Ok(ItemPosition {
                section: 1,
                offset: 0
            })
        );
    }

    #[test]
    fn reinserting_a_key_replaces_items_in_place() {
        let mut sections = letters();
        sections.insert("C", vec![4]);
        let old = sections.insert("A", vec![7]);
        assert_eq!(old, Some(vec![1, 2]));
        assert_eq!(sections.keys(), ["A", "B", "C"]);
        assert_eq!(sections.len(), 3);
        assert_eq!(sections.item(0), Some(&7));
        assert_eq!(sections.item(1), Some(&3));
        assert_eq!(sections.item(2), Some(&4));
        assert_eq!(sections.index().section_range(2), Some(2..3));
    }

    #[test]
    fn duplicate_keys_when_collecting_keep_first_slot_last_items() {
        let sections: Sections<&str, u32> =
            [("A", vec![1]), ("B", vec![2]), ("A", vec![5, 6])]
                .into_iter()
                .collect();
        assert_eq!(sections.keys(), ["A", "B"]);
        assert_eq!(sections.get(&"A"), Some(&[5, 6][..]));
        assert_eq!(sections.len(), 3);
    }

    #[test]
    fn key_lookups() {
        let mut sections = letters();
        // Enough sections to force the key table to grow.
        for key in ["C", "D", "E", "F", "G", "H", "I", "J"] {
            sections.insert(key, Vec::new());
        }
        assert_eq!(sections.section_index_of(&"A"), Some(0));
        assert_eq!(sections.section_index_of(&"J"), Some(9));
        assert_eq!(sections.section_index_of(&"Z"), None);
        assert_eq!(sections.get(&"B"), Some(&[3][..]));
        assert_eq!(sections.section(1), Some((&"B", &[3][..])));
    }

    #[test]
    fn reinserting_shorter_and_longer_shifts_later_rows() {
        let mut sections = letters();
        sections.insert("C", vec![4, 5]);

        sections.insert("B", Vec::new());
        assert_eq!(sections.len(), 4);
        assert_eq!(sections.index().section_range(2), Some(2..4));
        assert_eq!(sections.key_at(2), Some(&"C"));

        sections.insert("B", vec![6, 7, 8]);
        assert_eq!(sections.len(), 7);
        assert_eq!(sections.index().section_range(1), Some(2..5));
        assert_eq!(sections.item(4), Some(&8));
        assert_eq!(sections.item(5), Some(&4));
    }

    #[test]
    fn try_item_reports_bounds() {
        let sections = letters();
        assert_eq!(sections.try_item(1), Ok(&2));
        assert_eq!(
            sections.try_item(3),
            Err(SectionListError::PositionOutOfBounds {
                position: 3,
                len: 3
            })
        );
    }

    #[test]
    fn clear_removes_everything() {
        let mut sections = letters();
        sections.clear();
        assert!(sections.is_empty());
        assert_eq!(sections.section_count(), 0);
        assert_eq!(sections.section_index_of(&"A"), None);
        sections.insert("A", vec![1]);
        assert_eq!(sections.section_index_of(&"A"), Some(0));
    }
}

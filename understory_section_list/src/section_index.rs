// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Translation between flat row positions and `(section, offset)` pairs.

use alloc::vec::Vec;
use core::ops::Range;

use crate::SectionListError;

/// A row addressed by its section and its offset within that section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemPosition {
    /// Index of the owning section, counting empty sections.
    pub section: usize,
    /// Offset of the row from the first row of its section.
    pub offset: usize,
}

/// Prefix sums over section lengths.
///
/// The index knows nothing about keys or items; it only records how many rows each
/// section contributes, in order. It maps a flat position `0..len()` to the section
/// that owns it, and a section back to the flat position of its first row.
///
/// Empty sections keep their slot in the section numbering but own no positions, so a
/// position never resolves to an empty section.
///
/// Lookups from position to section binary-search the cumulative ends, so they are
/// `O(log sections)`. Changing a section length rewrites the ends of that section and
/// every section after it.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct SectionIndex {
    /// Exclusive end position of each section.
    ends: Vec<usize>,
}

impl SectionIndex {
    /// Creates an index with no sections.
    #[must_use]
    pub const fn new() -> Self {
        Self { ends: Vec::new() }
    }

    /// Builds an index from section lengths, in section order.
    pub fn from_lens<I>(lens: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let lens = lens.into_iter();
        let mut index = Self {
            ends: Vec::with_capacity(lens.size_hint().0),
        };
        for len in lens {
            index.push(len);
        }
        index
    }

    /// Appends a section with `len` rows.
    pub fn push(&mut self, len: usize) {
        let end = self.len() + len;
        self.ends.push(end);
    }

    /// Changes the number of rows in an existing section.
    pub fn set_section_len(&mut self, section: usize, len: usize) -> Result<(), SectionListError> {
        let old = self
            .section_len(section)
            .ok_or(SectionListError::SectionOutOfBounds {
                section,
                count: self.section_count(),
            })?;
        self.resize_section(section, old, len);
        Ok(())
    }

    /// Changes `section` from `old` to `len` rows.
    ///
    /// `section` must exist and currently hold `old` rows.
    pub(crate) fn resize_section(&mut self, section: usize, old: usize, len: usize) {
        debug_assert_eq!(
            self.section_len(section),
            Some(old),
            "stale length for section {section}"
        );
        if old != len {
            // Every end from `section` onwards is at least `old`.
            for end in &mut self.ends[section..] {
                *end = *end - old + len;
            }
        }
    }

    /// Removes all sections.
    pub fn clear(&mut self) {
        self.ends.clear();
    }

    /// Number of sections, including empty ones.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.ends.len()
    }

    /// Total number of rows across all sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ends.last().copied().unwrap_or(0)
    }

    /// Returns `true` if no section contributes any rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn start_of(&self, section: usize) -> usize {
        section.checked_sub(1).map_or(0, |prev| self.ends[prev])
    }

    /// Flat position of the first row of `section`.
    ///
    /// For an empty section this is the position its first row would have.
    #[must_use]
    pub fn section_start(&self, section: usize) -> Option<usize> {
        (section < self.ends.len()).then(|| self.start_of(section))
    }

    /// Number of rows in `section`.
    #[must_use]
    pub fn section_len(&self, section: usize) -> Option<usize> {
        let end = *self.ends.get(section)?;
        Some(end - self.start_of(section))
    }

    /// The flat positions owned by `section`.
    #[must_use]
    pub fn section_range(&self, section: usize) -> Option<Range<usize>> {
        let end = *self.ends.get(section)?;
        Some(self.start_of(section)..end)
    }

    /// Flat position of the first row of `section`, clamping `section` to the last one.
    ///
    /// This is the lenient form of [`SectionIndex::section_start`] used when deciding
    /// header visibility. It returns `0` when there are no sections.
    #[must_use]
    pub fn position_for_section(&self, section: usize) -> usize {
        match self.ends.len().checked_sub(1) {
            Some(last) => self.start_of(section.min(last)),
            None => 0,
        }
    }

    /// Index of the section owning `position`.
    ///
    /// Positions at or past [`SectionIndex::len`] resolve to [`SectionIndex::section_count`],
    /// one past the last section. Prefer [`SectionIndex::section_for_position`] or
    /// [`SectionIndex::locate`] unless that past-the-end value is what you want.
    #[must_use]
    pub fn section_at(&self, position: usize) -> usize {
        self.ends.partition_point(|&end| end <= position)
    }

    /// Index of the section owning `position`, or `None` if it is out of range.
    #[must_use]
    pub fn section_for_position(&self, position: usize) -> Option<usize> {
        (position < self.len()).then(|| self.section_at(position))
    }

    /// Resolves `position` into its section and offset within that section.
    pub fn locate(&self, position: usize) -> Result<ItemPosition, SectionListError> {
        let len = self.len();
        if position >= len {
            return Err(SectionListError::PositionOutOfBounds { position, len });
        }
        let section = self.section_at(position);
        Ok(ItemPosition {
            section,
            offset: position - self.start_of(section),
        })
    }

    /// Flat position of the row at `at`. The inverse of [`SectionIndex::locate`].
    pub fn position_of(&self, at: ItemPosition) -> Result<usize, SectionListError> {
        let range = self
            .section_range(at.section)
            .ok_or(SectionListError::SectionOutOfBounds {
                section: at.section,
                count: self.section_count(),
            })?;
        if at.offset >= range.len() {
            return Err(SectionListError::OffsetOutOfBounds {
                section: at.section,
                offset: at.offset,
                len: range.len(),
            });
        }
        Ok(range.start + at.offset)
    }

    /// Returns `true` if `position` is the first row of its section.
    #[must_use]
    pub fn is_section_start(&self, position: usize) -> bool {
        position < self.len() && self.position_for_section(self.section_at(position)) == position
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{ItemPosition, SectionIndex};
    use crate::SectionListError;

    #[test]
    fn positions_map_to_owning_sections() {
        // [A, A] [B]
        let index = SectionIndex::from_lens([2, 1]);
        assert_eq!(index.len(), 3);
        assert_eq!(index.section_count(), 2);
        assert_eq!(index.section_at(0), 0);
        assert_eq!(index.section_at(1), 0);
        assert_eq!(index.section_at(2), 1);
        assert_eq!(
            index.locate(1),
            Ok(ItemPosition {
                section: 0,
                offset: 1
            })
        );
        assert_eq!(
            index.locate(2),
            Ok(ItemPosition {
                section: 1,
                offset: 0
            })
        );
    }

    #[test]
    fn empty_sections_own_no_positions() {
        let index = SectionIndex::from_lens([0, 1, 0, 0, 2]);
        assert_eq!(index.len(), 3);
        assert_eq!(index.section_at(0), 1);
        assert_eq!(index.section_at(1), 4);
        assert_eq!(index.section_at(2), 4);
        assert_eq!(index.section_start(2), Some(1));
        assert_eq!(index.section_len(3), Some(0));
        assert_eq!(index.section_range(4), Some(1..3));
    }

    #[test]
    fn section_start_is_sum_of_preceding_lengths() {
        let lens = [3, 0, 5, 1, 4];
        let index = SectionIndex::from_lens(lens);
        for section in 0..lens.len() {
            let expected: usize = lens[..section].iter().sum();
            assert_eq!(index.position_for_section(section), expected);
            assert_eq!(index.section_start(section), Some(expected));
        }
    }

    #[test]
    fn position_for_section_clamps() {
        let index = SectionIndex::from_lens([2, 3]);
        assert_eq!(index.position_for_section(9), 2);
        assert_eq!(SectionIndex::new().position_for_section(0), 0);
        assert_eq!(index.section_start(9), None);
    }

    #[test]
    fn out_of_range_positions() {
        let index = SectionIndex::from_lens([2, 1]);
        // One past the last section.
        assert_eq!(index.section_at(3), 2);
        assert_eq!(index.section_for_position(3), None);
        assert_eq!(
            index.locate(3),
            Err(SectionListError::PositionOutOfBounds {
                position: 3,
                len: 3
            })
        );
        assert!(!index.is_section_start(3));
    }

    #[test]
    fn locate_and_position_of_agree() {
        let index = SectionIndex::from_lens([1, 0, 4, 2]);
        for position in 0..index.len() {
            let at = index.locate(position).unwrap();
            assert_eq!(index.position_of(at), Ok(position));
        }
        assert_eq!(
            index.position_of(ItemPosition {
                section: 1,
                offset: 0
            }),
            Err(SectionListError::OffsetOutOfBounds {
                section: 1,
                offset: 0,
                len: 0
            })
        );
        assert_eq!(
            index.position_of(ItemPosition {
                section: 4,
                offset: 0
            }),
            Err(SectionListError::SectionOutOfBounds {
                section: 4,
                count: 4
            })
        );
    }

    #[test]
    fn section_starts_are_flagged() {
        let index = SectionIndex::from_lens([2, 0, 1, 3]);
        let starts: Vec<usize> = (0..index.len())
            .filter(|&p| index.is_section_start(p))
            .collect();
        assert_eq!(starts, [0, 2, 3]);
    }

    #[test]
    fn resizing_a_section_shifts_later_sections() {
        let mut index = SectionIndex::from_lens([2, 1, 3]);
        index.set_section_len(1, 4).unwrap();
        assert_eq!(index.len(), 9);
        assert_eq!(index.section_range(2), Some(6..9));

        index.set_section_len(0, 0).unwrap();
        assert_eq!(index.len(), 7);
        assert_eq!(index.section_at(0), 1);

        assert_eq!(
            index.set_section_len(3, 1),
            Err(SectionListError::SectionOutOfBounds {
                section: 3,
                count: 3
            })
        );
    }
}

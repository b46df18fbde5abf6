// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by bounds-checked lookups.

/// A lookup addressed a row, section, or in-section offset that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SectionListError {
    /// A flat position at or past the total number of rows.
    #[error("position {position} is out of bounds for a list of {len} rows")]
    PositionOutOfBounds {
        /// The requested flat position.
        position: usize,
        /// Total number of rows across all sections.
        len: usize,
    },
    /// A section index at or past the number of sections.
    #[error("section {section} is out of bounds for a list of {count} sections")]
    SectionOutOfBounds {
        /// The requested section index.
        section: usize,
        /// Number of sections, including empty ones.
        count: usize,
    },
    /// An offset at or past the length of an existing section.
    #[error("offset {offset} is out of bounds for section {section} with {len} items")]
    OffsetOutOfBounds {
        /// The section that was addressed.
        section: usize,
        /// The requested offset within that section.
        offset: usize,
        /// Number of items in that section.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::SectionListError;

    #[test]
    fn messages_name_the_offending_index() {
        let err = SectionListError::PositionOutOfBounds {
            position: 7,
            len: 3,
        };
        assert_eq!(
            err.to_string(),
            "position 7 is out of bounds for a list of 3 rows"
        );

        let err = SectionListError::OffsetOutOfBounds {
            section: 1,
            offset: 4,
            len: 2,
        };
        assert_eq!(
            err.to_string(),
            "offset 4 is out of bounds for section 1 with 2 items"
        );
    }
}

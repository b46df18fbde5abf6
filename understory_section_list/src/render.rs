// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rendering seam between the list core and a host view system.

/// Produces header and item views for a host view system.
///
/// The list core never constructs views itself. Whenever it needs one it calls the
/// renderer with the data to show and, when available, a previously produced view the
/// renderer may refresh in place instead of building a new one.
///
/// `Header` and `Item` are whatever the host uses as view handles: widget ids, retained
/// nodes, strings in a terminal UI, and so on.
pub trait SectionRenderer<K, T> {
    /// View type for section headers, both inline and floating.
    type Header;
    /// View type for item rows.
    type Item;

    /// Creates or refreshes a header view for `section`.
    fn render_header(&mut self, section: &K, recycled: Option<Self::Header>) -> Self::Header;

    /// Creates or refreshes an item view for `item`.
    fn render_item(&mut self, item: &T, recycled: Option<Self::Item>) -> Self::Item;
}

impl<K, T, R: SectionRenderer<K, T> + ?Sized> SectionRenderer<K, T> for &mut R {
    type Header = R::Header;
    type Item = R::Item;

    fn render_header(&mut self, section: &K, recycled: Option<Self::Header>) -> Self::Header {
        (**self).render_header(section, recycled)
    }

    fn render_item(&mut self, item: &T, recycled: Option<Self::Item>) -> Self::Item {
        (**self).render_item(item, recycled)
    }
}

/// A rendered row: a header slot stacked above an item slot.
///
/// Every row carries a header view so rows can be recycled at any position, but only the
/// first row of a section shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<H, I> {
    /// Header view for the section owning this row.
    pub header: H,
    /// View for the row's item.
    pub item: I,
    /// Whether the host should show `header` above `item`.
    pub header_visible: bool,
}

impl<H, I> Row<H, I> {
    /// Splits the row into its header and item views.
    pub fn into_views(self) -> (H, I) {
        (self.header, self.item)
    }
}

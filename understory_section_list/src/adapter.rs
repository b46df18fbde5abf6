// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A list adapter that renders [`Sections`] as rows with inline and floating headers.

use core::fmt;

use tracing::{debug, trace, warn};

use crate::{Row, ScrollEvent, SectionListError, SectionRenderer, Sections, StickyHeader};

/// Behavior switches for a [`SectionListAdapter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionListOptions {
    /// Keep a floating header pinned above the list for the section at the top.
    ///
    /// When enabled, row 0 never shows its inline header since the floating header
    /// stands in for it.
    pub sticky_header: bool,
}

/// Drives a host list widget over a [`Sections`] grouping.
///
/// The host asks for a row count, for rows by flat position, and reports scrolling. The
/// adapter answers with [`Row`]s built through its [`SectionRenderer`] and decides which
/// rows show their section header inline. With [`SectionListOptions::sticky_header`], it
/// also keeps a floating header bound to the section owning the first visible row.
///
/// The grouping is owned by the adapter and only replaced wholesale through
/// [`SectionListAdapter::set_sections`]; after that the host should refresh every row.
pub struct SectionListAdapter<K, T, R: SectionRenderer<K, T>> {
    sections: Sections<K, T>,
    renderer: R,
    options: SectionListOptions,
    sticky: Option<StickyHeader<R::Header>>,
}

impl<K, T, R: SectionRenderer<K, T>> SectionListAdapter<K, T, R> {
    /// Creates an adapter without a floating header.
    #[must_use]
    pub fn new(sections: Sections<K, T>, renderer: R) -> Self {
        Self::with_options(sections, renderer, SectionListOptions::default())
    }

    /// Creates an adapter with the given options.
    ///
    /// With a sticky header enabled, the floating header starts unbound and its view is
    /// built by the first scroll notification or the first render of row 0.
    #[must_use]
    pub fn with_options(
        sections: Sections<K, T>,
        renderer: R,
        options: SectionListOptions,
    ) -> Self {
        Self {
            sections,
            renderer,
            options,
            sticky: options.sticky_header.then(StickyHeader::default),
        }
    }

    /// Enables the floating header, seeding it with an existing `view`.
    #[must_use]
    pub fn with_sticky_header(mut self, view: R::Header) -> Self {
        self.options.sticky_header = true;
        self.sticky = Some(StickyHeader::new(Some(view)));
        self
    }

    /// Returns the current options.
    #[must_use]
    pub const fn options(&self) -> SectionListOptions {
        self.options
    }

    /// Returns the grouping being displayed.
    #[must_use]
    pub fn sections(&self) -> &Sections<K, T> {
        &self.sections
    }

    /// Replaces the grouping being displayed.
    ///
    /// The floating header becomes unbound, so the next scroll notification rebuilds it
    /// for the new data. Its view is kept and recycled by that rebuild.
    pub fn set_sections(&mut self, sections: Sections<K, T>) {
        trace!(
            sections = sections.section_count(),
            rows = sections.len(),
            "replacing section data"
        );
        self.sections = sections;
        if let Some(sticky) = &mut self.sticky {
            sticky.reset();
        }
    }

    /// Returns the renderer.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Returns the renderer mutably.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Returns the floating header state, if enabled.
    #[must_use]
    pub fn sticky_header(&self) -> Option<&StickyHeader<R::Header>> {
        self.sticky.as_ref()
    }

    /// Consumes the adapter, returning the grouping and the renderer.
    pub fn into_parts(self) -> (Sections<K, T>, R) {
        (self.sections, self.renderer)
    }

    /// Number of rows.
    #[must_use]
    pub fn count(&self) -> usize {
        self.sections.len()
    }

    /// The item at flat `position`, or `None` if it is out of range.
    #[must_use]
    pub fn item(&self, position: usize) -> Option<&T> {
        self.sections.item(position)
    }

    /// The item at flat `position`.
    pub fn try_item(&self, position: usize) -> Result<&T, SectionListError> {
        self.sections.try_item(position)
    }

    /// Row identity. Rows are identified by position only, so ids do not survive data changes.
    #[must_use]
    pub const fn item_id(&self, position: usize) -> u64 {
        position as u64
    }

    /// Index of the section owning flat `position`.
    #[must_use]
    pub fn section_for_position(&self, position: usize) -> Option<usize> {
        self.sections.index().section_for_position(position)
    }

    /// Flat position of the first row of `section`, clamped to the last section.
    #[must_use]
    pub fn position_for_section(&self, section: usize) -> usize {
        self.sections.index().position_for_section(section)
    }

    /// Whether the row at `position` shows its section header inline.
    ///
    /// True for the first row of each section, except row 0 when the floating header
    /// is enabled.
    #[must_use]
    pub fn header_visible(&self, position: usize) -> bool {
        if self.sticky.is_some() && position == 0 {
            return false;
        }
        self.sections.index().is_section_start(position)
    }

    /// Builds the row at `position`, refreshing `recycled` if given.
    ///
    /// Rendering row 0 with the floating header enabled also rebinds the floating
    /// header to the section owning row 0 and records that section as the one it shows,
    /// so a later scroll notification within that section does not rebuild it again.
    pub fn row(
        &mut self,
        position: usize,
        recycled: Option<Row<R::Header, R::Item>>,
    ) -> Result<Row<R::Header, R::Item>, SectionListError> {
        let at = self.sections.locate(position)?;
        let (key, item) = self.sections.entry(at)?;
        let (recycled_header, recycled_item) = recycled.map(Row::into_views).unzip();

        let header = self.renderer.render_header(key, recycled_header);
        let item = self.renderer.render_item(item, recycled_item);
        let header_visible = self.bind_section_header(position, at.section);
        trace!(position, section = at.section, header_visible, "bound row");

        Ok(Row {
            header,
            item,
            header_visible,
        })
    }

    fn bind_section_header(&mut self, position: usize, section: usize) -> bool {
        if position == 0 {
            if let Some(sticky) = &mut self.sticky {
                let key = &self.sections.keys()[section];
                let renderer = &mut self.renderer;
                sticky.rebind(section, |old| renderer.render_header(key, old));
                debug!(section, "floating header bound to first row");
                return false;
            }
        }
        self.sections.index().position_for_section(section) == position
    }

    /// Handles a scroll notification from the host.
    ///
    /// Returns `true` if the floating header was rebuilt, which happens when the first
    /// visible row belongs to a different section than the one it shows, or when the
    /// header is unbound (never built, or the data was replaced).
    pub fn on_scroll(&mut self, event: ScrollEvent) -> bool {
        let Some(sticky) = &mut self.sticky else {
            return false;
        };
        if event.visible_count == 0 {
            return false;
        }
        let Some(section) = self
            .sections
            .index()
            .section_for_position(event.first_visible)
        else {
            warn!(
                first_visible = event.first_visible,
                total_count = event.total_count,
                rows = self.sections.len(),
                "scroll position outside the list"
            );
            return false;
        };

        if sticky.shows(section) {
            return false;
        }
        let previous = sticky.section();
        let key = &self.sections.keys()[section];
        let renderer = &mut self.renderer;
        sticky.rebind(section, |old| renderer.render_header(key, old));
        debug!(?previous, section, "floating header rebound");
        true
    }
}

impl<K, T, R> fmt::Debug for SectionListAdapter<K, T, R>
where
    K: fmt::Debug,
    T: fmt::Debug,
    R: SectionRenderer<K, T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionListAdapter")
            .field("sections", &self.sections)
            .field("options", &self.options)
            .field("sticky_section", &self.sticky.as_ref().and_then(StickyHeader::section))
            .finish_non_exhaustive()
    }
}

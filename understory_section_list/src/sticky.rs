// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floating header state.

/// A scroll notification from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollEvent {
    /// Flat position of the first row at least partially visible.
    pub first_visible: usize,
    /// Number of rows currently visible.
    pub visible_count: usize,
    /// Total number of rows the host believes the list has.
    pub total_count: usize,
}

impl ScrollEvent {
    /// Creates a scroll notification.
    #[must_use]
    pub const fn new(first_visible: usize, visible_count: usize, total_count: usize) -> Self {
        Self {
            first_visible,
            visible_count,
            total_count,
        }
    }
}

/// The header pinned above the list, and the section it currently represents.
///
/// The section and view only ever change together through [`StickyHeader::rebind`].
/// Until the first rebind, and again after [`StickyHeader::reset`], the header is
/// unbound: it represents no section, so the next scroll always rebuilds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StickyHeader<H> {
    section: Option<usize>,
    view: Option<H>,
}

impl<H> StickyHeader<H> {
    /// Creates sticky state with an optional pre-built view.
    ///
    /// A pre-built view is taken to show section 0. Without one the header is unbound.
    #[must_use]
    pub const fn new(view: Option<H>) -> Self {
        let section = if view.is_some() { Some(0) } else { None };
        Self { section, view }
    }

    /// The section the floating header represents, or `None` while unbound.
    #[must_use]
    pub const fn section(&self) -> Option<usize> {
        self.section
    }

    /// The floating header view, if one has been built.
    #[must_use]
    pub const fn view(&self) -> Option<&H> {
        self.view.as_ref()
    }

    /// Returns `true` if the header already shows `section`.
    #[must_use]
    pub fn shows(&self, section: usize) -> bool {
        self.view.is_some() && self.section == Some(section)
    }

    /// Removes and returns the floating header view, leaving the header unbound.
    pub fn take_view(&mut self) -> Option<H> {
        self.section = None;
        self.view.take()
    }

    /// Points the floating header at `section`, rebuilding its view with `build`.
    ///
    /// `build` receives the previous view, if any, for reuse.
    pub fn rebind(&mut self, section: usize, build: impl FnOnce(Option<H>) -> H) {
        let view = build(self.view.take());
        self.section = Some(section);
        self.view = Some(view);
    }

    /// Unbinds the header without dropping the view, which is recycled on the next rebind.
    pub fn reset(&mut self) {
        self.section = None;
    }
}

impl<H> Default for StickyHeader<H> {
    fn default() -> Self {
        Self::new(None)
    }
}

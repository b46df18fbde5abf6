// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_section_list --heading-base-level=0

//! Understory Section List: sectioned rows over a flat list.
//!
//! This crate provides a small, renderer-agnostic core for lists whose items are grouped
//! under section headers but whose host widget only understands a flat strip of rows
//! indexed `0..len`.
//!
//! The core concepts are:
//!
//! - [`Sections`]: an insertion-ordered map from section keys to the items listed under
//!   them. Sections may be empty; they keep their section index but own no rows.
//! - [`SectionIndex`]: prefix sums over the section lengths, mapping a flat position to
//!   its section and offset ([`ItemPosition`]) and a section back to the position of its
//!   first row. Lookups by position binary-search, so they are `O(log sections)`.
//! - [`SectionRenderer`]: the seam to the host's view system. It builds or refreshes a
//!   header view for a section key and an item view for an item.
//! - [`SectionListAdapter`]: composes the above. It answers row-count and row requests
//!   with [`Row`]s (a header slot above an item slot, plus whether the header shows), and
//!   optionally tracks a floating [`StickyHeader`] from [`ScrollEvent`]s.
//!
//! This crate deliberately does **not** know about widgets, display trees, or any
//! particular UI framework. Host frameworks are responsible for:
//!
//! - Owning the actual view instances and their recycling pool.
//! - Asking for [`SectionListAdapter::row`] for each position they realize.
//! - Calling [`SectionListAdapter::on_scroll`] with the first visible position.
//! - Calling [`SectionListAdapter::set_sections`] and refreshing every row when the data
//!   changes. No change detection happens here.
//!
//! Out-of-range positions are reported as [`SectionListError`] by the checked lookups and
//! by [`SectionListAdapter::row`].
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_section_list::{
//!     ScrollEvent, SectionListAdapter, SectionListOptions, SectionRenderer, Sections,
//! };
//!
//! struct Labels;
//!
//! impl SectionRenderer<&'static str, u32> for Labels {
//!     type Header = String;
//!     type Item = String;
//!
//!     fn render_header(&mut self, section: &&'static str, _: Option<String>) -> String {
//!         format!("== {section} ==")
//!     }
//!
//!     fn render_item(&mut self, item: &u32, _: Option<String>) -> String {
//!         format!("item {item}")
//!     }
//! }
//!
//! let sections: Sections<_, _> = [("A", vec![1, 2]), ("B", vec![3])].into_iter().collect();
//! let options = SectionListOptions { sticky_header: true };
//! let mut list = SectionListAdapter::with_options(sections, Labels, options);
//!
//! assert_eq!(list.count(), 3);
//!
//! // Row 2 starts section B, so it shows its header inline.
//! let row = list.row(2, None).unwrap();
//! assert_eq!(row.header, "== B ==");
//! assert!(row.header_visible);
//!
//! // Scrolling B to the top pins its header.
//! assert!(list.on_scroll(ScrollEvent::new(2, 1, 3)));
//! let pinned = list.sticky_header().unwrap();
//! assert_eq!(pinned.section(), Some(1));
//! assert_eq!(pinned.view().map(String::as_str), Some("== B =="));
//! ```
//!
//! ## Position arithmetic without views
//!
//! [`SectionIndex`] can be used on its own when the host already keeps its data grouped:
//!
//! ```rust
//! use understory_section_list::{ItemPosition, SectionIndex};
//!
//! // Three sections: two rows, none, three rows.
//! let index = SectionIndex::from_lens([2, 0, 3]);
//!
//! assert_eq!(index.len(), 5);
//! assert_eq!(index.locate(3), Ok(ItemPosition { section: 2, offset: 1 }));
//! assert_eq!(index.position_for_section(2), 2);
//! assert!(index.is_section_start(2));
//! assert!(index.locate(5).is_err());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod adapter;
mod error;
mod render;
mod section_index;
mod sections;
mod sticky;

pub use adapter::{SectionListAdapter, SectionListOptions};
pub use error::SectionListError;
pub use render::{Row, SectionRenderer};
pub use section_index::{ItemPosition, SectionIndex};
pub use sections::Sections;
pub use sticky::{ScrollEvent, StickyHeader};

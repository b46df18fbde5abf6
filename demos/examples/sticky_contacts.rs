// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contacts grouped by initial, printed as a terminal list with a pinned header.
//!
//! Run:
//! - `cargo run -p understory_demos --example sticky_contacts`

use understory_section_list::{
    Row, ScrollEvent, SectionListAdapter, SectionListOptions, SectionRenderer, Sections,
};

/// Renders rows as text lines, counting how often it could reuse a buffer.
#[derive(Default)]
struct TextRenderer {
    reused: usize,
}

impl TextRenderer {
    fn fill(&mut self, recycled: Option<String>, text: &str) -> String {
        let mut line = match recycled {
            Some(line) => {
                self.reused += 1;
                line
            }
            None => String::new(),
        };
        line.clear();
        line.push_str(text);
        line
    }
}

impl SectionRenderer<char, &'static str> for TextRenderer {
    type Header = String;
    type Item = String;

    fn render_header(&mut self, section: &char, recycled: Option<String>) -> String {
        self.fill(recycled, &format!("--- {section} ---"))
    }

    fn render_item(&mut self, item: &&'static str, recycled: Option<String>) -> String {
        self.fill(recycled, &format!("    {item}"))
    }
}

fn contacts() -> Sections<char, &'static str> {
    let names = [
        "Ada", "Alan", "Barbara", "Brian", "Claude", "Dennis", "Donald", "Edsger", "Frances",
        "Grace", "Guido", "Ken",
    ];
    let mut sections = Sections::new();
    for name in names {
        let initial = name.chars().next().unwrap_or('#');
        let mut items = sections.get(&initial).map(<[_]>::to_vec).unwrap_or_default();
        items.push(name);
        sections.insert(initial, items);
    }
    sections
}

fn print_viewport(
    list: &mut SectionListAdapter<char, &'static str, TextRenderer>,
    first_visible: usize,
    visible_count: usize,
    pool: &mut Vec<Row<String, String>>,
) {
    let total = list.count();
    if list.on_scroll(ScrollEvent::new(first_visible, visible_count, total)) {
        tracing::info!(first_visible, "pinned header changed");
    }
    if let Some(pinned) = list.sticky_header().and_then(|sticky| sticky.view()) {
        println!("[{pinned}]");
    }

    let end = (first_visible + visible_count).min(total);
    let mut realized = Vec::new();
    for position in first_visible..end {
        match list.row(position, pool.pop()) {
            Ok(row) => {
                if row.header_visible {
                    println!("{}", row.header);
                }
                println!("{}", row.item);
                realized.push(row);
            }
            Err(err) => tracing::warn!(%err, "host asked for a missing row"),
        }
    }
    pool.extend(realized);
    println!();
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let options = SectionListOptions {
        sticky_header: true,
    };
    let mut list = SectionListAdapter::with_options(contacts(), TextRenderer::default(), options);
    tracing::info!(
        rows = list.count(),
        sections = list.sections().section_count(),
        "contacts loaded"
    );

    let mut pool = Vec::new();
    for first_visible in [0, 2, 3, 7, 9] {
        print_viewport(&mut list, first_visible, 4, &mut pool);
    }

    println!("buffers reused: {}", list.renderer().reused);
}

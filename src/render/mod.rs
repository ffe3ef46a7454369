//! Page rendering module
//!
//! Turns the chapter catalog into the documents a novel site serves:
//! HTML pages, `robots.txt`, `sitemap.xml` and the JSON stats document.

pub mod html;
pub mod robots;
pub mod sitemap;
pub mod stats;

pub use html::{render_chapter, render_index};
pub use robots::render_robots;
pub use sitemap::render_sitemap;
pub use stats::render_stats;

/// Escape text for HTML element content and attribute values
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

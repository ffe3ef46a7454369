//! sitemap.xml rendering

use std::fmt::Write;

use super::escape_html;
use crate::novel::Catalog;

pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Render a sitemap listing the home page followed by every chapter in catalog order
pub fn render_sitemap(catalog: &Catalog, base_url: &str) -> String {
    let mut xml = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"{SITEMAP_NAMESPACE}\">"
    );

    let home = format!("{base_url}/");
    let chapters = catalog
        .chapters()
        .iter()
        .map(|chapter| format!("{base_url}{}", chapter.url()));

    for loc in std::iter::once(home).chain(chapters) {
        let _ = write!(
            xml,
            "
    <url>
        <loc>{}</loc>
        <changefreq>daily</changefreq>
        <priority>0.8</priority>
    </url>",
            escape_html(&loc)
        );
    }

    xml.push_str("\n</urlset>\n");
    xml
}

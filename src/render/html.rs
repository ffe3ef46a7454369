//! HTML page templates
//!
//! Chapter bodies are inserted verbatim; every other interpolated value is escaped.

use std::fmt::Write;

use super::escape_html;
use crate::config::Profile;
use crate::novel::{Catalog, Chapter, TocPage};

const INDEX_STYLE: &str = r"
        body { font-family: Arial, sans-serif; max-width: 900px; margin: 0 auto; padding: 20px; }
        .header { background: #f0f0f0; padding: 20px; border-radius: 8px; margin-bottom: 20px; }
        .chapter-list { border: 1px solid #ddd; padding: 20px; border-radius: 8px; }
        .chapter-item { margin: 5px 0; }
        .chapter-item a { text-decoration: none; color: #333; display: block; padding: 8px; }
        .chapter-item a:hover { background: #f5f5f5; }
        .chapter-item.edge { border-left: 4px solid #ffc107; }
        .chapter-item.error { border-left: 4px solid #dc3545; }
        .chapter-item.pagination { border-left: 4px solid #17a2b8; }
        .chapter-item.format { border-left: 4px solid #6f42c1; }
        .chapter-item.random { border-left: 4px solid #fd7e14; }
        .pagination { margin: 20px 0; text-align: center; }
        .pagination a { margin: 0 5px; padding: 5px 10px; text-decoration: none; border: 1px solid #ddd; }
";

const CHAPTER_STYLE: &str = r"
        body { font-family: Arial, sans-serif; max-width: 800px; margin: 0 auto; padding: 20px; line-height: 1.6; }
        .navigation { margin: 20px 0; text-align: center; }
        .navigation a { margin: 0 10px; padding: 8px 16px; text-decoration: none; background: #007cba; color: white; border-radius: 4px; }
        .content { border: 1px solid #ddd; padding: 30px; border-radius: 8px; background: #fefefe; }
        .content p { margin: 16px 0; text-indent: 2em; }
        .chapter-info { background: #e9ecef; padding: 15px; border-radius: 8px; margin: 20px 0; font-size: 14px; }
        .footer { margin-top: 30px; text-align: center; color: #666; font-size: 14px; }
";

/// Render one page of the table of contents
pub fn render_index(catalog: &Catalog, page: &TocPage<'_>) -> String {
    let meta = catalog.meta();
    let title = escape_html(&meta.title);
    let complex = catalog.profile() == Profile::Complex;

    let mut items = String::new();
    for chapter in page.chapters {
        let class = if complex {
            format!("chapter-item {}", chapter.complexity.as_str())
        } else {
            "chapter-item".to_string()
        };
        let badge = if complex {
            format!(
                r#" <small style="color: #666; float: right;">{}</small>"#,
                chapter.kind.as_str()
            )
        } else {
            String::new()
        };
        let _ = write!(
            items,
            r#"
        <div class="{class}">
            <a href="{}">{}{badge}</a>
        </div>"#,
            chapter.url(),
            escape_html(&chapter.title),
        );
    }

    let pagination = if page.total_pages > 1 {
        render_pagination(page)
    } else {
        String::new()
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - 测试小说网站</title>
    <style>{INDEX_STYLE}    </style>
</head>
<body>
    <div class="header">
        <h1>{title}</h1>
        <p><strong>作者：</strong>{author}</p>
        <p><strong>简介：</strong>{intro}</p>
        <p><strong>总章节：</strong>{total}章</p>
    </div>

    <div class="chapter-list">
        <h2>📚 章节目录</h2>{items}
{pagination}
    </div>
</body>
</html>
"#,
        author = escape_html(&meta.author),
        intro = escape_html(&meta.intro),
        total = catalog.len(),
    )
}

fn render_pagination(page: &TocPage<'_>) -> String {
    let mut nav = String::from(r#"        <div class="pagination">"#);
    if page.number > 1 {
        let _ = write!(
            nav,
            r#"
            <a href="/?page={}">上一页</a>"#,
            page.number - 1
        );
    }
    let _ = write!(
        nav,
        "
            <span>第 {} 页 / 共 {} 页</span>",
        page.number, page.total_pages
    );
    if page.number < page.total_pages {
        let _ = write!(
            nav,
            r#"
            <a href="/?page={}">下一页</a>"#,
            page.number + 1
        );
    }
    nav.push_str("\n        </div>");
    nav
}

/// Render a chapter page with navigation to its neighbors
pub fn render_chapter(
    catalog: &Catalog,
    position: usize,
    chapter: &Chapter,
    prev: Option<&Chapter>,
    next: Option<&Chapter>,
) -> String {
    let meta = catalog.meta();
    let chapter_title = escape_html(&chapter.title);
    let navigation = render_navigation(prev, next);
    let total = catalog.len();
    let current = position + 1;

    let info = if catalog.profile() == Profile::Complex {
        format!(
            r#"
    <div class="chapter-info">
        <strong>章节信息：</strong>
        ID: {} | 类型: {} | 复杂度: {} | 当前进度: {current} / {total}
    </div>
"#,
            chapter.id,
            chapter.kind.as_str(),
            chapter.complexity.as_str(),
        )
    } else {
        String::new()
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{chapter_title} - {novel_title}</title>
    <style>{CHAPTER_STYLE}    </style>
</head>
<body>
{navigation}
{info}
    <div class="content">
        {content}
    </div>

{navigation}

    <div class="footer">
        <p>🧪 这是测试章节，用于验证爬虫功能</p>
        <p>当前章节：{current} / {total}</p>
    </div>
</body>
</html>
"#,
        novel_title = escape_html(&meta.title),
        content = chapter.content,
    )
}

fn render_navigation(prev: Option<&Chapter>, next: Option<&Chapter>) -> String {
    let mut nav = String::from(
        r#"    <div class="navigation">
        <a href="/">📚 返回目录</a>"#,
    );
    if let Some(prev) = prev {
        let _ = write!(
            nav,
            r#"
        <a href="{}" rel="prev">⬅️ 上一章</a>"#,
            prev.url()
        );
    }
    if let Some(next) = next {
        let _ = write!(
            nav,
            r#"
        <a href="{}" rel="next">➡️ 下一章</a>"#,
            next.url()
        );
    }
    nav.push_str("\n    </div>");
    nav
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NovelConfig;
    use crate::novel::ChapterId;

    fn catalog(profile: Profile, chapter_count: u32) -> Catalog {
        Catalog::from_config(&NovelConfig {
            profile,
            title: None,
            author: None,
            intro: None,
            chapter_count,
            page_size: None,
            seed: 1,
            base_url: None,
        })
    }

    #[test]
    fn test_index_lists_page_chapters() {
        let catalog = catalog(Profile::Basic, 50);
        let html = render_index(&catalog, &catalog.page(2, 20));
        assert!(html.contains(r#"href="/chapter/21""#));
        assert!(html.contains(r#"href="/chapter/40""#));
        assert!(!html.contains(r#"href="/chapter/41""#));
        assert!(html.contains(r#"href="/?page=1""#));
        assert!(html.contains(r#"href="/?page=3""#));
        assert!(html.contains("第 2 页 / 共 3 页"));
    }

    #[test]
    fn test_index_single_page_has_no_pagination() {
        let catalog = catalog(Profile::Basic, 5);
        let html = render_index(&catalog, &catalog.page(1, 20));
        assert!(!html.contains(r#"class="pagination""#));
        assert_eq!(html.matches(r#"class="chapter-item""#).count(), 5);
    }

    #[test]
    fn test_chapter_navigation() {
        let catalog = catalog(Profile::Basic, 3);
        let (pos, ch) = catalog.get(&ChapterId::Number(1)).unwrap();
        let (prev, next) = catalog.neighbors(pos);
        let html = render_chapter(&catalog, pos, ch, prev, next);
        assert!(html.contains("<title>第1章 爬虫测试章节1 - "));
        assert!(!html.contains(r#"rel="prev""#));
        assert!(html.contains(r#"<a href="/chapter/2" rel="next">"#));
        assert!(html.contains("当前章节：1 / 3"));
    }

    #[test]
    fn test_complex_chapter_escapes_title_and_shows_info() {
        let catalog = catalog(Profile::Complex, 0);
        let (pos, ch) = catalog.get(&ChapterId::Number(19)).unwrap();
        let (prev, next) = catalog.neighbors(pos);
        let html = render_chapter(&catalog, pos, ch, prev, next);
        assert!(html.contains("HTML实体&amp;lt;&amp;gt;"));
        assert!(html.contains("类型: html_entities"));
        assert!(html.contains(r#"<a href="/chapter/18" rel="prev">"#));
    }
}

// Basic catalog: contiguous, well-formed chapters

use super::{Chapter, ChapterId, ChapterKind, Complexity, NovelMeta};

pub fn meta() -> NovelMeta {
    NovelMeta {
        title: "测试小说：Python爬虫历险记".to_string(),
        author: "测试作者".to_string(),
        intro: "这是一个专门用来测试爬虫功能的模拟小说网站。包含了各种常见的网站结构和内容格式。"
            .to_string(),
    }
}

pub fn chapters(count: u32) -> Vec<Chapter> {
    (1..=count)
        .map(|i| {
            let title = format!("第{i}章 爬虫测试章节{i}");
            Chapter {
                id: ChapterId::Number(i),
                content: content(i, &title),
                title,
                kind: ChapterKind::Normal,
                complexity: Complexity::Basic,
            }
        })
        .collect()
}

fn content(i: u32, title: &str) -> String {
    format!(
        r"
            <h1>{title}</h1>
            <p>这是第{i}章的内容。本章主要讲述了爬虫程序如何智能地解析网页内容。</p>
            <p>在这一章中，我们的主角学习了如何解析HTML文档，如何处理各种复杂的网页结构。</p>
            <p>章节内容包含了多个段落，用来测试内容提取和清理功能。这里还有一些特殊字符：《》“”‘’—…</p>
            <p>第{i}章的核心知识点：</p>
            <ul>
                <li>HTML解析技巧</li>
                <li>CSS选择器的使用</li>
                <li>异常处理机制</li>
                <li>反爬虫应对策略</li>
            </ul>
            <p>最后，第{i}章总结了本章的学习内容，为下一章做好准备。</p>
            <hr>
            <p><em>提示：这是测试章节{i}，用于验证爬虫的内容提取能力。</em></p>
        "
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_mentions_chapter() {
        let chapters = chapters(2);
        assert_eq!(chapters[1].title, "第2章 爬虫测试章节2");
        assert!(chapters[1].content.contains("<h1>第2章 爬虫测试章节2</h1>"));
        assert!(chapters[1].content.contains("提示：这是测试章节2"));
    }

    #[test]
    fn test_zero_chapters() {
        assert!(chapters(0).is_empty());
    }
}

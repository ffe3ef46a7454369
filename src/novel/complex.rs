// Complex catalog: edge cases, split chapters, fault chapters and
// randomly structured chapters drawn from a seeded RNG

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::{Chapter, ChapterId, ChapterKind, Complexity, NovelMeta};

/// Parts per split chapter (chapters 24..=30)
pub const PARTS_PER_CHAPTER: u32 = 4;

const RANDOM_KINDS: [ChapterKind; 4] = [
    ChapterKind::Mixed,
    ChapterKind::RandomStructure,
    ChapterKind::EncodingTest,
    ChapterKind::PerformanceTest,
];

pub fn meta() -> NovelMeta {
    NovelMeta {
        title: "测试小说：Python爬虫极限挑战".to_string(),
        author: "边缘测试专家".to_string(),
        intro: "这是一个专门用来测试爬虫极限情况的模拟小说网站。包含了各种复杂的网站结构、编码问题、错误情况和反爬虫场景。"
            .to_string(),
    }
}

pub fn chapters(seed: u64) -> Vec<Chapter> {
    let mut chapters = Vec::with_capacity(101);
    chapters.extend(normal_chapters());
    chapters.extend(edge_chapters());
    chapters.extend(split_chapters());
    chapters.extend(fault_chapters());
    chapters.extend(format_chapters());
    chapters.extend(random_chapters(seed));
    chapters
}

fn chapter(
    id: u32,
    title: String,
    content: String,
    kind: ChapterKind,
    complexity: Complexity,
) -> Chapter {
    Chapter {
        id: ChapterId::Number(id),
        title,
        content,
        kind,
        complexity,
    }
}

fn normal_chapters() -> impl Iterator<Item = Chapter> {
    (1..=15).map(|i| {
        let title = format!("第{i}章 基础测试章节{i}");
        let content = format!(
            r#"
                <div class="content">
                    <h1>{title}</h1>
                    <p>这是第{i}章的基础内容。本章测试基本的HTML结构解析能力。</p>
                    <p>内容包含多个段落，用于验证段落提取和文本清理功能。</p>
                    <p>第{i}章的核心知识点包括：HTML解析、CSS选择器、异常处理等。</p>
                    <p>本章结束，准备进入下一章的学习。</p>
                </div>
            "#
        );
        chapter(i, title, content, ChapterKind::Normal, Complexity::Basic)
    })
}

fn edge_chapters() -> Vec<Chapter> {
    let long_phrase = "这是一个超级超级超级超级超级超级超级超级超级超级长的标题测试，用来验证爬虫对异常长标题的处理能力";

    let edge = |id, title: &str, content: &str, kind| {
        chapter(id, title.to_string(), content.to_string(), kind, Complexity::Edge)
    };

    vec![
        edge(
            16,
            "第16章 空内容边缘测试",
            r#"<div class="content"></div>"#,
            ChapterKind::Empty,
        ),
        edge(
            17,
            &format!("第17章 {}", long_phrase.repeat(3)),
            r#"<div class="content"><p>测试超长标题的处理能力。</p></div>"#,
            ChapterKind::LongTitle,
        ),
        edge(
            18,
            "第18章 特殊字符♠♣♥♦★☆▲●■◆◇▼▽△▴▾测试",
            r#"
                <div class="content">
                    <h1>Unicode字符测试</h1>
                    <p>各种特殊符号：♠♣♥♦★☆▲●■◆◇▼▽△▴▾</p>
                    <p>数学符号：∑∏∫∮∇∂∞±×÷√∝∈∉∪∩⊂⊃</p>
                    <p>箭头符号：←→↑↓↖↗↘↙⇐⇒⇑⇓</p>
                    <p>货币符号：$€£¥¢₹₽₿</p>
                    <p>表情符号：😀😃😄😁😆😅😂🤣😊😇🙂🙃😉😌😍🥰😘</p>
                </div>
            "#,
            ChapterKind::Unicode,
        ),
        edge(
            19,
            "第19章 HTML实体&lt;&gt;&amp;&quot;&#39;测试",
            r#"
                <div class="content">
                    <h1>HTML实体测试</h1>
                    <p>基本实体：&lt;p&gt;这是段落&lt;/p&gt;</p>
                    <p>引号测试：&quot;双引号&quot; &#39;单引号&#39;</p>
                    <p>空格实体：&nbsp;&nbsp;&nbsp;多个空格</p>
                    <p>特殊实体：&copy;&reg;&trade;&sect;&para;</p>
                    <p>数字实体：&#8364;(欧元) &#8482;(商标) &#169;(版权)</p>
                </div>
            "#,
            ChapterKind::HtmlEntities,
        ),
        edge(
            20,
            "第20章 深度嵌套结构挑战",
            r#"
                <div class="content">
                    <div><div><div><div><div>
                        <h1>深度嵌套测试</h1>
                        <p>这是深度嵌套的段落</p>
                    </div></div></div></div></div>
                    <table><tbody><tr><td><div><p>表格内嵌套的内容</p></div></td></tr></tbody></table>
                    <blockquote><div><cite><em><strong>多层嵌套的引用</strong></em></cite></div></blockquote>
                </div>
            "#,
            ChapterKind::Nested,
        ),
        edge(
            21,
            "第21章 干扰内容过滤测试",
            r#"
                <div class="content">
                    <h1>干扰内容测试</h1>
                    <p>正文内容开始</p>
                    <div class="advertisement">🎯 热门推荐！点击领取1000元现金红包！</div>
                    <p>正文继续</p>
                    <div class="navigation">上一章 | 下一章 | 返回目录 | 加入书签</div>
                    <p>更多正文</p>
                    <script>console.log("广告脚本");</script>
                    <p>正文结束</p>
                    <div class="footer">本站提供最新章节阅读</div>
                </div>
            "#,
            ChapterKind::Interference,
        ),
        edge(
            22,
            "第22章 脚本样式干扰测试",
            r#"
                <div class="content">
                    <style>.hidden{display:none;}</style>
                    <h1>脚本干扰测试</h1>
                    <p>正文内容</p>
                    <script>
                        document.write("动态生成的干扰内容");
                        alert("弹窗干扰");
                    </script>
                    <p class="hidden">隐藏的内容</p>
                    <p>更多正文</p>
                    <noscript>JavaScript禁用时显示的内容</noscript>
                </div>
            "#,
            ChapterKind::JavaScript,
        ),
        edge(
            23,
            "第23章 多语言混合编码测试",
            r#"
                <div class="content">
                    <h1>多语言编码测试</h1>
                    <p>中文：你好世界！繁體中文測試。古文：子曰學而時習之不亦說乎</p>
                    <p>日语：こんにちは世界！ひらがなカタカナ漢字テスト</p>
                    <p>韩语：안녕하세요 세계! 한글 테스트입니다.</p>
                    <p>俄语：Привет мир! Русский текст тест.</p>
                    <p>阿拉伯语：مرحبا بالعالم! اختبار النص العربي.</p>
                    <p>泰语：สวัสดีชาวโลก! การทดสอบข้อความไทย</p>
                    <p>印地语：नमस्ते दुनिया! हिंदी पाठ परीक्षण।</p>
                </div>
            "#,
            ChapterKind::MultiLang,
        ),
    ]
}

fn split_chapters() -> impl Iterator<Item = Chapter> {
    (24..=30).flat_map(|base| {
        (1..=PARTS_PER_CHAPTER).map(move |part| {
            let title = if part == 1 {
                format!("第{base}章 分页测试章节{base}")
            } else {
                format!("第{base}章 分页测试章节{base} (第{part}页)")
            };

            let (closing, next_link) = if part < PARTS_PER_CHAPTER {
                (
                    "<p>本页结束，请点击下一页继续阅读。</p>",
                    format!(r#"<a href="/chapter/{base}_{}">下一页</a>"#, part + 1),
                )
            } else {
                ("<p>本章结束。</p>", String::new())
            };

            let content = format!(
                r#"
                    <div class="content">
                        <h1>{title}</h1>
                        <p>这是第{base}章第{part}页的内容。</p>
                        <p>分页测试：当前页{part}/{PARTS_PER_CHAPTER}</p>
                        <p>章节内容继续...</p>
                        <p>更多段落内容用于测试分页解析。</p>
                        {closing}
                        <div class="page-nav">{next_link}</div>
                    </div>
                "#
            );

            Chapter {
                id: ChapterId::Part {
                    chapter: base,
                    part,
                },
                title,
                content,
                kind: ChapterKind::Paginated,
                complexity: Complexity::Pagination,
            }
        })
    })
}

fn fault_chapters() -> impl Iterator<Item = Chapter> {
    [
        (31, "404错误测试", ChapterKind::Error404),
        (32, "500服务器错误测试", ChapterKind::Error500),
        (33, "超时测试", ChapterKind::Timeout),
        (34, "重定向测试", ChapterKind::Redirect),
        (35, "反爬虫检测测试", ChapterKind::AntiCrawler),
        (36, "验证码挑战", ChapterKind::Captcha),
        (37, "频率限制测试", ChapterKind::RateLimit),
        (38, "IP封禁模拟", ChapterKind::IpBan),
        (39, "User-Agent检测", ChapterKind::UserAgent),
        (40, "Cookie验证测试", ChapterKind::CookieCheck),
    ]
    .into_iter()
    .map(|(id, name, kind)| {
        let title = format!("第{id}章 {name}");
        let content = format!(
            r#"
                <div class="content">
                    <h1>{title}</h1>
                    <p>这是{}测试章节。</p>
                    <p>用于测试爬虫对各种错误情况的处理能力。</p>
                </div>
            "#,
            kind.as_str()
        );
        chapter(id, title, content, kind, Complexity::Error)
    })
}

fn format_chapters() -> Vec<Chapter> {
    let format = |id, title: &str, content: &str, kind| {
        chapter(id, title.to_string(), content.to_string(), kind, Complexity::Format)
    };

    vec![
        format(
            41,
            "第41章 纯文本格式测试",
            "这是纯文本内容，没有HTML标签。\n\n这是第二段。\n\n包含换行和分段测试。",
            ChapterKind::PlainText,
        ),
        format(
            42,
            "第42章 复杂表格测试",
            r#"
                <div class="content">
                    <h1>复杂表格测试</h1>
                    <table border="1" cellpadding="5" cellspacing="0">
                        <thead>
                            <tr><th>姓名</th><th>年龄</th><th>职业</th><th>技能</th></tr>
                        </thead>
                        <tbody>
                            <tr><td>张三</td><td>25</td><td>程序员</td><td>Python, Java</td></tr>
                            <tr><td>李四</td><td>30</td><td>设计师</td><td>PS, AI</td></tr>
                            <tr><td colspan="2">合计</td><td colspan="2">2人</td></tr>
                        </tbody>
                    </table>
                </div>
            "#,
            ChapterKind::ComplexTable,
        ),
        format(
            43,
            "第43章 嵌套列表测试",
            r#"
                <div class="content">
                    <h1>嵌套列表测试</h1>
                    <ol>
                        <li>第一级列表
                            <ul>
                                <li>第二级列表项1</li>
                                <li>第二级列表项2
                                    <ol>
                                        <li>第三级列表项A</li>
                                        <li>第三级列表项B</li>
                                    </ol>
                                </li>
                            </ul>
                        </li>
                        <li>第一级列表项2</li>
                    </ol>
                </div>
            "#,
            ChapterKind::NestedList,
        ),
        format(
            44,
            "第44章 媒体内容测试",
            r#"
                <div class="content">
                    <h1>媒体内容测试</h1>
                    <p>文字内容开始</p>
                    <img src="/static/test-image.jpg" alt="测试图片" width="300">
                    <p>图片后的文字</p>
                    <video controls>
                        <source src="/static/test-video.mp4" type="video/mp4">
                        您的浏览器不支持视频播放。
                    </video>
                    <p>视频后的文字</p>
                    <audio controls>
                        <source src="/static/test-audio.mp3" type="audio/mp3">
                        您的浏览器不支持音频播放。
                    </audio>
                    <p>音频后的文字</p>
                </div>
            "#,
            ChapterKind::MediaContent,
        ),
        format(
            45,
            "第45章 代码和预格式化测试",
            r#"
                <div class="content">
                    <h1>代码和预格式化测试</h1>
                    <p>行内代码：<code>println!("Hello World")</code></p>
                    <pre><code>
fn hello_world() -> bool {
    println!("Hello, World!");
    true
}
                    </code></pre>
                    <p>预格式化文本：</p>
                    <pre>
这是预格式化文本
    保持空格和换行
        缩进也会保持
    </pre>
                </div>
            "#,
            ChapterKind::CodeFormat,
        ),
    ]
}

fn random_chapters(seed: u64) -> Vec<Chapter> {
    let mut rng = StdRng::seed_from_u64(seed);
    (46..=80)
        .map(|i| {
            let kind = *RANDOM_KINDS
                .choose(&mut rng)
                .unwrap_or(&ChapterKind::Mixed);
            chapter(
                i,
                format!("第{i}章 随机复杂测试{i}"),
                random_content(i, kind),
                kind,
                Complexity::Random,
            )
        })
        .collect()
}

fn random_content(id: u32, kind: ChapterKind) -> String {
    let mut content = format!(
        r#"
        <div class="content">
            <h1>第{id}章 随机复杂测试{id}</h1>
            <p>这是第{id}章的随机生成内容，类型：{}</p>
    "#,
        kind.as_str()
    );

    match kind {
        ChapterKind::Mixed => content.push_str(
            r"
            <div><span><em>混合标签嵌套测试</em></span></div>
            <blockquote>引用内容<cite>引用来源</cite></blockquote>
            <details><summary>折叠内容</summary><p>隐藏的详细信息</p></details>
        ",
        ),
        ChapterKind::RandomStructure => content.push_str(
            r##"
            <aside>侧边栏内容</aside>
            <section><article><header>文章头部</header><main>主要内容</main><footer>文章尾部</footer></article></section>
            <nav><a href="#">导航链接1</a><a href="#">导航链接2</a></nav>
        "##,
        ),
        ChapterKind::EncodingTest => content.push_str(
            r"
            <p>编码测试：中文 English 日本語 한국어 Русский العربية</p>
            <p>数字测试：①②③④⑤⑥⑦⑧⑨⑩</p>
            <p>符号测试：♠♣♥♦★☆▲●■◆</p>
        ",
        ),
        ChapterKind::PerformanceTest => {
            for n in 1..=50 {
                let sentence = format!("性能测试段落{n}：这是用于测试爬虫性能的重复内容。");
                content.push_str(&format!("<p>{}</p>", sentence.repeat(5)));
            }
        }
        _ => {}
    }

    content.push_str("</div>");
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_layout() {
        let chapters = chapters(1);
        assert_eq!(chapters.len(), 15 + 8 + 7 * 4 + 10 + 5 + 35);

        let ids: HashSet<_> = chapters.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), chapters.len(), "ids must be unique");

        assert_eq!(chapters[0].id, ChapterId::Number(1));
        assert_eq!(chapters[15].kind, ChapterKind::Empty);
        assert_eq!(
            chapters[23].id,
            ChapterId::Part {
                chapter: 24,
                part: 1
            }
        );
        assert_eq!(chapters.last().map(|c| c.id), Some(ChapterId::Number(80)));
    }

    #[test]
    fn test_split_parts_link_forward() {
        let chapters: Vec<_> = split_chapters().collect();
        let first = &chapters[0];
        assert!(first.content.contains(r#"href="/chapter/24_2""#));
        let last_of_24 = &chapters[3];
        assert!(last_of_24.content.contains("本章结束"));
        assert!(!last_of_24.content.contains("下一页</a>"));
    }

    #[test]
    fn test_random_chapters_are_seeded() {
        let kinds = |seed| -> Vec<_> { random_chapters(seed).iter().map(|c| c.kind).collect() };
        assert_eq!(kinds(42), kinds(42));
        assert!(kinds(42).iter().all(|k| RANDOM_KINDS.contains(k)));
    }

    #[test]
    fn test_performance_chapter_is_large() {
        let content = random_content(46, ChapterKind::PerformanceTest);
        assert_eq!(content.matches("<p>").count(), 51);
        assert!(content.contains("性能测试段落50"));
    }
}

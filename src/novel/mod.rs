//! Novel content module
//!
//! Holds the in-memory chapter catalog served by the fixture. The catalog is
//! generated once at startup from [`NovelConfig`] and never mutated afterwards.

mod basic;
mod complex;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::config::{NovelConfig, Profile};
use crate::error::FixtureError;

/// Chapter identifier as it appears in `/chapter/{id}`
///
/// Split chapters of the complex profile use `{chapter}_{part}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChapterId {
    Number(u32),
    Part { chapter: u32, part: u32 },
}

impl fmt::Display for ChapterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Part { chapter, part } => write!(f, "{chapter}_{part}"),
        }
    }
}

impl FromStr for ChapterId {
    type Err = FixtureError;

    /// Only canonical forms are accepted: `"7"` and `"24_2"`, not `"07"` or `"+7"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FixtureError::InvalidChapterId(s.to_string());
        let number = |part: &str| -> Result<u32, FixtureError> {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            part.parse().map_err(|_| invalid())
        };

        let id = match s.split_once('_') {
            Some((chapter, part)) => Self::Part {
                chapter: number(chapter)?,
                part: number(part)?,
            },
            None => Self::Number(number(s)?),
        };

        if id.to_string() == s {
            Ok(id)
        } else {
            Err(invalid())
        }
    }
}

/// What a chapter is meant to exercise in the crawler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChapterKind {
    Normal,
    Empty,
    LongTitle,
    Unicode,
    HtmlEntities,
    Nested,
    Interference,
    JavaScript,
    MultiLang,
    Paginated,
    Error404,
    Error500,
    Timeout,
    Redirect,
    AntiCrawler,
    Captcha,
    RateLimit,
    IpBan,
    UserAgent,
    CookieCheck,
    PlainText,
    ComplexTable,
    NestedList,
    MediaContent,
    CodeFormat,
    Mixed,
    RandomStructure,
    EncodingTest,
    PerformanceTest,
}

impl ChapterKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Empty => "empty",
            Self::LongTitle => "long_title",
            Self::Unicode => "unicode",
            Self::HtmlEntities => "html_entities",
            Self::Nested => "nested",
            Self::Interference => "interference",
            Self::JavaScript => "javascript",
            Self::MultiLang => "multilang",
            Self::Paginated => "paginated",
            Self::Error404 => "error_404",
            Self::Error500 => "error_500",
            Self::Timeout => "timeout",
            Self::Redirect => "redirect",
            Self::AntiCrawler => "anti_crawler",
            Self::Captcha => "captcha",
            Self::RateLimit => "rate_limit",
            Self::IpBan => "ip_ban",
            Self::UserAgent => "user_agent",
            Self::CookieCheck => "cookie_check",
            Self::PlainText => "plain_text",
            Self::ComplexTable => "complex_table",
            Self::NestedList => "nested_list",
            Self::MediaContent => "media_content",
            Self::CodeFormat => "code_format",
            Self::Mixed => "mixed",
            Self::RandomStructure => "random_structure",
            Self::EncodingTest => "encoding_test",
            Self::PerformanceTest => "performance_test",
        }
    }
}

/// Coarse grouping used for styling and stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Complexity {
    Basic,
    Edge,
    Pagination,
    Error,
    Format,
    Random,
}

impl Complexity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Edge => "edge",
            Self::Pagination => "pagination",
            Self::Error => "error",
            Self::Format => "format",
            Self::Random => "random",
        }
    }
}

/// A single synthetic chapter page
#[derive(Debug, Clone)]
pub struct Chapter {
    pub id: ChapterId,
    pub title: String,
    /// Body HTML, inserted into the page verbatim
    pub content: String,
    pub kind: ChapterKind,
    pub complexity: Complexity,
}

impl Chapter {
    pub fn url(&self) -> String {
        format!("/chapter/{}", self.id)
    }
}

/// Title, author and blurb shown on every page
#[derive(Debug, Clone)]
pub struct NovelMeta {
    pub title: String,
    pub author: String,
    pub intro: String,
}

/// One page of the table of contents
#[derive(Debug)]
pub struct TocPage<'a> {
    pub number: usize,
    pub total_pages: usize,
    pub chapters: &'a [Chapter],
}

/// Ordered, read-only chapter catalog
#[derive(Debug)]
pub struct Catalog {
    profile: Profile,
    meta: NovelMeta,
    chapters: Vec<Chapter>,
    positions: HashMap<ChapterId, usize>,
}

impl Catalog {
    pub fn from_config(config: &NovelConfig) -> Self {
        let (default_meta, chapters) = match config.profile {
            Profile::Basic => (basic::meta(), basic::chapters(config.chapter_count)),
            Profile::Complex => (complex::meta(), complex::chapters(config.seed)),
        };

        let meta = NovelMeta {
            title: config.title.clone().unwrap_or(default_meta.title),
            author: config.author.clone().unwrap_or(default_meta.author),
            intro: config.intro.clone().unwrap_or(default_meta.intro),
        };

        Self::new(config.profile, meta, chapters)
    }

    fn new(profile: Profile, meta: NovelMeta, chapters: Vec<Chapter>) -> Self {
        let positions = chapters
            .iter()
            .enumerate()
            .map(|(pos, ch)| (ch.id, pos))
            .collect();
        Self {
            profile,
            meta,
            chapters,
            positions,
        }
    }

    pub const fn profile(&self) -> Profile {
        self.profile
    }

    pub const fn meta(&self) -> &NovelMeta {
        &self.meta
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// Look up a chapter and its position in catalog order
    pub fn get(&self, id: &ChapterId) -> Option<(usize, &Chapter)> {
        let pos = *self.positions.get(id)?;
        Some((pos, &self.chapters[pos]))
    }

    /// Previous and next chapter around `pos`, in catalog order
    pub fn neighbors(&self, pos: usize) -> (Option<&Chapter>, Option<&Chapter>) {
        let prev = pos.checked_sub(1).and_then(|p| self.chapters.get(p));
        let next = self.chapters.get(pos + 1);
        (prev, next)
    }

    pub fn total_pages(&self, page_size: usize) -> usize {
        self.chapters.len().div_ceil(page_size.max(1))
    }

    /// Slice of the table of contents for 1-based page `number`
    ///
    /// Pages outside `1..=total_pages` come back with no chapters.
    pub fn page(&self, number: usize, page_size: usize) -> TocPage<'_> {
        let page_size = page_size.max(1);
        let total_pages = self.total_pages(page_size);

        let chapters = if number == 0 || number > total_pages {
            &self.chapters[..0]
        } else {
            let start = (number - 1) * page_size;
            let end = (start + page_size).min(self.chapters.len());
            &self.chapters[start..end]
        };

        TocPage {
            number,
            total_pages,
            chapters,
        }
    }
}

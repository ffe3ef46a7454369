//! Catalog statistics document served at `/api/stats`

use serde::Serialize;
use std::collections::BTreeMap;

use crate::novel::Catalog;

#[derive(Debug, Serialize)]
pub struct CatalogStats {
    pub total_chapters: usize,
    pub complexity_distribution: BTreeMap<&'static str, usize>,
    pub type_distribution: BTreeMap<&'static str, usize>,
    pub server_info: String,
}

impl CatalogStats {
    pub fn collect(catalog: &Catalog, server_info: &str) -> Self {
        let mut complexity_distribution = BTreeMap::new();
        let mut type_distribution = BTreeMap::new();

        for chapter in catalog.chapters() {
            *complexity_distribution
                .entry(chapter.complexity.as_str())
                .or_insert(0) += 1;
            *type_distribution.entry(chapter.kind.as_str()).or_insert(0) += 1;
        }

        Self {
            total_chapters: catalog.len(),
            complexity_distribution,
            type_distribution,
            server_info: server_info.to_string(),
        }
    }
}

/// Render catalog statistics as pretty-printed JSON
pub fn render_stats(catalog: &Catalog, server_info: &str) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&CatalogStats::collect(catalog, server_info))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{NovelConfig, Profile};

    fn catalog(profile: Profile) -> Catalog {
        Catalog::from_config(&NovelConfig {
            profile,
            title: None,
            author: None,
            intro: None,
            chapter_count: 50,
            page_size: None,
            seed: 3,
            base_url: None,
        })
    }

    #[test]
    fn test_basic_stats() {
        let stats = CatalogStats::collect(&catalog(Profile::Basic), "test");
        assert_eq!(stats.total_chapters, 50);
        assert_eq!(stats.complexity_distribution.get("basic"), Some(&50));
        assert_eq!(stats.type_distribution.get("normal"), Some(&50));
    }

    #[test]
    fn test_complex_stats_add_up() {
        let stats = CatalogStats::collect(&catalog(Profile::Complex), "test");
        assert_eq!(stats.total_chapters, 101);
        assert_eq!(stats.complexity_distribution.values().sum::<usize>(), 101);
        assert_eq!(stats.complexity_distribution.get("pagination"), Some(&28));
        assert_eq!(stats.complexity_distribution.get("error"), Some(&10));
        assert_eq!(stats.type_distribution.get("error_500"), Some(&1));
    }

    #[test]
    fn test_render_stats_json() {
        let json = render_stats(&catalog(Profile::Basic), "NovelFixture/0.1").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_chapters"], 50);
        assert_eq!(value["server_info"], "NovelFixture/0.1");
    }
}

//! robots.txt rendering

use crate::config::{Profile, RobotsConfig};

/// Render the robots exclusion policy
///
/// The basic profile allows everything with no delay; the complex profile
/// fences off `/admin/` and `/error/` and asks for a one second delay.
pub fn render_robots(profile: Profile, robots: &RobotsConfig, base_url: &str) -> String {
    let (default_delay, default_disallow): (u32, &[&str]) = match profile {
        Profile::Basic => (0, &[]),
        Profile::Complex => (1, &["/admin/", "/error/"]),
    };

    let crawl_delay = robots.crawl_delay.unwrap_or(default_delay);
    let disallow: Vec<&str> = robots.disallow.as_ref().map_or_else(
        || default_disallow.to_vec(),
        |paths| paths.iter().map(String::as_str).collect(),
    );

    let mut lines = vec!["User-agent: *".to_string(), "Allow: /".to_string()];
    lines.extend(disallow.iter().map(|path| format!("Disallow: {path}")));
    lines.push(format!("Crawl-delay: {crawl_delay}"));
    lines.push(String::new());
    lines.push(format!("Sitemap: {base_url}/sitemap.xml"));
    lines.push(String::new());
    lines.push("# 这是测试服务器，欢迎所有爬虫访问".to_string());

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every non-comment, non-blank line must be a `Field: value` pair
    fn assert_well_formed(text: &str) {
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (field, _) = line.split_once(':').expect("field separator");
            assert!(
                ["User-agent", "Allow", "Disallow", "Crawl-delay", "Sitemap"].contains(&field),
                "unexpected field {field}"
            );
        }
    }

    #[test]
    fn test_basic_policy() {
        let text = render_robots(Profile::Basic, &RobotsConfig::default(), "http://localhost:8080");
        assert_well_formed(&text);
        assert!(text.starts_with("User-agent: *\nAllow: /\n"));
        assert!(text.contains("Crawl-delay: 0"));
        assert!(!text.contains("Disallow"));
        assert!(text.contains("Sitemap: http://localhost:8080/sitemap.xml"));
    }

    #[test]
    fn test_complex_policy() {
        let text = render_robots(Profile::Complex, &RobotsConfig::default(), "http://x");
        assert_well_formed(&text);
        assert!(text.contains("Disallow: /admin/\nDisallow: /error/"));
        assert!(text.contains("Crawl-delay: 1"));
    }

    #[test]
    fn test_configured_policy() {
        let robots = RobotsConfig {
            crawl_delay: Some(5),
            disallow: Some(vec!["/private/".to_string()]),
        };
        let text = render_robots(Profile::Complex, &robots, "http://x");
        assert!(text.contains("Disallow: /private/"));
        assert!(!text.contains("/admin/"));
        assert!(text.contains("Crawl-delay: 5"));
    }
}

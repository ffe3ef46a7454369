// Configuration types module
// Defines all configuration-related data structures

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub novel: NovelConfig,
    #[serde(default)]
    pub robots: RobotsConfig,
    pub faults: FaultConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
    #[serde(default)]
    pub health: HealthConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Which chapter catalog the server generates at startup
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    /// Contiguous, well-formed chapters `1..=chapter_count`
    Basic,
    /// Fixed edge-case catalog (odd markup, split chapters, fault chapters)
    Complex,
}

/// Novel content configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NovelConfig {
    pub profile: Profile,
    pub title: Option<String>,
    pub author: Option<String>,
    pub intro: Option<String>,
    /// Number of generated chapters (basic profile only)
    pub chapter_count: u32,
    /// Table of contents entries per page; profile default when unset
    pub page_size: Option<usize>,
    /// RNG seed for the randomly structured chapters of the complex profile
    pub seed: u64,
    /// Absolute origin used in the sitemap, e.g. `http://localhost:8080`
    pub base_url: Option<String>,
}

impl NovelConfig {
    pub fn effective_page_size(&self) -> usize {
        self.page_size.unwrap_or(match self.profile {
            Profile::Basic => 20,
            Profile::Complex => 25,
        })
    }
}

/// robots.txt policy
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct RobotsConfig {
    /// Crawl-delay in seconds; profile default when unset
    pub crawl_delay: Option<u32>,
    /// Disallowed path prefixes; profile default when unset
    pub disallow: Option<Vec<String>>,
}

/// Deliberate misbehavior of fault chapters
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FaultConfig {
    pub enabled: bool,
    pub timeout_delay_ms: u64,
    pub rate_limit_delay_ms: u64,
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Access log format (combined, common, json, or custom pattern)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "combined".to_string()
}

/// Performance configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HttpConfig {
    pub server_name: String,
    pub enable_cors: bool,
}

/// Health check configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HealthConfig {
    /// Enable health check endpoints
    #[serde(default = "default_health_enabled")]
    pub enabled: bool,
    /// Liveness probe path (default: /healthz)
    #[serde(default = "default_healthz_path")]
    pub liveness_path: String,
    /// Readiness probe path (default: /readyz)
    #[serde(default = "default_readyz_path")]
    pub readiness_path: String,
}

#[allow(clippy::missing_const_for_fn)]
fn default_health_enabled() -> bool {
    true
}

#[allow(clippy::missing_const_for_fn)]
fn default_healthz_path() -> String {
    "/healthz".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_readyz_path() -> String {
    "/readyz".to_string()
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            enabled: default_health_enabled(),
            liveness_path: default_healthz_path(),
            readiness_path: default_readyz_path(),
        }
    }
}

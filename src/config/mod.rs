// Configuration module entry point
// Manages application configuration and shared runtime state

mod state;
mod types;

use std::net::SocketAddr;

use crate::error::{FixtureError, Result};

// Re-export public types
pub use state::AppState;
pub use types::{
    Config, FaultConfig, HealthConfig, HttpConfig, LoggingConfig, NovelConfig, PerformanceConfig,
    Profile, RobotsConfig, ServerConfig,
};

/// Default config file name (without extension), looked up in the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config";

/// Values supplied on the command line, applied on top of file and environment
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub profile: Option<Profile>,
    pub chapter_count: Option<u32>,
    pub page_size: Option<usize>,
    pub workers: Option<usize>,
}

impl Config {
    /// Load configuration from the given file path (without extension)
    /// Falls back to `config.toml` in the working directory when no path is given
    pub fn load_from(config_path: Option<&str>, overrides: &Overrides) -> Result<Self> {
        Self::load_layers(config_path, environment(), overrides)
    }

    /// Merge defaults, the optional file, `env` and `overrides`, lowest to highest
    fn load_layers(
        config_path: Option<&str>,
        env: config::Environment,
        overrides: &Overrides,
    ) -> Result<Self> {
        let profile = overrides.profile.map(|p| match p {
            Profile::Basic => "basic",
            Profile::Complex => "complex",
        });

        let settings = config::Config::builder()
            .add_source(
                config::File::with_name(config_path.unwrap_or(DEFAULT_CONFIG_PATH)).required(false),
            )
            .add_source(env)
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("novel.profile", "basic")?
            .set_default("novel.chapter_count", 50)?
            .set_default("novel.seed", 20_240_601)?
            .set_default("faults.enabled", true)?
            .set_default("faults.timeout_delay_ms", 30_000)?
            .set_default("faults.rate_limit_delay_ms", 2_000)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 60)?
            .set_default("performance.write_timeout", 60)?
            .set_default("http.server_name", "NovelFixture/0.1")?
            .set_default("http.enable_cors", false)?
            .set_override_option("server.host", overrides.host.clone())?
            .set_override_option("server.port", overrides.port.map(u64::from))?
            .set_override_option("novel.profile", profile)?
            .set_override_option("novel.chapter_count", overrides.chapter_count.map(u64::from))?
            .set_override_option("novel.page_size", overrides.page_size.map(|n| n as u64))?
            .set_override_option("server.workers", overrides.workers.map(|n| n as u64))?
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the catalog or listener cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.novel.profile == Profile::Basic && self.novel.chapter_count == 0 {
            return Err(FixtureError::Validation(
                "novel.chapter_count must be at least 1".to_string(),
            ));
        }
        if self.novel.page_size == Some(0) {
            return Err(FixtureError::Validation(
                "novel.page_size must be at least 1".to_string(),
            ));
        }
        if self.server.workers == Some(0) {
            return Err(FixtureError::Validation(
                "server.workers must be at least 1".to_string(),
            ));
        }
        self.get_socket_addr()?;
        Ok(())
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|source| FixtureError::InvalidAddress { addr, source })
    }

    /// Origin used for absolute URLs in the sitemap and robots policy
    pub fn base_url(&self) -> String {
        self.novel.base_url.as_ref().map_or_else(
            || format!("http://localhost:{}", self.server.port),
            |url| url.trim_end_matches('/').to_string(),
        )
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// `NOVEL_FIXTURE__SECTION__KEY` variables, e.g. `NOVEL_FIXTURE__SERVER__PORT=9000`
fn environment() -> config::Environment {
    config::Environment::with_prefix("NOVEL_FIXTURE")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(overrides: &Overrides) -> Result<Config> {
        Config::load_from(Some("does-not-exist/novel-fixture"), overrides)
    }

    #[test]
    fn test_defaults() {
        let cfg = load(&Overrides::default()).unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.novel.profile, Profile::Basic);
        assert_eq!(cfg.novel.chapter_count, 50);
        assert_eq!(cfg.novel.effective_page_size(), 20);
        assert!(cfg.faults.enabled);
        assert_eq!(cfg.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_overrides_win() {
        let overrides = Overrides {
            port: Some(9090),
            profile: Some(Profile::Complex),
            chapter_count: Some(12),
            page_size: Some(7),
            ..Overrides::default()
        };
        let cfg = load(&overrides).unwrap();
        assert_eq!(cfg.server.port, 9090);
        assert_eq!(cfg.novel.profile, Profile::Complex);
        assert_eq!(cfg.novel.chapter_count, 12);
        assert_eq!(cfg.novel.effective_page_size(), 7);
    }

    #[test]
    fn test_complex_page_size_default() {
        let overrides = Overrides {
            profile: Some(Profile::Complex),
            ..Overrides::default()
        };
        let cfg = load(&overrides).unwrap();
        assert_eq!(cfg.novel.effective_page_size(), 25);
    }

    #[test]
    fn test_rejects_zero_chapters() {
        let overrides = Overrides {
            chapter_count: Some(0),
            ..Overrides::default()
        };
        assert!(matches!(load(&overrides), Err(FixtureError::Validation(_))));
    }

    #[test]
    fn test_rejects_zero_page_size() {
        let overrides = Overrides {
            page_size: Some(0),
            ..Overrides::default()
        };
        assert!(matches!(load(&overrides), Err(FixtureError::Validation(_))));
    }

    #[test]
    fn test_rejects_bad_host() {
        let overrides = Overrides {
            host: Some("not an address".to_string()),
            ..Overrides::default()
        };
        assert!(matches!(
            load(&overrides),
            Err(FixtureError::InvalidAddress { .. })
        ));
    }

    #[test]
    fn test_base_url_trims_slash() {
        let mut cfg = load(&Overrides::default()).unwrap();
        cfg.novel.base_url = Some("http://fixture.test/".to_string());
        assert_eq!(cfg.base_url(), "http://fixture.test");
    }

    #[test]
    fn test_to_toml_round_trips_sections() {
        let cfg = load(&Overrides::default()).unwrap();
        let text = cfg.to_toml().unwrap();
        assert!(text.contains("[server]"));
        assert!(text.contains("[novel]"));
        assert!(text.contains("profile = \"basic\""));
    }

    /// Environment layer fed from a fixed map instead of the process env
    fn env_from(vars: &[(&str, &str)]) -> config::Environment {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        environment().source(Some(map))
    }

    #[test]
    fn test_layer_precedence() {
        let path = std::env::temp_dir().join(format!(
            "novel-fixture-layers-{}.toml",
            std::process::id()
        ));
        let contents = r#"
[server]
port = 7000

[novel]
profile = "complex"

[robots]
disallow = ["/x/"]
"#;
        std::fs::write(&path, contents).unwrap();
        let file = path.to_str().unwrap();

        let from_file = Config::load_layers(Some(file), env_from(&[]), &Overrides::default());
        let from_env = Config::load_layers(
            Some(file),
            env_from(&[("NOVEL_FIXTURE__SERVER__PORT", "9000")]),
            &Overrides::default(),
        );
        let from_cli = Config::load_layers(
            Some(file),
            env_from(&[("NOVEL_FIXTURE__SERVER__PORT", "9000")]),
            &Overrides {
                port: Some(9100),
                ..Overrides::default()
            },
        );
        std::fs::remove_file(&path).unwrap();

        let cfg = from_file.unwrap();
        assert_eq!(cfg.server.port, 7000);
        assert_eq!(cfg.novel.profile, Profile::Complex);
        assert_eq!(cfg.robots.disallow, Some(vec!["/x/".to_string()]));
        assert_eq!(cfg.novel.effective_page_size(), 25);
        // Keys the file leaves out keep their defaults
        assert_eq!(cfg.novel.chapter_count, 50);

        let cfg = from_env.unwrap();
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.novel.profile, Profile::Complex);

        assert_eq!(from_cli.unwrap().server.port, 9100);
    }

    #[test]
    fn test_env_nested_keys() {
        let cfg = Config::load_layers(
            Some("does-not-exist/novel-fixture"),
            env_from(&[
                ("NOVEL_FIXTURE__FAULTS__ENABLED", "false"),
                ("NOVEL_FIXTURE__NOVEL__PAGE_SIZE", "10"),
            ]),
            &Overrides::default(),
        )
        .unwrap();
        assert!(!cfg.faults.enabled);
        assert_eq!(cfg.novel.effective_page_size(), 10);
    }
}

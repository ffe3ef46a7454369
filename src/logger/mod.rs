//! Logger module
//!
//! Provides logging utilities for the fixture server including:
//! - Server lifecycle logging
//! - Access logging with multiple formats
//! - Error and warning logging
//! - File-based logging support

mod format;
pub mod writer;

pub use format::AccessLogEntry;
pub use writer::LogLevel;

use crate::config::Config;
use crate::error::Result;
use crate::novel::Catalog;
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> Result<()> {
    let level = config.logging.level.parse::<LogLevel>().unwrap_or_else(|e| {
        eprintln!("[WARN] {e}, falling back to info");
        LogLevel::Info
    });
    writer::init(
        level,
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )?;
    Ok(())
}

/// Write to info log
fn write_info(message: &str) {
    if !writer::enabled(LogLevel::Info) {
        return;
    }
    match writer::get() {
        Some(w) => w.write_info(message),
        None => println!("{message}"),
    }
}

/// Write to error log
fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

/// Write to access log specifically
fn write_access(message: &str) {
    match writer::get() {
        Some(w) => w.write_access(message),
        None => println!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config, catalog: &Catalog) {
    write_info("======================================");
    write_info("Novel fixture server started");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Novel: {}", catalog.meta().title));
    write_info(&format!(
        "Profile: {:?}, chapters: {}, page size: {}",
        config.novel.profile,
        catalog.len(),
        config.novel.effective_page_size()
    ));
    write_info(&format!("Sitemap base URL: {}", config.base_url()));
    write_info(&format!("Log level: {}", config.logging.level));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if let Some(max) = config.performance.max_connections {
        write_info(&format!("Max connections: {max}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info("======================================\n");
}

pub fn log_server_stop(addr: &SocketAddr) {
    write_info(&format!("[Shutdown] Stopped accepting connections on {addr}"));
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    log_debug(&format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_info(message: &str) {
    write_info(message);
}

pub fn log_debug(message: &str) {
    if writer::enabled(LogLevel::Debug) {
        write_info(&format!("[DEBUG] {message}"));
    }
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    if writer::enabled(LogLevel::Warn) {
        write_error(&format!("[WARN] {message}"));
    }
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_access(&entry.format(format));
}

pub fn log_fault_injected(path: &str, kind: &str) {
    log_debug(&format!("[Fault] {kind} triggered for {path}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Overrides;
    use crate::error::FixtureError;

    #[test]
    fn test_init_reports_unopenable_log_file() {
        // A regular file where the log directory should be
        let blocker = std::env::temp_dir()
            .join(format!("novel-fixture-log-blocker-{}", std::process::id()));
        std::fs::write(&blocker, b"").unwrap();

        let mut config =
            Config::load_from(Some("does-not-exist/novel-fixture"), &Overrides::default())
                .unwrap();
        config.logging.access_log_file =
            Some(blocker.join("access.log").to_string_lossy().into_owned());

        let result = init(&config);
        std::fs::remove_file(&blocker).unwrap();
        assert!(matches!(result, Err(FixtureError::Io(_))));
    }
}

//! Mock novel website for exercising web crawlers.
//!
//! Serves a paginated table of contents at `/`, chapter pages at
//! `/chapter/{id}`, plus `robots.txt`, `sitemap.xml` and a JSON stats
//! endpoint. The `complex` profile adds split chapters, awkward formatting
//! and chapters that fail on purpose.

pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod novel;
pub mod render;
pub mod server;

pub use config::{AppState, Config, Overrides, Profile};
pub use error::{FixtureError, Result};

//! Crate error type

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Validation(String),

    #[error("invalid address '{addr}': {source}")]
    InvalidAddress {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("invalid chapter id '{0}'")]
    InvalidChapterId(String),

    #[error("invalid page number '{0}'")]
    InvalidPage(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FixtureError>;

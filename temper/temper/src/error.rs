use thiserror::Error;

/// Rejected pagination requests. Page numbers are 1-based.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationError {
    #[error("current page must be at least 1")]
    ZeroPage,
    #[error("total pages must be at least 1")]
    NoPages,
    #[error("current page {current} is past the last page {total}")]
    PageOutOfRange { current: u32, total: u32 },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Config file not found: {0}")]
    NotFound(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to serialize document: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Pagination(#[from] PaginationError),
}

//! Pagegrep: concurrent keyword search over fetched web pages
//!
//! This crate fetches a list of web pages, extracts their visible text,
//! searches each page for a fixed keyword, and reports per-page match
//! positions and errors.

pub mod config;
pub mod engine;
pub mod input;
pub mod report;
pub mod store;
pub mod url;
pub mod workspace;

use thiserror::Error;

/// Main error type for pagegrep operations
#[derive(Debug, Error)]
pub enum PagegrepError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input list error: {0}")]
    InputFormat(String),

    #[error("Failed to retrieve input list from {source_url}: {message}")]
    InputFetch { source_url: String, message: String },

    #[error("Keyword pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Worker task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Per-fragment pipeline stage errors
///
/// Every variant is caught at the worker-loop boundary and recorded as a
/// failure outcome for the fragment that produced it; these never terminate
/// a worker or the engine.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("Extract failed: {0}")]
    Extract(#[source] std::io::Error),

    #[error("Text read failed: {0}")]
    Read(#[source] std::io::Error),
}

/// Result type alias for pagegrep operations
pub type Result<T> = std::result::Result<T, PagegrepError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use engine::{Engine, HttpFetcher, PageFetcher};
pub use store::{Outcome, ResultStore, Snapshot};
pub use crate::url::{artifact_stem, fragment_url, normalize_fragment};

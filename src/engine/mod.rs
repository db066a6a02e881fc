//! Engine module for concurrent page fetching and keyword search
//!
//! This module contains the coordination core, including:
//! - The fixed-size worker pool draining one shared work source
//! - HTTP fetching with timeouts
//! - HTML-to-text extraction
//! - Whole-word keyword matching

mod extractor;
mod fetcher;
mod matcher;
mod pool;
mod source;

pub use extractor::html_to_text;
pub use fetcher::{build_http_client, HttpFetcher, PageFetcher};
pub use matcher::KeywordMatcher;
pub use pool::{run_search, Engine};
pub use source::WorkSource;

use crate::config::Config;
use crate::store::Snapshot;
use crate::Result;

/// Runs a complete search operation
///
/// This is the main entry point for starting a run. It will:
/// 1. Initialize the output directory layout
/// 2. Obtain and parse the input list
/// 3. Run the worker pool to completion
/// 4. Return the aggregated outcomes
///
/// # Arguments
///
/// * `config` - The run configuration
///
/// # Returns
///
/// * `Ok(Snapshot)` - Frozen success/error views for the report
/// * `Err(PagegrepError)` - A startup error occurred before any worker ran
pub async fn search(config: Config) -> Result<Snapshot> {
    run_search(config).await
}

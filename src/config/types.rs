use serde::Deserialize;

/// Default input list, kept from the original deployment of this tool
pub const DEFAULT_LIST_SOURCE: &str = "https://s3.amazonaws.com/fieldlens-public/urls.txt";

/// Main configuration structure for pagegrep
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub searcher: SearcherConfig,
    #[serde(default)]
    pub input: InputConfig,
    pub output: OutputConfig,
}

/// Search behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SearcherConfig {
    /// Keyword to search for in extracted page text
    pub keyword: String,

    /// Number of concurrent workers draining the work list
    #[serde(rename = "worker-count", default = "default_worker_count")]
    pub worker_count: usize,

    /// Connect/read timeout for each page fetch, in seconds
    #[serde(rename = "fetch-timeout-secs", default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

/// Input list configuration
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Where the URL list lives: a local path or an http(s) URL
    #[serde(rename = "list-source", default = "default_list_source")]
    pub list_source: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Root folder for raw pages, extracted text, and the final report
    #[serde(rename = "root-path")]
    pub root_path: String,
}

impl SearcherConfig {
    /// Builds a searcher config with the given keyword and default
    /// worker count and fetch timeout.
    pub fn with_keyword(keyword: String) -> Self {
        Self {
            keyword,
            worker_count: default_worker_count(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            list_source: default_list_source(),
        }
    }
}

fn default_worker_count() -> usize {
    20
}

fn default_fetch_timeout_secs() -> u64 {
    10
}

fn default_list_source() -> String {
    DEFAULT_LIST_SOURCE.to_string()
}

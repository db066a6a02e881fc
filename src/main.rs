//! Pagegrep main entry point
//!
//! This is the command-line interface for the pagegrep keyword searcher.

use anyhow::Context;
use clap::Parser;
use pagegrep::config::{
    load_config_with_hash, validate, Config, InputConfig, OutputConfig, SearcherConfig,
};
use pagegrep::workspace::Workspace;
use pagegrep::{engine, report};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Pagegrep: fetch pages and report keyword match positions
///
/// Pagegrep downloads every page in an input list, extracts the visible
/// text, and reports the positions where a keyword occurs as a whole
/// word, along with any per-page failures.
#[derive(Parser, Debug)]
#[command(name = "pagegrep")]
#[command(version)]
#[command(about = "Fetch web pages and search them for a keyword", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Keyword to search for (overrides the config file)
    #[arg(short, long)]
    keyword: Option<String>,

    /// Output folder path (overrides the config file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Input list path or http(s) URL (overrides the config file)
    #[arg(short, long)]
    input: Option<String>,

    /// Number of concurrent workers (overrides the config file)
    #[arg(short, long)]
    workers: Option<usize>,

    /// Per-request fetch timeout in seconds (overrides the config file)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = resolve_config(&cli)?;

    tracing::info!(
        "Starting pagegrep: keyword '{}', {} workers, output {}",
        config.searcher.keyword,
        config.searcher.worker_count,
        config.output.root_path
    );

    let snapshot = engine::search(config.clone())
        .await
        .context("search run failed")?;

    let report_text = report::render_report(&snapshot);
    let report_path = Workspace::new(&config.output.root_path).report_path();
    report::write_report(&report_path, &report_text)
        .with_context(|| format!("failed to write report to {}", report_path.display()))?;

    tracing::info!("{}", report_text.trim_end());
    tracing::info!("Processed results at: {}", report_path.display());

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("pagegrep=info,warn"),
            1 => EnvFilter::new("pagegrep=debug,info"),
            2 => EnvFilter::new("pagegrep=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Builds the effective configuration from the config file and CLI flags
///
/// Flags override file values; with no config file the flags must carry
/// at least the keyword and output folder or validation fails.
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?;
            tracing::info!("Configuration loaded from {} (hash: {})", path.display(), hash);
            config
        }
        None => Config {
            searcher: SearcherConfig::with_keyword(String::new()),
            input: InputConfig::default(),
            output: OutputConfig {
                root_path: String::new(),
            },
        },
    };

    if let Some(keyword) = &cli.keyword {
        config.searcher.keyword = keyword.clone();
    }
    if let Some(output) = &cli.output {
        config.output.root_path = output.display().to_string();
    }
    if let Some(input) = &cli.input {
        config.input.list_source = input.clone();
    }
    if let Some(workers) = cli.workers {
        config.searcher.worker_count = workers;
    }
    if let Some(timeout) = cli.timeout_secs {
        config.searcher.fetch_timeout_secs = timeout;
    }

    validate(&config).context("invalid configuration")?;
    Ok(config)
}

//! Worker pool engine - main search orchestration logic
//!
//! This module contains the core coordination logic:
//! - Spawning a fixed number of worker tasks against one shared work source
//! - Running each claimed fragment through fetch -> extract -> search
//! - Converting per-fragment pipeline errors into failure outcomes
//! - Joining every worker before handing back the aggregated results
//!
//! The claim step (cursor advance + dedup check + insert) is one small
//! critical section; the expensive network and disk work runs outside any
//! lock so workers only serialize on a few in-memory operations.

use crate::config::Config;
use crate::engine::extractor::html_to_text;
use crate::engine::fetcher::{HttpFetcher, PageFetcher};
use crate::engine::matcher::KeywordMatcher;
use crate::engine::source::WorkSource;
use crate::input::{self, WorkItem};
use crate::store::{ResultStore, Snapshot};
use crate::url::fragment_url;
use crate::workspace::Workspace;
use crate::{PagegrepError, PipelineError};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use url::Url;

/// The concurrent URL-processing engine
///
/// One engine instance exclusively owns the work-source cursor, the dedup
/// set, and the result store for the lifetime of one run; workers get
/// handles into it via `Arc` rather than any process-wide state.
pub struct Engine {
    worker_count: usize,
    workspace: Workspace,
    fetcher: Arc<dyn PageFetcher>,
    matcher: KeywordMatcher,
    source: Mutex<WorkSource>,
    store: ResultStore,
}

impl Engine {
    /// Creates a new engine over the given work items
    ///
    /// # Arguments
    ///
    /// * `config` - The run configuration (keyword, worker count)
    /// * `workspace` - Initialized output directory layout
    /// * `fetcher` - The page-fetch capability (real HTTP or a test fake)
    /// * `items` - Input rows, in file order
    pub fn new(
        config: &Config,
        workspace: Workspace,
        fetcher: Arc<dyn PageFetcher>,
        items: Vec<WorkItem>,
    ) -> Result<Self, PagegrepError> {
        let matcher = KeywordMatcher::new(&config.searcher.keyword)?;

        Ok(Self {
            worker_count: config.searcher.worker_count,
            workspace,
            fetcher,
            matcher,
            source: Mutex::new(WorkSource::new(items)),
            store: ResultStore::new(),
        })
    }

    /// Runs the engine to completion
    ///
    /// Spawns exactly `worker_count` tasks and returns only once every
    /// worker has exited (work source exhausted). An empty work source
    /// returns immediately with zero outcomes recorded.
    pub async fn run(self: Arc<Self>) -> Result<(), PagegrepError> {
        let started = Instant::now();
        tracing::info!("Starting {} workers", self.worker_count);

        let mut handles = Vec::with_capacity(self.worker_count);
        for worker_id in 0..self.worker_count {
            let engine = Arc::clone(&self);
            handles.push(tokio::spawn(async move {
                engine.worker_loop(worker_id).await;
            }));
        }

        // Join every worker before surfacing any failure so the engine
        // never returns while a task is still running.
        let mut join_error = None;
        for handle in handles {
            if let Err(error) = handle.await {
                tracing::error!("Worker task failed: {}", error);
                join_error.get_or_insert(error);
            }
        }
        if let Some(error) = join_error {
            return Err(error.into());
        }

        tracing::info!(
            "Search completed: {} fragments in {:?}",
            self.store.len(),
            started.elapsed()
        );

        Ok(())
    }

    /// Produces the frozen outcome views
    ///
    /// Call after `run()` has returned.
    pub fn snapshot(&self) -> Snapshot {
        self.store.snapshot()
    }

    /// One worker: claim, pipeline, record, repeat until exhausted
    ///
    /// Pipeline errors are caught here per fragment and turned into
    /// failure outcomes; they never terminate the worker.
    async fn worker_loop(&self, worker_id: usize) {
        loop {
            // Claim under the lock, process outside it.
            let fragment = { self.source.lock().unwrap().claim_next() };
            let Some(fragment) = fragment else {
                tracing::debug!("Worker {} done, work source exhausted", worker_id);
                return;
            };

            match self.process_fragment(&fragment).await {
                Ok(offsets) => {
                    tracing::debug!("{}: {} match(es)", fragment, offsets.len());
                    self.store.record_success(&fragment, offsets);
                }
                Err(error) => {
                    tracing::error!("{}: {}", fragment, error);
                    self.store.record_failure(&fragment, error.to_string());
                }
            }
        }
    }

    /// Runs one fragment through fetch -> extract -> search
    ///
    /// Any stage failure short-circuits the remaining stages. An extract
    /// stage that finds nothing to search yields an empty offset list,
    /// recorded as a success.
    async fn process_fragment(&self, fragment: &str) -> Result<Vec<usize>, PipelineError> {
        let raw_path = self.fetch_page(fragment).await?;
        let text_path = self.extract_text(fragment, &raw_path).await?;
        match text_path {
            Some(path) => self.search_text(&path).await,
            None => Ok(Vec::new()),
        }
    }

    /// Fetch stage: retrieve the page into `<root>/raw/<stem>.html`
    async fn fetch_page(&self, fragment: &str) -> Result<PathBuf, PipelineError> {
        let url = fragment_url(fragment);
        let dest = self.workspace.raw_path(fragment);
        tracing::info!("Fetching {} -> {}", url, dest.display());
        self.fetcher.fetch_to_file(&url, &dest).await?;
        Ok(dest)
    }

    /// Extract stage: lowercase visible text into `<root>/text/<stem>.txt`
    ///
    /// Returns `Ok(None)` when the raw content or the derived text is
    /// blank; that is a recognized "nothing to search" condition, not an
    /// error.
    async fn extract_text(
        &self,
        fragment: &str,
        raw_path: &Path,
    ) -> Result<Option<PathBuf>, PipelineError> {
        let html = tokio::fs::read_to_string(raw_path)
            .await
            .map_err(PipelineError::Extract)?;
        if html.trim().is_empty() {
            return Ok(None);
        }

        let text = html_to_text(&html);
        if text.trim().is_empty() {
            return Ok(None);
        }
        let text = text.to_lowercase();

        let dest = self.workspace.text_path(fragment);
        tokio::fs::write(&dest, &text)
            .await
            .map_err(PipelineError::Extract)?;
        Ok(Some(dest))
    }

    /// Search stage: whole-word keyword offsets from the text artifact
    async fn search_text(&self, text_path: &Path) -> Result<Vec<usize>, PipelineError> {
        let text = tokio::fs::read_to_string(text_path)
            .await
            .map_err(PipelineError::Read)?;
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.matcher.find_offsets(&text))
    }
}

/// Runs the full search operation
///
/// This function orchestrates the run:
///
/// 1. Initialize the output directory layout
/// 2. Build the HTTP fetcher
/// 3. Obtain the input list (download it first when it is a URL)
/// 4. Parse the list into work items
/// 5. Run the worker pool to completion
/// 6. Return the frozen outcome snapshot
///
/// Startup errors (unreadable list, bad output directory) propagate to
/// the caller before any worker starts; per-fragment errors never do.
pub async fn run_search(config: Config) -> Result<Snapshot, PagegrepError> {
    let workspace = Workspace::new(&config.output.root_path);
    workspace.init()?;

    let timeout = Duration::from_secs(config.searcher.fetch_timeout_secs);
    let fetcher = Arc::new(HttpFetcher::new(timeout)?);

    let list_text = load_input_list(&config.input.list_source, &workspace, fetcher.as_ref()).await?;
    let items = input::parse_work_items(&list_text)?;
    tracing::info!(
        "Loaded {} input rows from {}",
        items.len(),
        config.input.list_source
    );

    let engine = Arc::new(Engine::new(&config, workspace, fetcher, items)?);
    Arc::clone(&engine).run().await?;
    Ok(engine.snapshot())
}

/// Reads the input list, downloading it first when the source is a URL
async fn load_input_list(
    source: &str,
    workspace: &Workspace,
    fetcher: &dyn PageFetcher,
) -> Result<String, PagegrepError> {
    let is_remote = matches!(
        Url::parse(source),
        Ok(url) if matches!(url.scheme(), "http" | "https")
    );
    if is_remote {
        let local = workspace.seed_list_path();
        tracing::info!("Fetching input list {} -> {}", source, local.display());
        fetcher
            .fetch_to_file(source, &local)
            .await
            .map_err(|error| PagegrepError::InputFetch {
                source_url: source.to_string(),
                message: error.to_string(),
            })?;
        Ok(tokio::fs::read_to_string(local).await?)
    } else {
        Ok(tokio::fs::read_to_string(source).await?)
    }
}

//! Result aggregation
//!
//! The [`ResultStore`] is the shared, thread-safe store workers write
//! their outcomes into. Exactly one outcome ever lands per fragment:
//! either the ordered match offsets or an error message, never both.
//! Keeping both kinds in one map behind one lock makes that invariant a
//! single atomic insert instead of a cross-map agreement.

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

/// Terminal result recorded for one fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Pipeline completed; ascending character offsets of keyword matches
    /// (empty when the page held no text or no matches)
    Success(Vec<usize>),

    /// A pipeline stage failed with this message
    Failure(String),
}

/// Frozen read-only view of all outcomes after the workers have joined
///
/// The success and error key sets are disjoint. Both maps are ordered by
/// fragment so report output is deterministic across reruns.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub results: BTreeMap<String, Vec<usize>>,
    pub errors: BTreeMap<String, String>,
}

/// Shared outcome store, written concurrently during a run
#[derive(Debug, Default)]
pub struct ResultStore {
    outcomes: Mutex<HashMap<String, Outcome>>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a successful outcome for a fragment
    pub fn record_success(&self, fragment: &str, offsets: Vec<usize>) {
        self.record(fragment, Outcome::Success(offsets));
    }

    /// Records a failed outcome for a fragment
    pub fn record_failure(&self, fragment: &str, message: String) {
        self.record(fragment, Outcome::Failure(message));
    }

    fn record(&self, fragment: &str, outcome: Outcome) {
        let mut outcomes = self.outcomes.lock().unwrap();
        if outcomes.insert(fragment.to_string(), outcome).is_some() {
            // The claim path guarantees one outcome per fragment; reaching
            // this means a dedup bug upstream.
            tracing::warn!("duplicate outcome recorded for fragment {}", fragment);
        }
    }

    /// Number of outcomes recorded so far
    pub fn len(&self) -> usize {
        self.outcomes.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Produces the frozen success/error views
    ///
    /// Meant to be called after all workers have joined; at that point no
    /// further synchronization is needed on the returned maps.
    pub fn snapshot(&self) -> Snapshot {
        let outcomes = self.outcomes.lock().unwrap();
        let mut snapshot = Snapshot::default();
        for (fragment, outcome) in outcomes.iter() {
            match outcome {
                Outcome::Success(offsets) => {
                    snapshot.results.insert(fragment.clone(), offsets.clone());
                }
                Outcome::Failure(message) => {
                    snapshot.errors.insert(fragment.clone(), message.clone());
                }
            }
        }
        snapshot
    }
}

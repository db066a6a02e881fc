//! Shared work source
//!
//! All workers drain one cursor over the input rows. The cursor advance,
//! fragment normalization, and dedup check-and-insert happen inside one
//! critical section so two workers can never both claim the same
//! fragment. The section covers only in-memory operations; network and
//! disk work happens outside the lock.

use crate::input::WorkItem;
use crate::url::normalize_fragment;
use std::collections::HashSet;

/// Ordered sequence of work items plus the set of fragments already
/// claimed by some worker
#[derive(Debug)]
pub struct WorkSource {
    items: std::vec::IntoIter<WorkItem>,
    claimed: HashSet<String>,
}

impl WorkSource {
    pub fn new(items: Vec<WorkItem>) -> Self {
        Self {
            items: items.into_iter(),
            claimed: HashSet::new(),
        }
    }

    /// Claims the next unclaimed fragment
    ///
    /// Rows that normalize to blank and fragments already claimed are
    /// skipped silently; no outcome is ever recorded for them. Returns
    /// `None` once the underlying sequence is exhausted, and keeps
    /// returning `None` afterwards.
    ///
    /// Callers must hold the surrounding lock for the whole call; the
    /// claim and the dedup insert are one unit.
    pub fn claim_next(&mut self) -> Option<String> {
        loop {
            let item = self.items.next()?;

            let fragment = match normalize_fragment(&item.url) {
                Some(fragment) => fragment,
                None => continue,
            };

            // insert() returning false means another claim already took
            // this fragment
            if !self.claimed.insert(fragment.clone()) {
                continue;
            }

            return Some(fragment);
        }
    }

    /// Number of distinct fragments claimed so far
    pub fn claimed_count(&self) -> usize {
        self.claimed.len()
    }
}

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::client::IssueTracker;
use crate::error::IssueError;
use crate::fetch::Partial;
use crate::logging::log_debug;
use crate::models::Issue;

/// Latest known snapshot of every issue seen during a run.
///
/// One instance is created per session and shared (usually behind an `Arc`)
/// by every operation. The map lock is only taken to copy entries out or to
/// commit a single snapshot; it is never held while talking to the tracker.
#[derive(Debug, Default)]
pub struct IssueCache {
    issues: Mutex<HashMap<u64, Arc<Issue>>>,
}

impl IssueCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<u64, Arc<Issue>>> {
        // Entries are only ever inserted whole, so a poisoned map is still consistent.
        self.issues.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Stores `issue`, replacing any earlier snapshot. Issues without a
    /// number are ignored.
    pub fn record(&self, issue: Issue) -> Option<Arc<Issue>> {
        let snapshot = Arc::new(issue);
        self.commit(&snapshot).then_some(snapshot)
    }

    /// Stores `snapshot` under its number; false if it has none.
    fn commit(&self, snapshot: &Arc<Issue>) -> bool {
        if snapshot.number == 0 {
            return false;
        }
        self.lock().insert(snapshot.number, Arc::clone(snapshot));
        true
    }

    pub fn get(&self, number: u64) -> Option<Arc<Issue>> {
        self.lock().get(&number).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copies out the cached snapshot for each id, in order.
    fn snapshot(&self, ids: &[u64]) -> Vec<Option<Arc<Issue>>> {
        let issues = self.lock();
        ids.iter().map(|id| issues.get(id).cloned()).collect()
    }

    /// Returns one slot per requested id, in request order.
    ///
    /// Cached snapshots are used as is; every distinct missing id is fetched
    /// once, recorded, and substituted into its slots. A failed fetch leaves
    /// `None` in its slots and adds a line to the batch error.
    pub async fn bulk_read<T>(&self, tracker: &T, ids: &[u64]) -> Partial<Vec<Option<Arc<Issue>>>>
    where
        T: IssueTracker + ?Sized,
    {
        let mut all = self.snapshot(ids);

        let mut fetched: HashMap<u64, Option<Arc<Issue>>> = HashMap::new();
        let mut failures = Vec::new();

        for (slot, &id) in all.iter_mut().zip(ids) {
            if slot.is_some() {
                continue;
            }
            if let Some(result) = fetched.get(&id) {
                *slot = result.clone();
                continue;
            }

            log_debug(&format!("issue cache miss for #{}", id));
            let result = match tracker.get_issue(id).await {
                Ok(issue) => {
                    let snapshot = Arc::new(issue);
                    self.commit(&snapshot);
                    Some(snapshot)
                }
                Err(e) => {
                    failures.push(format!("reading #{}: {}", id, e));
                    None
                }
            };
            *slot = result.clone();
            fetched.insert(id, result);
        }

        if failures.is_empty() {
            Partial::complete(all)
        } else {
            Partial::failed(all, IssueError::Batch(failures))
        }
    }
}

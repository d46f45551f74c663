use std::sync::Arc;

use arc_swap::ArcSwapOption;

use crate::entity::Snapshot;

/// State shared between the sync loop (single writer) and host readers.
///
/// Every field is swapped as a whole, so readers always see either the old
/// or the new value and never a half-built snapshot.
#[derive(Debug, Default)]
pub struct Published {
    snapshot: ArcSwapOption<Snapshot>,
    version: ArcSwapOption<String>,
    sync_error: ArcSwapOption<String>,
    version_error: ArcSwapOption<String>,
}

impl Published {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last successfully built snapshot, if any sync has succeeded yet.
    pub fn snapshot(&self) -> Option<Arc<Snapshot>> {
        self.snapshot.load_full()
    }

    pub fn version(&self) -> Option<String> {
        self.version.load_full().map(|v| v.as_ref().clone())
    }

    /// Message of the most recent failed sync, cleared by the next success.
    pub fn last_error(&self) -> Option<String> {
        self.sync_error.load_full().map(|e| e.as_ref().clone())
    }

    /// Outstanding problems, for operators rather than end users.
    pub fn errors(&self) -> Vec<String> {
        [self.version_error.load_full(), self.sync_error.load_full()]
            .into_iter()
            .flatten()
            .map(|e| e.as_ref().clone())
            .collect()
    }

    pub fn publish(&self, snapshot: Snapshot) {
        self.snapshot.store(Some(Arc::new(snapshot)));
        self.sync_error.store(None);
    }

    /// Keeps the current snapshot and remembers why the sync failed.
    pub fn record_failure(&self, message: String) {
        self.sync_error.store(Some(Arc::new(message)));
    }

    pub fn set_version(&self, version: String) {
        self.version.store(Some(Arc::new(version)));
        self.version_error.store(None);
    }

    pub fn record_version_failure(&self, message: String) {
        self.version_error.store(Some(Arc::new(message)));
    }
}

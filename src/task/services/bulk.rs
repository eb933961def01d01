//! Partial-failure bookkeeping for bulk operations.

use crate::task::domain::TaskId;
use std::collections::BTreeMap;
use std::collections::HashSet;

/// Per-item outcomes of a bulk operation.
///
/// Bulk operations process each id independently: an item's failure is
/// recorded here instead of aborting the batch, and nothing is rolled
/// back. Ids that processed cleanly do not appear.
#[derive(Debug, Default)]
pub struct BulkOperationResults<K, E>
where
    K: Ord,
{
    errors: BTreeMap<K, E>,
}

impl<K, E> BulkOperationResults<K, E>
where
    K: Ord,
{
    /// Creates an empty result set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    /// Records the failure of one item.
    pub fn add_error(&mut self, id: K, error: E) {
        self.errors.insert(id, error);
    }

    /// Returns whether any item failed.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the full id-to-error map.
    #[must_use]
    pub const fn error_map(&self) -> &BTreeMap<K, E> {
        &self.errors
    }

    /// Returns the ids that failed.
    #[must_use]
    pub fn failed_ids(&self) -> Vec<&K> {
        self.errors.keys().collect()
    }

    /// Returns the error recorded for one id, if it failed.
    #[must_use]
    pub fn error_for_id(&self, id: &K) -> Option<&E> {
        self.errors.get(id)
    }
}

/// Deduplicates task ids, keeping the first occurrence of each.
pub(crate) fn dedupe_ids(ids: &[TaskId]) -> Vec<TaskId> {
    let mut seen = HashSet::new();
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}

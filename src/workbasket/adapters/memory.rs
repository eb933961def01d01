//! In-memory access-item repository for tests and embedded use.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::workbasket::{
    domain::{WorkbasketAccessItem, WorkbasketId},
    ports::{WorkbasketAccessRepository, WorkbasketAccessRepositoryError, WorkbasketAccessResult},
};

/// Thread-safe in-memory access-item repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkbasketAccessRepository {
    items: Arc<RwLock<HashMap<WorkbasketId, Vec<WorkbasketAccessItem>>>>,
}

impl InMemoryWorkbasketAccessRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an access item, replacing any existing grant for the same
    /// `(workbasket, access id)` pair.
    ///
    /// # Errors
    ///
    /// Returns [`WorkbasketAccessRepositoryError::Persistence`] when the
    /// underlying lock is poisoned.
    pub fn put(&self, item: WorkbasketAccessItem) -> WorkbasketAccessResult<()> {
        let mut items = self.items.write().map_err(|err| {
            WorkbasketAccessRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let entries = items.entry(item.workbasket_id()).or_default();
        entries.retain(|existing| existing.access_id() != item.access_id());
        entries.push(item);
        Ok(())
    }
}

#[async_trait]
impl WorkbasketAccessRepository for InMemoryWorkbasketAccessRepository {
    async fn access_items_for_workbasket(
        &self,
        workbasket_id: WorkbasketId,
    ) -> WorkbasketAccessResult<Vec<WorkbasketAccessItem>> {
        let items = self.items.read().map_err(|err| {
            WorkbasketAccessRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(items.get(&workbasket_id).cloned().unwrap_or_default())
    }
}

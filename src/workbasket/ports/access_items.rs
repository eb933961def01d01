//! Repository port for reading workbasket access items.

use crate::workbasket::domain::{WorkbasketAccessItem, WorkbasketId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for workbasket access repository operations.
pub type WorkbasketAccessResult<T> = Result<T, WorkbasketAccessRepositoryError>;

/// Read access to the access items of a workbasket.
///
/// Access items are administered outside the engine; the authorization
/// gate only reads them.
#[async_trait]
pub trait WorkbasketAccessRepository: Send + Sync {
    /// Returns every access item of the given workbasket.
    ///
    /// Returns an empty list when the workbasket has no access items or
    /// does not exist.
    async fn access_items_for_workbasket(
        &self,
        workbasket_id: WorkbasketId,
    ) -> WorkbasketAccessResult<Vec<WorkbasketAccessItem>>;
}

/// Errors returned by workbasket access repository implementations.
#[derive(Debug, Clone, Error)]
pub enum WorkbasketAccessRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl WorkbasketAccessRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

//! Lookup port for classification summaries.

use crate::task::domain::ClassificationSummary;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for classification lookups.
pub type ClassificationResult<T> = Result<T, ClassificationRepositoryError>;

/// Read access to classifications.
///
/// Classifications are administered outside the engine; the lifecycle
/// service reads them on task creation and whenever an update changes the
/// classification key.
#[async_trait]
pub trait ClassificationRepository: Send + Sync {
    /// Finds a classification summary by key.
    ///
    /// Returns `None` when no classification carries the key.
    async fn find_by_key(&self, key: &str) -> ClassificationResult<Option<ClassificationSummary>>;
}

/// Errors returned by classification repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ClassificationRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ClassificationRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

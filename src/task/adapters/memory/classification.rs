//! In-memory classification repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::ClassificationSummary,
    ports::{ClassificationRepository, ClassificationRepositoryError, ClassificationResult},
};

/// Thread-safe in-memory classification repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryClassificationRepository {
    classifications: Arc<RwLock<HashMap<String, ClassificationSummary>>>,
}

impl InMemoryClassificationRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a classification, replacing any existing one under the same
    /// key.
    ///
    /// # Errors
    ///
    /// Returns [`ClassificationRepositoryError::Persistence`] when the
    /// underlying lock is poisoned.
    pub fn put(&self, classification: ClassificationSummary) -> ClassificationResult<()> {
        let mut classifications = self.classifications.write().map_err(|err| {
            ClassificationRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        classifications.insert(classification.key().to_owned(), classification);
        Ok(())
    }
}

#[async_trait]
impl ClassificationRepository for InMemoryClassificationRepository {
    async fn find_by_key(&self, key: &str) -> ClassificationResult<Option<ClassificationSummary>> {
        let classifications = self.classifications.read().map_err(|err| {
            ClassificationRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(classifications.get(key).cloned())
    }
}

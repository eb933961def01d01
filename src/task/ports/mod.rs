//! Port contracts for the task lifecycle.

mod classification;
mod repository;
mod spi;

pub use classification::{
    ClassificationRepository, ClassificationRepositoryError, ClassificationResult,
};
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
pub use spi::{
    ExtensionRegistry, PriorityServiceProvider, ReviewRequiredProvider, TaskEndstatePreprocessor,
};

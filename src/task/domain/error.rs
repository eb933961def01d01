//! Error types for task domain validation and parsing.

use super::TaskId;
use thiserror::Error;

/// Errors returned while constructing or validating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// A mandatory object reference field is blank.
    #[error("object reference field '{0}' must not be blank")]
    IncompleteObjectReference(&'static str),

    /// An owner value is blank.
    #[error("owner must not be blank")]
    EmptyOwner,

    /// The custom attribute map exceeds its capacity.
    #[error("task carries {count} custom attributes, at most {max} are allowed")]
    TooManyCustomAttributes {
        /// Number of attributes on the task.
        count: usize,
        /// Allowed maximum.
        max: usize,
    },

    /// An update tried to move the task into another workbasket.
    #[error("the workbasket of task '{task_id}' cannot be changed")]
    WorkbasketChangeForbidden {
        /// The task whose workbasket the update tried to change.
        task_id: TaskId,
    },
}

/// Error returned while parsing task states from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task state: {0}")]
pub struct ParseTaskStateError(pub String);

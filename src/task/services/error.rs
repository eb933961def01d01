//! Service-level errors for task lifecycle operations.

use crate::task::domain::{TaskDomainError, TaskId, TaskState};
use crate::task::ports::{ClassificationRepositoryError, TaskRepositoryError};
use crate::workbasket::services::AuthorizationError;
use thiserror::Error;

/// Result type for task lifecycle service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Errors raised by task lifecycle operations.
///
/// Single-task operations propagate these directly; bulk operations catch
/// them per item and report them through
/// [`BulkOperationResults`](super::BulkOperationResults).
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// No task exists under the given identifier.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The task is not in a state the operation may start from.
    #[error(
        "task '{task_id}' is in state {actual}, required state is one of [{}]",
        format_states(.required)
    )]
    InvalidTaskState {
        /// The task the operation ran against.
        task_id: TaskId,
        /// The state the task is actually in.
        actual: TaskState,
        /// The full set of states the operation accepts.
        required: Vec<TaskState>,
    },

    /// The task is owned by somebody else.
    #[error("user '{current_user_id}' is not the owner of task '{task_id}'")]
    InvalidOwner {
        /// The task the operation ran against.
        task_id: TaskId,
        /// The acting user.
        current_user_id: String,
    },

    /// The caller-supplied copy is stale; the task changed while editing.
    #[error("The entity with id '{entity_id}' cannot be updated since it has been modified while editing.")]
    Concurrency {
        /// Identifier of the stale entity.
        entity_id: TaskId,
    },

    /// No classification carries the given key.
    #[error("classification with key '{0}' was not found")]
    ClassificationNotFound(String),

    /// The principal may not act on the task's workbasket, or lacks a
    /// required role.
    #[error(transparent)]
    Authorization(#[from] AuthorizationError),

    /// A caller-supplied value violates a domain invariant.
    #[error(transparent)]
    InvalidArgument(#[from] TaskDomainError),

    /// Task persistence failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),

    /// Classification lookup failed.
    #[error(transparent)]
    Classification(#[from] ClassificationRepositoryError),
}

impl TaskServiceError {
    /// Builds the wrong-source-state error for an operation, carrying the
    /// task's actual state and the full set of accepted states.
    #[must_use]
    pub fn invalid_state(task_id: TaskId, actual: TaskState, required: &[TaskState]) -> Self {
        Self::InvalidTaskState {
            task_id,
            actual,
            required: required.to_vec(),
        }
    }
}

fn format_states(states: &[TaskState]) -> String {
    states
        .iter()
        .map(|state| state.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

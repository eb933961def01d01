//! Extension points invoked at fixed points in the state machine.
//!
//! Each extension point is a narrow capability interface with zero to many
//! registered implementations. Implementations are invoked in registration
//! order with a defined combination rule: boolean results are OR'ed,
//! optional results are first-present-wins, and preprocessors all run. An
//! empty registry is a valid no-op configuration.

use crate::task::domain::Task;

/// Decides whether a completing task must pass review first.
pub trait ReviewRequiredProvider: Send + Sync {
    /// Returns `true` when the task must go to review instead of
    /// completing.
    fn review_required(&self, task: &Task) -> bool;
}

/// Preprocesses a task immediately before a terminal state is persisted.
///
/// Runs on the complete, cancel, and terminate paths, and only when the
/// terminal state was actually chosen: a completion downgraded to review
/// does not trigger it. Implementations may mutate the task's custom
/// attributes.
pub trait TaskEndstatePreprocessor: Send + Sync {
    /// Adjusts the task before its terminal state is persisted.
    fn process_task_before_end_state(&self, task: &mut Task);
}

/// Supplies a task priority ahead of the classification default.
pub trait PriorityServiceProvider: Send + Sync {
    /// Returns the priority for the task, or `None` to pass.
    fn calculate_priority(&self, task: &Task) -> Option<i32>;
}

/// Ordered registry of extension-point implementations.
///
/// Providers are discovered at startup and registered in order; the engine
/// holds the registry for the lifetime of the service.
#[derive(Default)]
pub struct ExtensionRegistry {
    review_required: Vec<Box<dyn ReviewRequiredProvider>>,
    endstate_preprocessors: Vec<Box<dyn TaskEndstatePreprocessor>>,
    priority_providers: Vec<Box<dyn PriorityServiceProvider>>,
}

impl ExtensionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a review-required provider.
    pub fn register_review_required(&mut self, provider: impl ReviewRequiredProvider + 'static) {
        self.review_required.push(Box::new(provider));
    }

    /// Registers an end-state preprocessor.
    pub fn register_endstate_preprocessor(
        &mut self,
        preprocessor: impl TaskEndstatePreprocessor + 'static,
    ) {
        self.endstate_preprocessors.push(Box::new(preprocessor));
    }

    /// Registers a priority provider.
    pub fn register_priority_provider(&mut self, provider: impl PriorityServiceProvider + 'static) {
        self.priority_providers.push(Box::new(provider));
    }

    /// Returns whether any registered provider demands a review.
    #[must_use]
    pub fn review_required(&self, task: &Task) -> bool {
        self.review_required
            .iter()
            .any(|provider| provider.review_required(task))
    }

    /// Runs every registered preprocessor over the task in registration
    /// order.
    pub fn preprocess_end_state(&self, task: &mut Task) {
        for preprocessor in &self.endstate_preprocessors {
            preprocessor.process_task_before_end_state(task);
        }
    }

    /// Returns the first priority a registered provider supplies.
    #[must_use]
    pub fn calculate_priority(&self, task: &Task) -> Option<i32> {
        self.priority_providers
            .iter()
            .find_map(|provider| provider.calculate_priority(task))
    }
}

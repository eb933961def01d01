//! Priority resolution policy.

use crate::task::domain::Task;
use crate::task::ports::ExtensionRegistry;

/// Computes a task's effective priority.
///
/// A positive manual priority is authoritative; zero is an explicit
/// override to the lowest priority. When the manual priority is negative
/// (unset), registered priority providers are consulted in registration
/// order and the first value wins; without one, the classification's
/// configured priority applies.
///
/// The resolver runs on create, on every update that changed a
/// priority-relevant field, and from the external refresh sweep that
/// follows a classification change.
#[must_use]
pub fn resolve_priority(task: &Task, extensions: &ExtensionRegistry) -> i32 {
    let manual = task.manual_priority();
    if manual >= 0 {
        return manual;
    }
    extensions
        .calculate_priority(task)
        .unwrap_or_else(|| task.classification().priority())
}

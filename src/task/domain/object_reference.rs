//! Business-object references a task is about.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pointer to an external business object.
///
/// Company, type, and value are mandatory and validated at construction,
/// so an incomplete reference is unrepresentable. System and system
/// instance are optional refinements.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectReference {
    company: String,
    system: Option<String>,
    system_instance: Option<String>,
    ref_type: String,
    value: String,
}

impl ObjectReference {
    /// Creates a reference from the mandatory fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::IncompleteObjectReference`] naming the
    /// first mandatory field that is blank after trimming.
    pub fn new(
        company: impl Into<String>,
        ref_type: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, TaskDomainError> {
        let company = require_field("company", company.into())?;
        let ref_type = require_field("type", ref_type.into())?;
        let value = require_field("value", value.into())?;
        Ok(Self {
            company,
            system: None,
            system_instance: None,
            ref_type,
            value,
        })
    }

    /// Sets the optional system field.
    #[must_use]
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Sets the optional system instance field.
    #[must_use]
    pub fn with_system_instance(mut self, system_instance: impl Into<String>) -> Self {
        self.system_instance = Some(system_instance.into());
        self
    }

    /// Returns the company the referenced object belongs to.
    #[must_use]
    pub fn company(&self) -> &str {
        &self.company
    }

    /// Returns the optional system name.
    #[must_use]
    pub fn system(&self) -> Option<&str> {
        self.system.as_deref()
    }

    /// Returns the optional system instance.
    #[must_use]
    pub fn system_instance(&self) -> Option<&str> {
        self.system_instance.as_deref()
    }

    /// Returns the type of the referenced object.
    #[must_use]
    pub fn ref_type(&self) -> &str {
        &self.ref_type
    }

    /// Returns the value identifying the referenced object.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ObjectReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.company, self.ref_type, self.value)
    }
}

/// Returns the trimmed value, or the incomplete-reference error naming the
/// blank field.
fn require_field(name: &'static str, raw: String) -> Result<String, TaskDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskDomainError::IncompleteObjectReference(name));
    }
    Ok(trimmed.to_owned())
}

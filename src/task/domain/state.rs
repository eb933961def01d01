//! Task lifecycle states and the transition table.

use super::ParseTaskStateError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task lifecycle state.
///
/// The claimed states mirror the unclaimed ones: claiming a ready task
/// yields [`TaskState::Claimed`], claiming a task that is ready for review
/// yields [`TaskState::InReview`]. Cancelling a claim maps back. The end
/// states are absorbing; no operation leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    /// Task is waiting to be worked on.
    Ready,
    /// Task is being worked on by its owner.
    Claimed,
    /// Task is waiting for a reviewer.
    ReadyForReview,
    /// Task is being reviewed by its owner.
    InReview,
    /// Task work has finished.
    Completed,
    /// Task was cancelled before completion.
    Cancelled,
    /// Task was terminated by an administrator.
    Terminated,
}

impl TaskState {
    /// The absorbing end states.
    pub const END_STATES: [Self; 3] = [Self::Completed, Self::Cancelled, Self::Terminated];

    /// Every state a task can still be worked from.
    pub const NON_FINAL_STATES: [Self; 4] =
        [Self::Ready, Self::Claimed, Self::ReadyForReview, Self::InReview];

    /// The states a claim may start from.
    pub const CLAIM_SOURCE_STATES: [Self; 2] = [Self::Ready, Self::ReadyForReview];

    /// The states a claim may be cancelled from, and the only states a
    /// task can be completed from without force.
    pub const CLAIMED_STATES: [Self; 2] = [Self::Claimed, Self::InReview];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Claimed => "claimed",
            Self::ReadyForReview => "ready_for_review",
            Self::InReview => "in_review",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Terminated => "terminated",
        }
    }

    /// Returns whether this is an absorbing end state.
    #[must_use]
    pub const fn is_end_state(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled | Self::Terminated)
    }

    /// Returns whether the task is held by an owner in this state.
    #[must_use]
    pub const fn is_claimed_state(self) -> bool {
        matches!(self, Self::Claimed | Self::InReview)
    }

    /// Returns the state a claim transitions into, for states a claim may
    /// start from.
    #[must_use]
    pub const fn claim_target(self) -> Option<Self> {
        match self {
            Self::Ready => Some(Self::Claimed),
            Self::ReadyForReview => Some(Self::InReview),
            _ => None,
        }
    }

    /// Returns the state a cancelled claim falls back into, for states
    /// currently held by an owner.
    #[must_use]
    pub const fn cancel_claim_target(self) -> Option<Self> {
        match self {
            Self::Claimed => Some(Self::Ready),
            Self::InReview => Some(Self::ReadyForReview),
            _ => None,
        }
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskState {
    type Error = ParseTaskStateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "ready" => Ok(Self::Ready),
            "claimed" => Ok(Self::Claimed),
            "ready_for_review" => Ok(Self::ReadyForReview),
            "in_review" => Ok(Self::InReview),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            "terminated" => Ok(Self::Terminated),
            _ => Err(ParseTaskStateError(value.to_owned())),
        }
    }
}

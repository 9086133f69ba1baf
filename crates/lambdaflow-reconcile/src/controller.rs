//! Lifecycle contract shared by the per-kind controllers

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Opaque identifier correlating a desired record with its remote object.
///
/// Stable for the resource's lifetime once bound; losing the binding
/// (a remote 404) means the resource has ceased to exist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceHandle(String);

impl ResourceHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ResourceHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ResourceHandle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Outcome of a read: `Absent` is not an error, it tells the caller to drop
/// the local record.
#[derive(Debug, Clone, PartialEq)]
pub enum ReadOutcome<T> {
    Found(T),
    Absent,
}

impl<T> ReadOutcome<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, ReadOutcome::Absent)
    }

    pub fn found(self) -> Option<T> {
        match self {
            ReadOutcome::Found(v) => Some(v),
            ReadOutcome::Absent => None,
        }
    }
}

/// Outcome of a delete: a remote "not found" is idempotent success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    AlreadyGone,
}

/// Per-kind lifecycle operations over a desired/observed record pair.
///
/// Each operation is a single request/response exchange; cancellation is
/// dropping the returned future. Controllers hold only the immutable
/// client captured at construction, so distinct handles may be reconciled
/// concurrently; the host serializes operations per handle.
#[async_trait]
pub trait ResourceController: Send + Sync {
    type Desired;
    type Observed;

    /// Create the remote object and bind a handle from the returned
    /// identifier. Fails locally, before any network call, when a
    /// precondition on the desired record is violated.
    async fn create(&self, desired: &Self::Desired) -> Result<Self::Observed>;

    /// Fetch current remote state. Observed fields are populated only from
    /// the response, never invented locally.
    async fn read(&self, handle: &ResourceHandle) -> Result<ReadOutcome<Self::Observed>>;

    /// Identity fields are immutable post-creation, so update performs no
    /// remote mutation: it re-persists the prior record with any
    /// non-identity desired fields carried over.
    async fn update(
        &self,
        desired: &Self::Desired,
        prior: &Self::Observed,
    ) -> Result<Self::Observed>;

    /// Delete the remote object. Not-found is `AlreadyGone`, not an error.
    async fn delete(&self, handle: &ResourceHandle) -> Result<DeleteOutcome>;

    /// Bind a handle directly from an externally supplied identifier; the
    /// caller must follow up with `read` to populate the record.
    fn import(&self, external_id: &str) -> ResourceHandle {
        ResourceHandle::new(external_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_is_opaque_and_stable() {
        let handle = ResourceHandle::new("i-123");
        assert_eq!(handle.as_str(), "i-123");
        assert_eq!(handle.to_string(), "i-123");
        assert_eq!(handle, ResourceHandle::new("i-123"));
    }

    #[test]
    fn test_handle_serde_is_transparent() {
        let handle = ResourceHandle::new("i-123");
        assert_eq!(
            serde_json::to_value(&handle).unwrap(),
            serde_json::json!("i-123")
        );
    }

    #[test]
    fn test_read_outcome_helpers() {
        let found = ReadOutcome::Found(1);
        assert!(!found.is_absent());
        assert_eq!(found.found(), Some(1));

        let absent: ReadOutcome<i32> = ReadOutcome::Absent;
        assert!(absent.is_absent());
        assert_eq!(absent.found(), None);
    }
}

//! Remote state matcher
//!
//! The service returns SSH keys as an unindexed list, so lookup is a linear
//! scan over the observed records. O(n) on purpose: result sets are a
//! single account's resources. First match wins.

use lambdaflow_api::types::{InstanceBody, SshKeyBody};

/// A record observed on the remote side that carries its own identifier.
pub trait RemoteIdentity {
    fn remote_id(&self) -> &str;
}

impl RemoteIdentity for SshKeyBody {
    fn remote_id(&self) -> &str {
        &self.id
    }
}

impl RemoteIdentity for InstanceBody {
    fn remote_id(&self) -> &str {
        &self.id
    }
}

/// Find the first record whose identifier equals the target, or report
/// absence. Exact equality only.
pub fn find_by_id<'a, T: RemoteIdentity>(records: &'a [T], id: &str) -> Option<&'a T> {
    records.iter().find(|r| r.remote_id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(id: &str, name: &str) -> SshKeyBody {
        serde_json::from_value(serde_json::json!({ "id": id, "name": name })).unwrap()
    }

    #[test]
    fn test_finds_matching_record() {
        let keys = vec![key("k-1", "alpha"), key("k-2", "beta")];
        let found = find_by_id(&keys, "k-2").unwrap();
        assert_eq!(found.name, "beta");
    }

    #[test]
    fn test_absence() {
        let keys = vec![key("k-1", "alpha")];
        assert!(find_by_id(&keys, "k-9").is_none());
    }

    #[test]
    fn test_first_match_wins() {
        // Identifiers are expected unique; if they are not, the first one
        // in list order is authoritative.
        let keys = vec![key("k-1", "first"), key("k-1", "second")];
        let found = find_by_id(&keys, "k-1").unwrap();
        assert_eq!(found.name, "first");
    }

    #[test]
    fn test_exact_equality_only() {
        let keys = vec![key("k-10", "alpha")];
        assert!(find_by_id(&keys, "k-1").is_none());
    }
}

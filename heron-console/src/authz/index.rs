//! Permission index snapshot

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use shared::client::SyncResult;
use shared::types::Action;

/// In-memory permission snapshot for one session.
///
/// Maps resource -> action -> granted. Built fresh from every
/// permission-sync outcome and replaced wholesale; nothing patches an
/// existing index, so a render can never observe a half-applied sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermissionIndex {
    grants: HashMap<String, HashMap<String, bool>>,
    /// Server timestamp of the sync this snapshot was built from
    synced_at: String,
}

/// Split a dotted `"resource.action"` key on the first `.`.
///
/// A key without a separator degrades to empty resource and action: the
/// entry is recorded but can never match a real query, so a malformed key
/// is an inert no-op rather than an error.
fn split_key(key: &str) -> (&str, &str) {
    key.split_once('.').unwrap_or(("", ""))
}

impl PermissionIndex {
    /// Build a snapshot from a sync outcome.
    ///
    /// `created`, `existing`, and `updated` keys record granted=true.
    /// `deleted` keys record granted=false and are applied last, so a
    /// revocation overrides a same-key grant regardless of which lists
    /// the key appeared in.
    pub fn build(result: &SyncResult, synced_at: impl Into<String>) -> Self {
        let mut grants: HashMap<String, HashMap<String, bool>> = HashMap::new();

        let granted = result
            .created
            .iter()
            .chain(&result.existing)
            .chain(&result.updated);
        for key in granted {
            let (resource, action) = split_key(key);
            grants
                .entry(resource.to_string())
                .or_default()
                .insert(action.to_string(), true);
        }

        for key in &result.deleted {
            let (resource, action) = split_key(key);
            grants
                .entry(resource.to_string())
                .or_default()
                .insert(action.to_string(), false);
        }

        Self {
            grants,
            synced_at: synced_at.into(),
        }
    }

    /// Server timestamp this snapshot was built from
    pub fn synced_at(&self) -> &str {
        &self.synced_at
    }

    /// Number of resources with at least one recorded entry
    pub fn resource_count(&self) -> usize {
        self.grants.len()
    }

    /// Stored grant for (resource, action); false when either is unknown
    pub fn has_permission(&self, resource: &str, action: Action) -> bool {
        self.grants
            .get(resource)
            .and_then(|actions| actions.get(action.as_str()))
            .copied()
            .unwrap_or(false)
    }

    /// True iff at least one action under `resource` is granted
    pub fn has_any_permission(&self, resource: &str) -> bool {
        self.grants
            .get(resource)
            .is_some_and(|actions| actions.values().any(|granted| *granted))
    }

    /// True iff every listed action is granted; vacuously true when empty
    pub fn has_all_permissions(&self, resource: &str, actions: &[Action]) -> bool {
        actions
            .iter()
            .all(|action| self.has_permission(resource, *action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sync(created: &[&str], existing: &[&str], updated: &[&str], deleted: &[&str]) -> SyncResult {
        let owned = |keys: &[&str]| keys.iter().map(|k| k.to_string()).collect();
        SyncResult {
            created: owned(created),
            existing: owned(existing),
            updated: owned(updated),
            deleted: owned(deleted),
            errors: Vec::new(),
        }
    }

    #[test]
    fn test_granted_lists_set_true() {
        let idx = PermissionIndex::build(
            &sync(&["job.create"], &["job.read"], &["candidate.write"], &[]),
            "2026-01-01T00:00:00Z",
        );
        assert!(idx.has_permission("job", Action::Create));
        assert!(idx.has_permission("job", Action::Read));
        assert!(idx.has_permission("candidate", Action::Write));
        assert!(!idx.has_permission("job", Action::Delete));
    }

    #[test]
    fn test_deleted_overrides_created() {
        let idx = PermissionIndex::build(
            &sync(&["job.create"], &["job.read"], &[], &["job.create"]),
            "t",
        );
        assert!(!idx.has_permission("job", Action::Create));
        assert!(idx.has_permission("job", Action::Read));
    }

    #[test]
    fn test_deleted_overrides_regardless_of_list() {
        // Same key revoked and present in every granted list
        let idx = PermissionIndex::build(
            &sync(
                &["candidate.delete"],
                &["candidate.delete"],
                &["candidate.delete"],
                &["candidate.delete"],
            ),
            "t",
        );
        assert!(!idx.has_permission("candidate", Action::Delete));
    }

    #[test]
    fn test_unknown_resource_and_action() {
        let idx = PermissionIndex::build(&sync(&["job.read"], &[], &[], &[]), "t");
        assert!(!idx.has_permission("nonexistent", Action::Read));
        assert!(!idx.has_any_permission("nonexistent"));
        assert!(!idx.has_permission("job", Action::Write));
    }

    #[test]
    fn test_any_permission_requires_a_true_grant() {
        // Only a revoked entry: the resource is known but nothing granted
        let idx = PermissionIndex::build(&sync(&[], &[], &[], &["job.read"]), "t");
        assert!(!idx.has_any_permission("job"));

        let idx = PermissionIndex::build(&sync(&["job.read"], &[], &[], &[]), "t");
        assert!(idx.has_any_permission("job"));
    }

    #[test]
    fn test_all_permissions_vacuous_and_exact() {
        let idx = PermissionIndex::build(&sync(&["job.read", "job.create"], &[], &[], &[]), "t");
        assert!(idx.has_all_permissions("job", &[]));
        assert!(idx.has_all_permissions("job", &[Action::Read, Action::Create]));
        assert!(!idx.has_all_permissions("job", &[Action::Read, Action::Delete]));
    }

    #[test]
    fn test_malformed_key_is_inert() {
        let idx = PermissionIndex::build(&sync(&["jobread", ""], &[], &[], &[]), "t");
        // Recorded under empty resource/action, unreachable by real queries
        assert_eq!(idx.resource_count(), 1);
        for action in Action::ALL {
            assert!(!idx.has_permission("jobread", action));
            assert!(!idx.has_permission("", action));
        }
    }

    #[test]
    fn test_build_is_idempotent() {
        let result = sync(
            &["job.create", "candidate.read"],
            &["job.read"],
            &["skill.write"],
            &["job.create"],
        );
        let a = PermissionIndex::build(&result, "t");
        let b = PermissionIndex::build(&result, "t");
        assert_eq!(a, b);
        for resource in ["job", "candidate", "skill", "other"] {
            for action in Action::ALL {
                assert_eq!(
                    a.has_permission(resource, action),
                    b.has_permission(resource, action)
                );
            }
            assert_eq!(a.has_any_permission(resource), b.has_any_permission(resource));
        }
    }

    #[test]
    fn test_snapshot_carries_sync_timestamp() {
        let idx = PermissionIndex::build(&SyncResult::default(), "2026-02-03T04:05:06Z");
        assert_eq!(idx.synced_at(), "2026-02-03T04:05:06Z");
    }
}

//! Authorization Module
//!
//! Action-level gating for the view layer. A [`PermissionIndex`] is built
//! from each permission-sync outcome and queried through the pure helpers
//! here; a session that has not synced yet simply has no index, and every
//! query against a missing index fails closed.

mod index;

pub use index::PermissionIndex;

use shared::types::Action;

/// Resources the UI gates, in declared-set order. The dotted
/// `"resource.action"` keys sent to the sync endpoint are the cross
/// product of this list with [`Action::ALL`].
pub const GATED_RESOURCES: &[&str] = &[
    "job",
    "candidate",
    "skill",
    "major_skill",
    "job_category",
    "organization",
    "role",
    "user",
    "interview_round",
];

/// The full declared permission set for the sync request
pub fn declared_permissions() -> Vec<String> {
    let mut keys = Vec::with_capacity(GATED_RESOURCES.len() * Action::ALL.len());
    for resource in GATED_RESOURCES {
        for action in Action::ALL {
            keys.push(format!("{}.{}", resource, action));
        }
    }
    keys
}

/// Can the session perform `action` on `resource`?
///
/// False when the index is absent (not yet synced), the resource is
/// unknown, or the action is unknown under that resource.
pub fn has_permission(index: Option<&PermissionIndex>, resource: &str, action: Action) -> bool {
    index.is_some_and(|idx| idx.has_permission(resource, action))
}

/// Can the session perform any action at all on `resource`?
pub fn has_any_permission(index: Option<&PermissionIndex>, resource: &str) -> bool {
    index.is_some_and(|idx| idx.has_any_permission(resource))
}

/// Can the session perform every listed action on `resource`?
/// Vacuously true for an empty action list, synced or not.
pub fn has_all_permissions(
    index: Option<&PermissionIndex>,
    resource: &str,
    actions: &[Action],
) -> bool {
    actions
        .iter()
        .all(|action| has_permission(index, resource, *action))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_set_is_cross_product() {
        let keys = declared_permissions();
        assert_eq!(keys.len(), GATED_RESOURCES.len() * Action::ALL.len());
        assert!(keys.contains(&"job.create".to_string()));
        assert!(keys.contains(&"interview_round.delete".to_string()));
    }

    #[test]
    fn test_missing_index_fails_closed() {
        assert!(!has_permission(None, "job", Action::Read));
        assert!(!has_any_permission(None, "job"));
        assert!(!has_all_permissions(None, "job", &[Action::Read]));
    }

    #[test]
    fn test_missing_index_vacuous_all() {
        assert!(has_all_permissions(None, "job", &[]));
    }
}

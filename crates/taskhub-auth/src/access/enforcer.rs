//! Access enforcement — decides whether a principal may act on a task.

use taskhub_entity::task::TaskOwnership;
use taskhub_entity::user::UserRole;

use crate::jwt::Principal;

/// Pure decision functions for task access.
///
/// Moderators may act on any task. Contributors may act on tasks they
/// created or are assigned to. Viewers may act only on tasks assigned to
/// them. An unassigned task never matches an assignee-based grant.
#[derive(Debug, Clone)]
pub struct AccessEnforcer;

impl AccessEnforcer {
    /// Creates a new enforcer.
    pub fn new() -> Self {
        Self
    }

    /// Returns whether the principal may act on a task with the given
    /// ownership fields.
    pub fn can_access(&self, principal: &Principal, ownership: &TaskOwnership) -> bool {
        match principal.role {
            UserRole::Moderator => true,
            UserRole::Contributor => {
                principal.id == ownership.creator_id
                    || Some(principal.id) == ownership.assignee_id
            }
            UserRole::Viewer => Some(principal.id) == ownership.assignee_id,
        }
    }

    /// Coarse role gate for route protection (e.g. only contributors and
    /// moderators may create tasks).
    pub fn is_allowed_role(&self, principal: &Principal, allowed: &[UserRole]) -> bool {
        allowed.contains(&principal.role)
    }
}

impl Default for AccessEnforcer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal(id: i64, role: UserRole) -> Principal {
        Principal { id, role }
    }

    fn task(creator_id: i64, assignee_id: Option<i64>) -> TaskOwnership {
        TaskOwnership {
            creator_id,
            assignee_id,
        }
    }

    #[test]
    fn test_moderator_accesses_everything() {
        let enforcer = AccessEnforcer::new();
        let moderator = principal(42, UserRole::Moderator);

        assert!(enforcer.can_access(&moderator, &task(7, Some(9))));
        assert!(enforcer.can_access(&moderator, &task(1, None)));
    }

    #[test]
    fn test_contributor_needs_creator_or_assignee() {
        let enforcer = AccessEnforcer::new();
        let ownership = task(7, Some(9));

        assert!(enforcer.can_access(&principal(7, UserRole::Contributor), &ownership));
        assert!(enforcer.can_access(&principal(9, UserRole::Contributor), &ownership));
        assert!(!enforcer.can_access(&principal(3, UserRole::Contributor), &ownership));
    }

    #[test]
    fn test_viewer_needs_assignee() {
        let enforcer = AccessEnforcer::new();
        let ownership = task(7, Some(9));

        assert!(enforcer.can_access(&principal(9, UserRole::Viewer), &ownership));
        assert!(!enforcer.can_access(&principal(7, UserRole::Viewer), &ownership));
    }

    #[test]
    fn test_unassigned_task_never_matches_assignee_grants() {
        let enforcer = AccessEnforcer::new();
        let ownership = task(7, None);

        assert!(!enforcer.can_access(&principal(9, UserRole::Viewer), &ownership));
        assert!(enforcer.can_access(&principal(7, UserRole::Contributor), &ownership));
    }

    #[test]
    fn test_role_gate() {
        let enforcer = AccessEnforcer::new();
        let allowed = [UserRole::Contributor, UserRole::Moderator];

        assert!(enforcer.is_allowed_role(&principal(1, UserRole::Contributor), &allowed));
        assert!(enforcer.is_allowed_role(&principal(1, UserRole::Moderator), &allowed));
        assert!(!enforcer.is_allowed_role(&principal(1, UserRole::Viewer), &allowed));
    }
}

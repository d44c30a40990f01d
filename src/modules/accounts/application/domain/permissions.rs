use uuid::Uuid;

use super::entities::UserRole;

/// Operations guarded by an explicit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    ReviewInstructorApplications,
    ManageInstructors,
    EditOwnProfile,
}

/// The authenticated caller of a workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub user_id: Uuid,
    pub role: UserRole,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("permission denied: {0:?}")]
pub struct PermissionDenied(pub Permission);

impl Actor {
    pub fn has_permission(&self, permission: Permission) -> bool {
        if self.is_superuser {
            return true;
        }

        match permission {
            Permission::ReviewInstructorApplications | Permission::ManageInstructors => {
                self.is_staff && self.is_active
            }
            Permission::EditOwnProfile => self.is_active,
        }
    }

    pub fn require(&self, permission: Permission) -> Result<(), PermissionDenied> {
        if self.has_permission(permission) {
            Ok(())
        } else {
            tracing::warn!(user_id = %self.user_id, ?permission, "Permission denied");
            Err(PermissionDenied(permission))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(is_active: bool, is_staff: bool, is_superuser: bool) -> Actor {
        Actor {
            user_id: Uuid::new_v4(),
            role: UserRole::Student,
            is_active,
            is_staff,
            is_superuser,
        }
    }

    #[test]
    fn test_student_can_only_edit_own_profile() {
        let student = actor(true, false, false);

        assert!(student.has_permission(Permission::EditOwnProfile));
        assert!(!student.has_permission(Permission::ReviewInstructorApplications));
        assert!(!student.has_permission(Permission::ManageInstructors));
    }

    #[test]
    fn test_inactive_user_cannot_edit_profile() {
        let inactive = actor(false, false, false);
        assert_eq!(
            inactive.require(Permission::EditOwnProfile),
            Err(PermissionDenied(Permission::EditOwnProfile))
        );
    }

    #[test]
    fn test_staff_can_review_and_manage() {
        let staff = actor(true, true, false);

        assert!(staff.has_permission(Permission::ReviewInstructorApplications));
        assert!(staff.has_permission(Permission::ManageInstructors));
    }

    #[test]
    fn test_superuser_has_every_permission() {
        let root = actor(false, false, true);

        for permission in [
            Permission::ReviewInstructorApplications,
            Permission::ManageInstructors,
            Permission::EditOwnProfile,
        ] {
            assert!(root.require(permission).is_ok());
        }
    }
}

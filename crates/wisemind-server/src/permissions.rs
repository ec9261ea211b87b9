use crate::routes::error::ApiError;
use wisemind_model::permission::{Permission, Role, has_permission, has_role};
use wisemind_model::user::UserRole;

pub(crate) fn require_permission(user: &UserRole, permission: Permission) -> Result<(), ApiError> {
    if has_permission(user.role, permission) {
        return Ok(());
    }
    tracing::debug!(user = %user.id, role = %user.role, %permission, "missing permission");
    Err(ApiError::Forbidden("Insufficient permissions"))
}

pub(crate) fn require_role(user: &UserRole, role: Role) -> Result<(), ApiError> {
    if has_role(user.role, role) {
        return Ok(());
    }
    tracing::debug!(user = %user.id, role = %user.role, required = %role, "insufficient role");
    Err(ApiError::Forbidden("Insufficient role"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;
    use wisemind_model::permission::{Action, Resource};

    fn user(role: Role) -> UserRole {
        UserRole {
            id: Uuid::new_v4(),
            name: "Ada".to_owned(),
            role,
        }
    }

    #[test]
    fn test_require_permission() {
        let create_lessons = Permission::new(Action::Create, Resource::Lessons);
        assert!(require_permission(&user(Role::Teacher), create_lessons).is_ok());
        assert!(matches!(
            require_permission(&user(Role::Student), create_lessons),
            Err(ApiError::Forbidden(_))
        ));
    }

    #[test]
    fn test_require_role() {
        assert!(require_role(&user(Role::Admin), Role::Admin).is_ok());
        assert!(require_role(&user(Role::Teacher), Role::Admin).is_err());
        assert!(require_role(&user(Role::Student), Role::Student).is_ok());
    }
}

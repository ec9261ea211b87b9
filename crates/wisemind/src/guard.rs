//! Navigation guards for the client routes.

use http::StatusCode;
use wisemind_model::permission::{Permission, Role, has_all_permissions, has_role};
use wisemind_model::user::User;

pub const SIGN_IN: &str = "/sign-in";
pub const UNAUTHORIZED: &str = "/unauthorized";

/// Paths that are reachable without a session.
pub const PUBLIC_PATHS: [&str; 4] = ["/", SIGN_IN, "/sign-up", UNAUTHORIZED];

/// Access requirements of a route.
#[derive(Debug, Default, Clone)]
pub struct RouteMeta {
    pub required_role: Option<Role>,
    pub required_permissions: Vec<Permission>,
}

impl RouteMeta {
    #[must_use]
    pub fn role(role: Role) -> Self {
        Self {
            required_role: Some(role),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn permissions(permissions: impl IntoIterator<Item = Permission>) -> Self {
        Self {
            required_permissions: permissions.into_iter().collect(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    Redirect { to: &'static str, code: StatusCode },
}

#[must_use]
pub fn is_public(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path)
}

/// Decides whether `user` may open `path`.
///
/// Public paths always proceed. Without a session the user is sent to sign
/// in, with an insufficient role or a missing permission to the unauthorized
/// page.
#[must_use]
pub fn guard(path: &str, meta: &RouteMeta, user: Option<&User>) -> Navigation {
    if is_public(path) {
        return Navigation::Proceed;
    }
    let Some(user) = user else {
        return Navigation::Redirect {
            to: SIGN_IN,
            code: StatusCode::UNAUTHORIZED,
        };
    };
    if let Some(required) = meta.required_role {
        if !has_role(user.role, required) {
            tracing::debug!(path, role = %user.role, %required, "role not sufficient for route");
            return Navigation::Redirect {
                to: UNAUTHORIZED,
                code: StatusCode::FORBIDDEN,
            };
        }
    }
    if !has_all_permissions(&user.permissions, &meta.required_permissions) {
        tracing::debug!(path, "missing permission for route");
        return Navigation::Redirect {
            to: UNAUTHORIZED,
            code: StatusCode::FORBIDDEN,
        };
    }
    Navigation::Proceed
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;
    use wisemind_model::permission::{Action, Resource, permissions_for};

    fn user(role: Role) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Ada".to_owned(),
            streak: 0,
            last_login: None,
            skills_learned: 0,
            xp_points: 0,
            overall_progress: 0,
            role,
            permissions: permissions_for(role).to_vec(),
            created_at: Utc::now().naive_utc(),
            achievements: vec![],
            module_progress: vec![],
            completed_lessons: vec![],
        }
    }

    #[test]
    fn test_public_paths_bypass() {
        let meta = RouteMeta::role(Role::Admin);
        for path in PUBLIC_PATHS {
            assert_eq!(guard(path, &meta, None), Navigation::Proceed);
        }
    }

    #[test]
    fn test_missing_session() {
        assert_eq!(
            guard("/modules", &RouteMeta::default(), None),
            Navigation::Redirect {
                to: "/sign-in",
                code: StatusCode::UNAUTHORIZED
            }
        );
    }

    #[test]
    fn test_role() {
        let forbidden = Navigation::Redirect {
            to: "/unauthorized",
            code: StatusCode::FORBIDDEN,
        };
        let teacher_only = RouteMeta::role(Role::Teacher);
        assert_eq!(guard("/teach", &teacher_only, Some(&user(Role::Student))), forbidden);
        assert_eq!(guard("/teach", &teacher_only, Some(&user(Role::Teacher))), Navigation::Proceed);
        assert_eq!(guard("/teach", &teacher_only, Some(&user(Role::Admin))), Navigation::Proceed);
        assert_eq!(
            guard("/admin", &RouteMeta::role(Role::Admin), Some(&user(Role::Teacher))),
            forbidden
        );
    }

    #[test]
    fn test_permissions() {
        let meta = RouteMeta::permissions([
            Permission::new(Action::Read, Resource::Lessons),
            Permission::new(Action::Create, Resource::Lessons),
        ]);
        assert_eq!(
            guard("/lessons/new", &meta, Some(&user(Role::Student))),
            Navigation::Redirect {
                to: "/unauthorized",
                code: StatusCode::FORBIDDEN
            }
        );
        assert_eq!(guard("/lessons/new", &meta, Some(&user(Role::Teacher))), Navigation::Proceed);
    }

    #[test]
    fn test_role_checked_before_permissions() {
        let meta = RouteMeta {
            required_role: Some(Role::Admin),
            required_permissions: vec![Permission::new(Action::Delete, Resource::Users)],
        };
        assert_eq!(guard("/admin/users", &meta, Some(&user(Role::Admin))), Navigation::Proceed);
        assert!(matches!(
            guard("/admin/users", &meta, Some(&user(Role::Teacher))),
            Navigation::Redirect { .. }
        ));
    }
}

use crate::achievement::Achievement;
use crate::permission::{Permission, Role};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModuleProgress {
    pub module_id: String,
    pub title: String,
    #[schema(example = 50)]
    pub progress: i32,
    pub unlocked: bool,
}

/// Everything the client shows about the signed in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    #[schema(example = "username")]
    pub name: String,
    pub streak: i32,
    pub last_login: Option<NaiveDate>,
    pub skills_learned: i32,
    pub xp_points: i32,
    pub overall_progress: i32,
    pub role: Role,
    #[schema(value_type = Vec<String>, example = json!(["read:modules", "read:lessons"]))]
    pub permissions: Vec<Permission>,
    pub created_at: NaiveDateTime,
    pub achievements: Vec<Achievement>,
    pub module_progress: Vec<ModuleProgress>,
    pub completed_lessons: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRole {
    pub user_id: Uuid,
    pub new_role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserRole {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateRoleResult {
    pub success: bool,
    pub user: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_role_body() {
        let id = Uuid::new_v4();
        let body: UpdateRole = serde_json::from_str(&format!(r#"{{"userId":"{id}","newRole":"TEACHER"}}"#)).unwrap();
        assert_eq!(body.user_id, id);
        assert_eq!(body.new_role, Role::Teacher);
        assert!(serde_json::from_str::<UpdateRole>(&format!(r#"{{"userId":"{id}","newRole":"ROOT"}}"#)).is_err());
    }
}

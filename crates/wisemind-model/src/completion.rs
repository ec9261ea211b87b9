use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompleteLesson {
    pub user_id: Uuid,
    #[schema(example = "wise-mind")]
    pub lesson_id: String,
}

/// Outcome of completing a lesson.
///
/// Repeated completions report the current aggregates with
/// `was_already_completed` set and `xp_earned` of 0.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompletionResult {
    pub success: bool,
    pub was_already_completed: bool,
    pub lesson_id: String,
    pub module_id: String,
    pub xp_earned: i32,
    pub new_total_xp: i32,
    pub module_progress: i32,
    pub overall_progress: i32,
    pub is_module_complete: bool,
    /// Module unlocked for the user by this completion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocked_module: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub new_achievements: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize() {
        let result = CompletionResult {
            success: true,
            lesson_id: "l1".to_owned(),
            module_id: "m1".to_owned(),
            xp_earned: 10,
            new_total_xp: 10,
            module_progress: 50,
            overall_progress: 25,
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"success":true,"wasAlreadyCompleted":false,"lessonId":"l1","moduleId":"m1","xpEarned":10,"newTotalXp":10,"moduleProgress":50,"overallProgress":25,"isModuleComplete":false}"#
        );
    }
}

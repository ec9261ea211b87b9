use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const FIRST_LESSON: &str = "first-lesson";
pub const THREE_DAY_STREAK: &str = "three-day-streak";
pub const DBT_GRADUATE: &str = "dbt-graduate";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    #[schema(example = "first-lesson")]
    pub id: String,
    #[schema(example = "First Steps")]
    pub name: String,
    pub description: String,
    pub icon: String,
    pub earned: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earned_date: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewAchievement {
    #[schema(example = "mindfulness-master")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    /// Finishing this module earns the achievement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_id: Option<String>,
}

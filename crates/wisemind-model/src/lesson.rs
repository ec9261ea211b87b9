use crate::module::Module;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{AsRefStr, Display};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LessonKind {
    Theory,
    Exercise,
    Practice,
    Quiz,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    #[schema(example = "wise-mind")]
    pub id: String,
    pub module_id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: LessonKind,
    #[schema(example = 15)]
    pub xp_reward: i32,
    pub order: i32,
    #[schema(value_type = Object)]
    pub content: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LessonWithModule {
    #[serde(flatten)]
    pub lesson: Lesson,
    pub module: Module,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewLesson {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: LessonKind,
    pub xp_reward: i32,
    pub order: i32,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub content: Value,
}

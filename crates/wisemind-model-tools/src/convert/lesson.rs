use crate::convert::{FromDbModel, FromModel};
use wisemind_entity::lesson::{Kind as KindModel, Model as LessonModel};
use wisemind_model::lesson::{Lesson, LessonKind, NewLesson};

impl FromDbModel<KindModel> for LessonKind {
    fn from_db_model(model: KindModel) -> Self {
        match model {
            KindModel::Theory => Self::Theory,
            KindModel::Exercise => Self::Exercise,
            KindModel::Practice => Self::Practice,
            KindModel::Quiz => Self::Quiz,
        }
    }
}

impl FromModel<LessonKind> for KindModel {
    fn from_model(model: LessonKind) -> Self {
        match model {
            LessonKind::Theory => Self::Theory,
            LessonKind::Exercise => Self::Exercise,
            LessonKind::Practice => Self::Practice,
            LessonKind::Quiz => Self::Quiz,
        }
    }
}

impl FromDbModel<LessonModel> for Lesson {
    fn from_db_model(model: LessonModel) -> Self {
        Self {
            id: model.id,
            module_id: model.module_id,
            title: model.title,
            description: model.description,
            kind: LessonKind::from_db_model(model.kind),
            xp_reward: model.xp_reward,
            order: model.order,
            content: model.content,
        }
    }
}

/// A new lesson placed in the module with the given id.
impl FromModel<(NewLesson, String)> for LessonModel {
    fn from_model((lesson, module_id): (NewLesson, String)) -> Self {
        Self {
            id: lesson.id,
            module_id,
            title: lesson.title,
            description: lesson.description,
            kind: KindModel::from_model(lesson.kind),
            xp_reward: lesson.xp_reward,
            order: lesson.order,
            content: lesson.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::{IntoDbModel, IntoModel};
    use serde_json::json;

    #[test]
    fn test_new_lesson_keeps_content() {
        let new = NewLesson {
            id: "wise-mind".to_owned(),
            title: "Wise Mind".to_owned(),
            description: String::new(),
            kind: LessonKind::Quiz,
            xp_reward: 15,
            order: 2,
            content: json!({"questions": [{"id": "q1"}]}),
        };
        let model: LessonModel = (new, "mindfulness".to_owned()).into_db_model();
        assert_eq!(model.module_id, "mindfulness");
        assert_eq!(model.kind, KindModel::Quiz);

        let lesson: Lesson = model.into_model();
        assert_eq!(lesson.kind, LessonKind::Quiz);
        assert_eq!(lesson.content["questions"][0]["id"], "q1");
    }
}

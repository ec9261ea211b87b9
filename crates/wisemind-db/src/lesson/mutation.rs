use sea_orm::prelude::*;
use sea_orm::IntoActiveModel;
use wisemind_entity::lesson::{Entity, Model};

pub struct Mutation;

impl Mutation {
    pub async fn create_lesson<C: ConnectionTrait>(conn: &C, lesson: Model) -> Result<Model, DbErr> {
        Entity::insert(lesson.clone().into_active_model())
            .exec_without_returning(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn std::error::Error, lesson = %lesson.id, "failed to create lesson");
            })?;
        Ok(lesson)
    }
}

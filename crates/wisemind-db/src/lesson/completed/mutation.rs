use sea_orm::ActiveValue::Set;
use sea_orm::prelude::*;
use wisemind_entity::lesson::completed::{ActiveModel, Entity, Model};

pub struct Mutation;

impl Mutation {
    /// Fails with a unique violation if the pair already exists.
    pub async fn create<C: ConnectionTrait>(conn: &C, user_id: Uuid, lesson_id: String) -> Result<Model, DbErr> {
        let model = Model {
            user_id,
            lesson_id,
            completed_at: chrono::Utc::now().naive_utc(),
        };
        let active = ActiveModel {
            user_id: Set(model.user_id),
            lesson_id: Set(model.lesson_id.clone()),
            completed_at: Set(model.completed_at),
        };
        Entity::insert(active).exec_without_returning(conn).await?;
        Ok(model)
    }
}

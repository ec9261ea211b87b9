use sea_orm::prelude::*;
use sea_orm::IntoActiveModel;
use wisemind_entity::achievement::{Entity, Model};

pub struct Mutation;

impl Mutation {
    pub async fn create_achievement<C: ConnectionTrait>(conn: &C, achievement: Model) -> Result<Model, DbErr> {
        Entity::insert(achievement.clone().into_active_model())
            .exec_without_returning(conn)
            .await?;
        Ok(achievement)
    }
}

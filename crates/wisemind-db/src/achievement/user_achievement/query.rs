use sea_orm::prelude::*;
use sea_orm::QuerySelect;
use wisemind_entity::achievement::user_achievement::{Column, Entity, Model};

pub struct Query;

impl Query {
    pub async fn all_for_user<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<Vec<Model>, DbErr> {
        Entity::find().filter(Column::UserId.eq(user_id)).all(conn).await
    }

    pub async fn earned_ids<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<Vec<String>, DbErr> {
        Entity::find()
            .select_only()
            .column(Column::AchievementId)
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Earned.eq(true))
            .into_tuple()
            .all(conn)
            .await
    }
}

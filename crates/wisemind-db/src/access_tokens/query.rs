use sea_orm::prelude::*;
use wisemind_entity::access_tokens::{Column, Entity, Model};

pub struct Query;

impl Query {
    pub async fn find_by_user_id<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<Option<Model>, DbErr> {
        Entity::find().filter(Column::UserId.eq(user_id)).one(conn).await
    }
}

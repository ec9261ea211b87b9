use sea_orm::prelude::*;
use wisemind_entity::module::progress::{Column, Entity, Model};

pub struct Query;

impl Query {
    pub async fn find<C: ConnectionTrait>(conn: &C, user_id: Uuid, module_id: &str) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id((user_id, module_id.to_owned())).one(conn).await
    }

    pub async fn all_for_user<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<Vec<Model>, DbErr> {
        Entity::find().filter(Column::UserId.eq(user_id)).all(conn).await
    }
}

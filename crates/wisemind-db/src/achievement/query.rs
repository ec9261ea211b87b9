use sea_orm::prelude::*;
use sea_orm::QueryOrder;
use wisemind_entity::achievement::{Column, Entity, Model};

pub struct Query;

impl Query {
    pub async fn all<C: ConnectionTrait>(conn: &C) -> Result<Vec<Model>, DbErr> {
        Entity::find().order_by_asc(Column::Id).all(conn).await
    }

    pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: &str) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id.to_owned()).one(conn).await
    }

    /// Achievements granted for finishing `module_id`.
    pub async fn for_module<C: ConnectionTrait>(conn: &C, module_id: &str) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::ModuleId.eq(module_id))
            .order_by_asc(Column::Id)
            .all(conn)
            .await
    }
}

use sea_orm::prelude::*;
use sea_orm::QueryOrder;
use wisemind_entity::lesson::{Column, Entity, Model};
use wisemind_entity::module;

pub struct Query;

impl Query {
    pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: &str) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id.to_owned()).one(conn).await
    }

    /// Loads a lesson together with its parent module.
    pub async fn find_with_module<C: ConnectionTrait>(
        conn: &C,
        id: &str,
    ) -> Result<Option<(Model, Option<module::Model>)>, DbErr> {
        Entity::find_by_id(id.to_owned())
            .find_also_related(module::Entity)
            .one(conn)
            .await
    }

    pub async fn for_module<C: ConnectionTrait>(conn: &C, module_id: &str) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::ModuleId.eq(module_id))
            .order_by_asc(Column::Order)
            .order_by_asc(Column::Id)
            .all(conn)
            .await
    }

    pub async fn count_for_module<C: ConnectionTrait>(conn: &C, module_id: &str) -> Result<u64, DbErr> {
        Entity::find().filter(Column::ModuleId.eq(module_id)).count(conn).await
    }

    pub async fn count_all<C: ConnectionTrait>(conn: &C) -> Result<u64, DbErr> {
        Entity::find().count(conn).await
    }
}

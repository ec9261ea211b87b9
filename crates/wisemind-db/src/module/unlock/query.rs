use sea_orm::prelude::*;
use sea_orm::QuerySelect;
use wisemind_entity::module;
use wisemind_entity::module::unlock::{Column, Entity};

pub struct Query;

impl Query {
    /// Ids of the modules the user unlocked through progress.
    pub async fn unlocked_ids<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<Vec<String>, DbErr> {
        Entity::find()
            .select_only()
            .column(Column::ModuleId)
            .filter(Column::UserId.eq(user_id))
            .into_tuple()
            .all(conn)
            .await
    }

    /// Catalog default or a per-user unlock record.
    pub async fn is_unlocked<C: ConnectionTrait>(conn: &C, user_id: Uuid, module: &module::Model) -> Result<bool, DbErr> {
        if module.unlocked {
            return Ok(true);
        }
        let record = Entity::find_by_id((user_id, module.id.clone())).one(conn).await?;
        Ok(record.is_some())
    }
}

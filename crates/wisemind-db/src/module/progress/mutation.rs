use sea_orm::ActiveValue::Set;
use sea_orm::prelude::*;
use sea_orm::sea_query::OnConflict;
use wisemind_entity::module::progress::{ActiveModel, Column, Entity};

pub struct Mutation;

impl Mutation {
    pub async fn upsert<C: ConnectionTrait>(conn: &C, user_id: Uuid, module_id: String, progress: i32) -> Result<(), DbErr> {
        let model = ActiveModel {
            user_id: Set(user_id),
            module_id: Set(module_id),
            progress: Set(progress),
        };
        Entity::insert(model)
            .on_conflict(
                OnConflict::columns([Column::UserId, Column::ModuleId])
                    .update_column(Column::Progress)
                    .to_owned(),
            )
            .exec_without_returning(conn)
            .await?;
        Ok(())
    }
}

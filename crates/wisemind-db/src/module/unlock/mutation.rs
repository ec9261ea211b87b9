use sea_orm::ActiveValue::Set;
use sea_orm::prelude::*;
use sea_orm::sea_query::OnConflict;
use wisemind_entity::module::unlock::{ActiveModel, Column, Entity};

pub struct Mutation;

impl Mutation {
    /// Records that `user_id` unlocked `module_id`. Unlocking twice keeps the first record.
    pub async fn unlock<C: ConnectionTrait>(conn: &C, user_id: Uuid, module_id: String) -> Result<(), DbErr> {
        let model = ActiveModel {
            user_id: Set(user_id),
            module_id: Set(module_id),
            unlocked_at: Set(chrono::Utc::now().naive_utc()),
        };
        Entity::insert(model)
            .on_conflict(OnConflict::columns([Column::UserId, Column::ModuleId]).do_nothing().to_owned())
            .do_nothing()
            .exec(conn)
            .await?;
        Ok(())
    }
}

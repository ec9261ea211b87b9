use sea_orm::ActiveValue::Set;
use sea_orm::prelude::*;
use sea_orm::sea_query::OnConflict;
use wisemind_entity::achievement::user_achievement::{ActiveModel, Column, Entity};

pub struct Mutation;

impl Mutation {
    pub async fn award<C: ConnectionTrait>(conn: &C, user_id: Uuid, achievement_id: String) -> Result<(), DbErr> {
        let model = ActiveModel {
            user_id: Set(user_id),
            achievement_id: Set(achievement_id),
            earned: Set(true),
            earned_at: Set(Some(chrono::Utc::now().naive_utc())),
        };
        Entity::insert(model)
            .on_conflict(
                OnConflict::columns([Column::UserId, Column::AchievementId])
                    .update_columns([Column::Earned, Column::EarnedAt])
                    .to_owned(),
            )
            .exec_without_returning(conn)
            .await?;
        Ok(())
    }
}

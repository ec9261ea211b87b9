use sea_orm::prelude::*;
use sea_orm::{QueryOrder, QuerySelect};
use wisemind_entity::lesson;
use wisemind_entity::lesson::completed::{Column, Entity, Model};

pub struct Query;

impl Query {
    pub async fn find<C: ConnectionTrait>(conn: &C, user_id: Uuid, lesson_id: &str) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id((user_id, lesson_id.to_owned())).one(conn).await
    }

    pub async fn count_for_user<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<u64, DbErr> {
        Entity::find().filter(Column::UserId.eq(user_id)).count(conn).await
    }

    pub async fn count_for_user_in_module<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        module_id: &str,
    ) -> Result<u64, DbErr> {
        Entity::find()
            .inner_join(lesson::Entity)
            .filter(Column::UserId.eq(user_id))
            .filter(lesson::Column::ModuleId.eq(module_id))
            .count(conn)
            .await
    }

    /// Lesson ids in the order the user completed them.
    pub async fn completed_ids<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<Vec<String>, DbErr> {
        Entity::find()
            .select_only()
            .column(Column::LessonId)
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::CompletedAt)
            .order_by_asc(Column::LessonId)
            .into_tuple()
            .all(conn)
            .await
    }
}

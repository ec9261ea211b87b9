use sea_orm::{ConnectionTrait, DbErr, EntityTrait};
use wisemind_entity::identity_mapping::{Entity, Model};

pub struct Query;

impl Query {
    pub async fn find_by_subject<C: ConnectionTrait>(conn: &C, subject: &str) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(subject.to_owned()).one(conn).await
    }
}

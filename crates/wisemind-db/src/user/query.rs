use sea_orm::QuerySelect;
use sea_orm::prelude::*;
use wisemind_entity::access_tokens::{Column as AccessTokenColumn, Entity as AccessToken};
use wisemind_entity::user::{Entity as UserEntity, Model as User};

pub struct Query;

impl Query {
    pub async fn find_user_by_id<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<Option<User>, DbErr> {
        UserEntity::find_by_id(id).one(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn std::error::Error, "error loading user");
        })
    }

    pub async fn find_by_token<C: ConnectionTrait>(conn: &C, token: &str) -> Result<Option<User>, DbErr> {
        UserEntity::find()
            .inner_join(AccessToken)
            .filter(AccessTokenColumn::AccessToken.eq(token))
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn std::error::Error, "error finding user by token");
            })
    }
}

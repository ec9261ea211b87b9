use sea_orm::prelude::*;
use sea_orm::IntoActiveModel;
use wisemind_entity::module::{Entity, Model};

pub struct Mutation;

impl Mutation {
    pub async fn create_module<C: ConnectionTrait>(conn: &C, module: Model) -> Result<Model, DbErr> {
        Entity::insert(module.clone().into_active_model())
            .exec_without_returning(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn std::error::Error, module = %module.id, "failed to create module");
            })?;
        Ok(module)
    }
}

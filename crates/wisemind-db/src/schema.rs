use sea_orm::{ConnectionTrait, DbErr, EntityTrait, Schema};
use wisemind_entity::{access_tokens, achievement, identity_mapping, lesson, module, user};

async fn create_table<C: ConnectionTrait, E: EntityTrait>(conn: &C, schema: &Schema, entity: E) -> Result<(), DbErr> {
    let backend = conn.get_database_backend();
    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();
    conn.execute(backend.build(&statement)).await.inspect_err(|error| {
        tracing::error!(error = error as &dyn std::error::Error, table = %entity.table_name(), "failed to create table");
    })?;
    Ok(())
}

/// Creates every table that is missing. Existing tables are left untouched.
pub async fn create<C: ConnectionTrait>(conn: &C) -> Result<(), DbErr> {
    let schema = Schema::new(conn.get_database_backend());

    // parents before children
    create_table(conn, &schema, user::Entity).await?;
    create_table(conn, &schema, identity_mapping::Entity).await?;
    create_table(conn, &schema, access_tokens::Entity).await?;
    create_table(conn, &schema, module::Entity).await?;
    create_table(conn, &schema, lesson::Entity).await?;
    create_table(conn, &schema, achievement::Entity).await?;
    create_table(conn, &schema, lesson::completed::Entity).await?;
    create_table(conn, &schema, module::progress::Entity).await?;
    create_table(conn, &schema, module::unlock::Entity).await?;
    create_table(conn, &schema, achievement::user_achievement::Entity).await?;

    tracing::debug!("database schema is up to date");
    Ok(())
}

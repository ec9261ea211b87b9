use crate::TestDb;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::borrow::Cow;
use tempfile::TempDir;
use thiserror::Error;

/// A SQLite database file that lives as long as this value.
pub struct SqliteDb {
    #[allow(dead_code)]
    temp_dir: TempDir,
    uri: String,
}

#[derive(Error, Debug)]
pub enum SqliteError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Db(#[from] DbErr),
}

impl SqliteDb {
    pub fn new() -> Result<Self, SqliteError> {
        let temp_dir = TempDir::with_prefix("wisemind-sqlite-db")?;
        let path = temp_dir.path().join("db.sqlite");
        let path = path
            .to_str()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::InvalidData, "Invalid path"))?;
        let uri = format!("sqlite://{path}?mode=rwc");

        tracing::info!(uri = ?uri, "return sqlite db uri");
        Ok(Self { temp_dir, uri })
    }

    /// Connects and creates the schema.
    pub async fn connect(&self) -> Result<DatabaseConnection, SqliteError> {
        let mut options = ConnectOptions::new(self.db_uri().into_owned());
        options.sqlx_logging(false);
        let conn = Database::connect(options).await?;
        wisemind_db::schema::create(&conn).await?;
        Ok(conn)
    }
}

impl TestDb for SqliteDb {
    fn db_uri(&self) -> Cow<'_, str> {
        self.uri.as_str().into()
    }
}

/// An in-memory database with the schema in place.
pub async fn memory_db() -> Result<DatabaseConnection, DbErr> {
    let conn = Database::connect("sqlite::memory:").await?;
    wisemind_db::schema::create(&conn).await?;
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test(tokio::test)]
    async fn test_file_db_keeps_data() {
        let db = SqliteDb::new().unwrap();
        let conn = db.connect().await.unwrap();
        wisemind_db::user::Mutation::create_user(&conn, "Ada".to_owned(), wisemind_entity::user::Role::Student)
            .await
            .unwrap();
        drop(conn);

        let conn = db.connect().await.unwrap();
        let users = <wisemind_entity::user::Entity as sea_orm::EntityTrait>::find()
            .all(&conn)
            .await
            .unwrap();
        assert_eq!(users.len(), 1);
    }
}

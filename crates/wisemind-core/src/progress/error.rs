use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("User {0} not found")]
    UserNotFound(Uuid),

    #[error("Lesson {0} not found")]
    LessonNotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

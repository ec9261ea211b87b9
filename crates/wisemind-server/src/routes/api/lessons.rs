use crate::permissions::require_permission;
use crate::routes::error::{ApiError, ApiJson, ErrorBody};
use crate::user::ExtractUser;
use axum::extract::Path;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use sea_orm::DatabaseConnection;
use wisemind_core::{catalog, progress};
use wisemind_model::completion::{CompleteLesson, CompletionResult};
use wisemind_model::lesson::LessonWithModule;
use wisemind_model::permission::{Action, Permission, Resource};

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/complete", post(complete_lesson))
        .route("/{lesson}", get(get_lesson))
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/api/lessons/{lesson}",
    responses(
        (status = OK, body = LessonWithModule, description = "The lesson with its module"),
        (status = NOT_FOUND, body = ErrorBody, description = "Lesson not found"),
    ),
    params(
        ("lesson" = String, Path, description = "Lesson id"),
    ),
    tag = "lessons",
    security(
        (),
        ("token" = [])
    )
)]
pub(crate) async fn get_lesson(
    user: Option<ExtractUser>,
    Extension(conn): Extension<DatabaseConnection>,
    Path(lesson_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = user.map(|ExtractUser(user)| user.id);
    let lesson = catalog::lesson_with_module(&conn, &lesson_id, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Lesson not found".to_owned()))?;
    Ok(Json(lesson))
}

#[utoipa::path(
    post,
    request_body = CompleteLesson,
    path = "/api/lessons/complete",
    responses(
        (status = OK, body = CompletionResult, description = "Progress after the completion. Repeated completions change nothing"),
        (status = BAD_REQUEST, body = ErrorBody, description = "Missing userId or lessonId"),
        (status = UNAUTHORIZED, body = ErrorBody),
        (status = FORBIDDEN, body = ErrorBody, description = "Completing for another user without update:users"),
        (status = NOT_FOUND, body = ErrorBody, description = "User or lesson not found"),
    ),
    tag = "lessons",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn complete_lesson(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    ApiJson(body): ApiJson<CompleteLesson>,
) -> Result<Json<CompletionResult>, ApiError> {
    if body.lesson_id.trim().is_empty() {
        return Err(ApiError::Validation("Missing required fields".into()));
    }
    if body.user_id != user.id {
        require_permission(&user, Permission::new(Action::Update, Resource::Users))?;
    }
    let result = progress::complete_lesson(&conn, body.user_id, &body.lesson_id).await?;
    Ok(Json(result))
}

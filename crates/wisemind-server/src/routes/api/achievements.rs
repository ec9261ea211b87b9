use crate::permissions::require_permission;
use crate::routes::error::{ApiError, ApiJson, ErrorBody};
use crate::user::ExtractUser;
use axum::routing::post;
use axum::{Extension, Json, Router};
use http::StatusCode;
use sea_orm::DatabaseConnection;
use wisemind_core::catalog;
use wisemind_model::achievement::{Achievement, NewAchievement};
use wisemind_model::permission::{Action, Permission, Resource};

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", post(create_achievement)).with_state(())
}

#[utoipa::path(
    post,
    request_body = NewAchievement,
    path = "/api/achievements",
    responses(
        (status = CREATED, body = Achievement, description = "The created achievement"),
        (status = FORBIDDEN, body = ErrorBody),
        (status = NOT_FOUND, body = ErrorBody, description = "The referenced module does not exist"),
        (status = CONFLICT, body = ErrorBody),
    ),
    tag = "achievements",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn create_achievement(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    ApiJson(new): ApiJson<NewAchievement>,
) -> Result<(StatusCode, Json<Achievement>), ApiError> {
    require_permission(&user, Permission::new(Action::Create, Resource::Achievements))?;
    let achievement = catalog::create_achievement(&conn, new).await?;
    Ok((StatusCode::CREATED, Json(achievement)))
}

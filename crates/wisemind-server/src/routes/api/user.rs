use crate::permissions::require_role;
use crate::routes::error::{ApiError, ApiJson, ErrorBody};
use crate::user::ExtractUser;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::Utc;
use sea_orm::DatabaseConnection;
use uuid::Uuid;
use wisemind_core::login::record_login;
use wisemind_core::user::load_user;
use wisemind_db::user;
use wisemind_model::permission::Role;
use wisemind_model::user::{UpdateRole, UpdateRoleResult, User};
use wisemind_model_tools::convert::{IntoDbModel, IntoModel};

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(get_user_info))
        .route("/login", post(login))
        .route("/update-role", post(update_role))
        .with_state(())
}

async fn user_info(conn: &DatabaseConnection, user_id: Uuid) -> Result<User, ApiError> {
    load_user(conn, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_owned()))
}

#[utoipa::path(
    get,
    path = "/api/user",
    responses(
        (status = OK, body = User, description = "The current user with achievements, module progress and completed lessons"),
        (status = UNAUTHORIZED, body = ErrorBody),
    ),
    tag = "user",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn get_user_info(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(user_info(&conn, user.id).await?))
}

#[utoipa::path(
    post,
    path = "/api/user/login",
    responses(
        (status = OK, body = User, description = "Records today's login, updates the streak and returns the current user"),
        (status = UNAUTHORIZED, body = ErrorBody),
    ),
    tag = "user",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn login(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, ApiError> {
    let outcome = record_login(&conn, user.id, Utc::now().date_naive()).await?;
    if !outcome.new_achievements.is_empty() {
        tracing::info!(user = %user.id, achievements = ?outcome.new_achievements, "achievements earned on login");
    }
    Ok(Json(user_info(&conn, user.id).await?))
}

#[utoipa::path(
    post,
    request_body = UpdateRole,
    path = "/api/user/update-role",
    responses(
        (status = OK, body = UpdateRoleResult, description = "The user with the new role"),
        (status = BAD_REQUEST, body = ErrorBody, description = "Missing userId or an unknown role"),
        (status = FORBIDDEN, body = ErrorBody, description = "Caller is not an admin"),
        (status = NOT_FOUND, body = ErrorBody, description = "User not found"),
    ),
    tag = "user",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn update_role(
    ExtractUser(admin): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    ApiJson(body): ApiJson<UpdateRole>,
) -> Result<Json<UpdateRoleResult>, ApiError> {
    require_role(&admin, Role::Admin)?;
    if user::Query::find_user_by_id(&conn, body.user_id).await?.is_none() {
        return Err(ApiError::NotFound("User not found".to_owned()));
    }
    let updated = user::Mutation::update_user_role(&conn, body.user_id, body.new_role.into_db_model()).await?;
    tracing::info!(admin = %admin.id, user = %updated.id, role = %body.new_role, "role updated");
    Ok(Json(UpdateRoleResult {
        success: true,
        user: updated.into_model(),
    }))
}

use crate::permissions::require_permission;
use crate::routes::error::{ApiError, ApiJson, ErrorBody};
use crate::user::ExtractUser;
use axum::extract::Path;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use http::StatusCode;
use sea_orm::DatabaseConnection;
use wisemind_core::catalog;
use wisemind_model::lesson::{Lesson, NewLesson};
use wisemind_model::module::{Module, ModuleWithLessons, NewModule};
use wisemind_model::permission::{Action, Permission, Resource};

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list_modules).post(create_module))
        .nest(
            "/{module}",
            Router::new()
                .route("/", get(get_module))
                .route("/lessons", post(create_lesson)),
        )
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/api/modules",
    responses(
        (status = OK, body = Vec<Module>, description = "All modules by order. Unlock state is per user when signed in"),
    ),
    tag = "modules",
    security(
        (),
        ("token" = [])
    )
)]
pub(crate) async fn list_modules(
    user: Option<ExtractUser>,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = user.map(|ExtractUser(user)| user.id);
    let modules = catalog::list_modules(&conn, user_id).await?;
    Ok(Json(modules))
}

#[utoipa::path(
    get,
    path = "/api/modules/{module}",
    responses(
        (status = OK, body = ModuleWithLessons, description = "The module with its lessons by order"),
        (status = NOT_FOUND, body = ErrorBody, description = "Module not found"),
    ),
    params(
        ("module" = String, Path, description = "Module id"),
    ),
    tag = "modules",
    security(
        (),
        ("token" = [])
    )
)]
pub(crate) async fn get_module(
    user: Option<ExtractUser>,
    Extension(conn): Extension<DatabaseConnection>,
    Path(module_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = user.map(|ExtractUser(user)| user.id);
    let module = catalog::module_with_lessons(&conn, &module_id, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Module not found".to_owned()))?;
    Ok(Json(module))
}

#[utoipa::path(
    post,
    request_body = NewModule,
    path = "/api/modules",
    responses(
        (status = CREATED, body = Module, description = "The created module"),
        (status = BAD_REQUEST, body = ErrorBody),
        (status = FORBIDDEN, body = ErrorBody),
        (status = CONFLICT, body = ErrorBody, description = "A module with this id exists"),
    ),
    tag = "modules",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn create_module(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    ApiJson(new): ApiJson<NewModule>,
) -> Result<(StatusCode, Json<Module>), ApiError> {
    require_permission(&user, Permission::new(Action::Create, Resource::Modules))?;
    let module = catalog::create_module(&conn, new).await?;
    Ok((StatusCode::CREATED, Json(module)))
}

#[utoipa::path(
    post,
    request_body = NewLesson,
    path = "/api/modules/{module}/lessons",
    responses(
        (status = CREATED, body = Lesson, description = "The created lesson"),
        (status = BAD_REQUEST, body = ErrorBody),
        (status = FORBIDDEN, body = ErrorBody),
        (status = NOT_FOUND, body = ErrorBody, description = "Module not found"),
    ),
    params(
        ("module" = String, Path, description = "Module id"),
    ),
    tag = "modules",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn create_lesson(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Path(module_id): Path<String>,
    ApiJson(new): ApiJson<NewLesson>,
) -> Result<(StatusCode, Json<Lesson>), ApiError> {
    require_permission(&user, Permission::new(Action::Create, Resource::Lessons))?;
    let lesson = catalog::create_lesson(&conn, &module_id, new).await?;
    Ok((StatusCode::CREATED, Json(lesson)))
}

use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use sea_orm::DatabaseConnection;
use serde_json::json;
use tracing::instrument;
use wisemind_model::status::Status;

pub fn create_router<S>() -> Router<S> {
    Router::new().route("/", get(get_status)).with_state(())
}

#[utoipa::path(
    get,
    path = "/api/status",
    responses(
        (status = OK, description = "Server is ok", body = Status, example = json!({ "database": "ok" })),
        (status = SERVICE_UNAVAILABLE, description = "The database is not reachable", body = Status),
    ),
    tag = "util"
)]
#[instrument(skip_all)]
pub(crate) async fn get_status(Extension(conn): Extension<DatabaseConnection>) -> impl IntoResponse {
    let status = wisemind_core::status::status(&conn).await;
    (status.status_code(), Json(status))
}

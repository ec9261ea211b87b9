use crate::routes::error::{ApiError, ErrorBody};
use crate::user::ExtractUserId;
use axum::routing::post;
use axum::{Extension, Router};
use http::StatusCode;
use sea_orm::DatabaseConnection;
use wisemind_db::access_tokens;

pub fn create_router<S: Clone + Send + Sync + 'static>() -> Router<S> {
    Router::new().route("/logout", post(logout)).with_state(())
}

/// Signs the caller out everywhere by revoking all of their access tokens.
#[utoipa::path(
    post,
    path = "/logout",
    responses(
        (status = NO_CONTENT, description = "Access tokens revoked"),
        (status = UNAUTHORIZED, body = ErrorBody),
        (status = INTERNAL_SERVER_ERROR, body = ErrorBody)
    ),
    tag = "session",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn logout(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<StatusCode, ApiError> {
    let revoked = access_tokens::Mutation::delete_access_tokens(&conn, user_id).await?;
    tracing::debug!(%user_id, revoked, "signed out");
    Ok(StatusCode::NO_CONTENT)
}

use crate::routes::error::ApiError;
use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::{Extension, RequestPartsExt};
use axum_auth::AuthBearer;
use axum_extra::extract::Cached;
use http::request::Parts;
use sea_orm::DatabaseConnection;
use std::error::Error;
use url::form_urlencoded;
use uuid::Uuid;
use wisemind_db::user;
use wisemind_model::user::UserRole;
use wisemind_model_tools::convert::IntoModel;

pub(crate) fn extract_auth_token_from_params(parts: &Parts) -> Option<String> {
    let query = parts.uri.query()?;
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "access_token")
        .map(|(_, value)| value.into_owned())
}

const NO_TOKEN: &str = "No authentication token provided";

#[derive(Clone)]
struct Session {
    user: UserRole,
}

/// The signed in user with the role its permissions derive from.
#[derive(Clone)]
pub(crate) struct ExtractUser(pub UserRole);

#[derive(Clone)]
pub(crate) struct ExtractUserId(pub Uuid);

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = if let Ok(AuthBearer(token)) = parts.extract::<AuthBearer>().await {
            token
        } else if let Some(token) = extract_auth_token_from_params(parts) {
            token
        } else {
            return Err(ApiError::Unauthorized(NO_TOKEN));
        };

        let Extension::<DatabaseConnection>(conn) =
            parts
                .extract::<Extension<DatabaseConnection>>()
                .await
                .map_err(|error| {
                    tracing::error!(
                        error = &error as &dyn Error,
                        "database connection not found in app data"
                    );
                    ApiError::Internal
                })?;

        Self::from_db(&conn, &token).await.map(|user| Self { user })
    }
}

impl Session {
    async fn from_db(conn: &DatabaseConnection, token: &str) -> Result<UserRole, ApiError> {
        let user = match user::Query::find_by_token(conn, token).await {
            Ok(Some(user)) => user,
            Ok(None) => return Err(ApiError::Unauthorized("Authentication failed.")),
            Err(error) => {
                tracing::error!(error = &error as &dyn Error, "error looking up access token");
                return Err(ApiError::Internal);
            }
        };

        sentry::configure_scope(|scope| {
            scope.set_user(Some(sentry::User {
                id: Some(user.id.as_hyphenated().to_string()),
                ..Default::default()
            }));
        });

        Ok(user.into_model())
    }
}

impl<S> OptionalFromRequestParts<S> for ExtractUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Option<Self>, Self::Rejection> {
        // only a missing token makes the request anonymous
        match Cached::<Session>::from_request_parts(parts, state).await {
            Ok(session) => Ok(Some(Self(session.0.user))),
            Err(ApiError::Unauthorized(NO_TOKEN)) => Ok(None),
            Err(error) => Err(error),
        }
    }
}

impl<S> FromRequestParts<S> for ExtractUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session: Session = Cached::<Session>::from_request_parts(parts, state).await?.0;
        Ok(Self(session.user))
    }
}

impl<S> FromRequestParts<S> for ExtractUserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session: Session = Cached::<Session>::from_request_parts(parts, state).await?.0;
        Ok(Self(session.user.id))
    }
}

use axum::Json;
use axum::extract::FromRequest;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use sea_orm::DbErr;
use std::borrow::Cow;
use std::error::Error;
use thiserror::Error;
use wisemind_core::catalog::CatalogError;
use wisemind_core::login::LoginError;
use wisemind_core::progress::ProgressError;
pub(crate) use wisemind_model::error::ErrorBody;

/// Every failure a handler answers with.
#[derive(Error, Debug)]
pub(crate) enum ApiError {
    #[error("{0}")]
    Validation(Cow<'static, str>),

    #[error("{0}")]
    Unauthorized(&'static str),

    #[error("{0}")]
    Forbidden(&'static str),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub(crate) fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let body = ErrorBody {
            status_code: status_code.as_u16(),
            status_message: self.to_string(),
        };
        (status_code, Json(body)).into_response()
    }
}

impl From<DbErr> for ApiError {
    fn from(error: DbErr) -> Self {
        tracing::error!(error = &error as &dyn Error, "database error");
        Self::Internal
    }
}

impl From<ProgressError> for ApiError {
    fn from(error: ProgressError) -> Self {
        match error {
            ProgressError::UserNotFound(_) => Self::NotFound("User not found".to_owned()),
            ProgressError::LessonNotFound(_) => Self::NotFound("Lesson not found".to_owned()),
            ProgressError::Database(error) => error.into(),
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(error: CatalogError) -> Self {
        match error {
            CatalogError::ModuleNotFound(_) => Self::NotFound("Module not found".to_owned()),
            CatalogError::Duplicate(what) => Self::Conflict(format!("{what} already exists")),
            CatalogError::Invalid(message) => Self::Validation(message.into()),
            CatalogError::Database(error) => error.into(),
        }
    }
}

impl From<LoginError> for ApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::UserNotFound(_) => Self::NotFound("User not found".to_owned()),
            LoginError::Database(error) => error.into(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "rejected request body");
        Self::Validation(Cow::Owned(rejection.body_text()))
    }
}

/// `Json` whose rejections answer with an [`ErrorBody`] and status 400.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub(crate) struct ApiJson<T>(pub T);

use http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("Received invalid json data")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Internal(#[from] InternalError),

    #[error("Not signed in")]
    NoSession,
}

#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    InvalidUrl(#[from] url::ParseError),
}

#[derive(Error, Debug)]
pub enum HttpError {
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    /// The server answered with an error body, `message` is its `statusMessage`.
    #[error("{message}")]
    Status { status: StatusCode, message: String },
}

impl Error {
    /// Status code of a rejected request.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http(HttpError::Status { status, .. }) => Some(*status),
            _ => None,
        }
    }
}

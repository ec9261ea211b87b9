use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use utoipa::openapi::{RefOr, Schema};
use utoipa::{PartialSchema, ToSchema, schema};

#[derive(Debug, Serialize, ToSchema)]
pub struct Status {
    pub database: ComponentStatus,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ToSchema, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentState {
    Ok,
    Error,
}

impl From<StatusCode> for ComponentState {
    fn from(value: StatusCode) -> Self {
        if value.is_success() { Self::Ok } else { Self::Error }
    }
}

/// Health of a single component, serialized as its message or its state.
#[derive(Debug, Clone)]
pub struct ComponentStatus {
    state: ComponentState,
    message: Option<Value>,
}

impl PartialSchema for ComponentStatus {
    fn schema() -> RefOr<Schema> {
        schema!(String).into()
    }
}

impl ToSchema for ComponentStatus {}

impl Serialize for ComponentStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match &self.message {
            Some(message) => message.serialize(serializer),
            None => self.state.serialize(serializer),
        }
    }
}

impl<T, E> From<Result<T, E>> for ComponentStatus {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(_) => Self::ok(),
            Err(_) => Self::error(),
        }
    }
}

impl ComponentStatus {
    pub fn new<S: Into<ComponentState>>(state: S, message: Option<Value>) -> Self {
        Self {
            state: state.into(),
            message,
        }
    }

    #[must_use]
    pub fn ok() -> Self {
        Self::new(ComponentState::Ok, None)
    }

    #[must_use]
    pub fn error() -> Self {
        Self::new(ComponentState::Error, None)
    }

    #[must_use]
    pub fn from_error_text(message: &str) -> Self {
        Self::new(ComponentState::Error, Some(json!(message)))
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.state == ComponentState::Ok
    }

    #[must_use]
    pub fn state(&self) -> ComponentState {
        self.state
    }
}

impl Status {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        if self.database.is_ok() {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_status() {
        let status = Status {
            database: ComponentStatus::ok(),
        };
        assert_eq!(serde_json::to_string(&status).unwrap(), r#"{"database":"ok"}"#);
        assert_eq!(status.status_code(), StatusCode::OK);

        let status = Status {
            database: ComponentStatus::from_error_text("timeout"),
        };
        assert_eq!(serde_json::to_string(&status).unwrap(), r#"{"database":"timeout"}"#);
        assert_eq!(status.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_from_result() {
        let status: ComponentStatus = Err::<(), _>("down").into();
        assert_eq!(status.state(), ComponentState::Error);
        assert!(ComponentStatus::from(Ok::<_, ()>(1)).is_ok());
    }
}

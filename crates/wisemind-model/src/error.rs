use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    #[schema(example = 404)]
    pub status_code: u16,
    #[schema(example = "Lesson not found")]
    pub status_message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let body: ErrorBody = serde_json::from_str(r#"{"statusCode":403,"statusMessage":"Insufficient role"}"#).unwrap();
        assert_eq!(body.status_code, 403);
        assert_eq!(body.status_message, "Insufficient role");
    }
}

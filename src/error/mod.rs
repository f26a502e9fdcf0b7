use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::service::NoteServiceError;

/// Error code carried by every non-2xx response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NotFound,
    BadRequest,
    Undefined,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorPayload {
    /// Human readable description
    pub message: String,
    pub code: ErrorCode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Validation,
    NotFound,
    Undefined,
}

impl FailureKind {
    pub const fn status_and_code(self) -> (StatusCode, ErrorCode) {
        match self {
            Self::Validation => (StatusCode::BAD_REQUEST, ErrorCode::BadRequest),
            Self::NotFound => (StatusCode::NOT_FOUND, ErrorCode::NotFound),
            Self::Undefined => (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::Undefined),
        }
    }
}

/// A failure on its way to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Validation,
            message: message.into(),
        }
    }

    pub fn undefined(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Undefined,
            message: message.into(),
        }
    }
}

impl From<NoteServiceError> for ApiError {
    fn from(err: NoteServiceError) -> Self {
        match err {
            NoteServiceError::Validation(_) => Self {
                kind: FailureKind::Validation,
                message: err.to_string(),
            },
            NoteServiceError::NotFound(_) => Self {
                kind: FailureKind::NotFound,
                message: err.to_string(),
            },
            NoteServiceError::Store(e) => {
                tracing::error!("note storage failure: {}", e);
                Self::undefined("Failed to access note storage")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.kind.status_and_code();
        if self.kind != FailureKind::Undefined {
            tracing::debug!("request failed with {:?}: {}", code, self.message);
        }

        (
            status,
            Json(ErrorPayload {
                message: self.message,
                code,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::StoreError;

    #[test]
    fn mapping_table() {
        assert_eq!(
            FailureKind::Validation.status_and_code(),
            (StatusCode::BAD_REQUEST, ErrorCode::BadRequest)
        );
        assert_eq!(
            FailureKind::NotFound.status_and_code(),
            (StatusCode::NOT_FOUND, ErrorCode::NotFound)
        );
        assert_eq!(
            FailureKind::Undefined.status_and_code(),
            (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::Undefined)
        );
    }

    #[test]
    fn error_codes_use_wire_literals() {
        assert_eq!(
            serde_json::to_string(&ErrorCode::NotFound).unwrap(),
            "\"NOT_FOUND\""
        );
        assert_eq!(
            serde_json::to_string(&ErrorCode::BadRequest).unwrap(),
            "\"BAD_REQUEST\""
        );
        assert_eq!(
            serde_json::to_string(&ErrorCode::Undefined).unwrap(),
            "\"UNDEFINED\""
        );
    }

    #[test]
    fn service_errors_map_to_failure_kinds() {
        let not_found = ApiError::from(NoteServiceError::NotFound(42));
        assert_eq!(not_found.kind, FailureKind::NotFound);
        assert_eq!(not_found.message, "Note with id: 42 not found");

        let invalid = ApiError::from(NoteServiceError::Validation("bad".to_string()));
        assert_eq!(invalid, ApiError::validation("bad"));

        let store = ApiError::from(NoteServiceError::Store(StoreError::Unavailable(
            "gone".to_string(),
        )));
        assert_eq!(store.kind, FailureKind::Undefined);
        assert!(!store.message.is_empty());
    }
}

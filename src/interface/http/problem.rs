use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{error, warn};
use uuid::Uuid;

use crate::core::StoreError;

pub type ApiResult<T> = Result<T, ApiProblem>;

#[derive(Debug)]
pub struct ApiProblem {
    status: StatusCode,
    title: &'static str,
    detail: String,
    kind: &'static str,
    correlation_id: String,
}

impl ApiProblem {
    pub fn from_store(error: StoreError) -> Self {
        let detail = error.to_string();
        match error {
            StoreError::NotFound(_) => Self::new(
                StatusCode::NOT_FOUND,
                "Not found",
                "https://userdesk.dev/problems/not-found",
                detail,
            ),
            StoreError::InvalidArgument(_) | StoreError::DivisionByZero => Self::new(
                StatusCode::BAD_REQUEST,
                "Invalid argument",
                "https://userdesk.dev/problems/invalid-argument",
                detail,
            ),
            StoreError::MalformedPayload(_) => Self::new(
                StatusCode::BAD_REQUEST,
                "Malformed payload",
                "https://userdesk.dev/problems/malformed-payload",
                detail,
            ),
            StoreError::DuplicateId(_) => Self::new(
                StatusCode::CONFLICT,
                "Conflict",
                "https://userdesk.dev/problems/conflict",
                detail,
            ),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error",
            "https://userdesk.dev/problems/internal",
            detail,
        )
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    fn new(
        status: StatusCode,
        title: &'static str,
        kind: &'static str,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            status,
            title,
            detail: detail.into(),
            kind,
            correlation_id: Uuid::new_v4().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ProblemDetails {
    #[serde(rename = "type")]
    kind: String,
    title: String,
    status: u16,
    detail: String,
    correlation_id: String,
}

impl IntoResponse for ApiProblem {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(
                status = self.status.as_u16(),
                correlation_id = %self.correlation_id,
                detail = %self.detail,
                "request failed"
            );
        } else {
            warn!(
                status = self.status.as_u16(),
                correlation_id = %self.correlation_id,
                detail = %self.detail,
                "request rejected"
            );
        }

        let payload = ProblemDetails {
            kind: self.kind.to_string(),
            title: self.title.to_string(),
            status: self.status.as_u16(),
            detail: self.detail,
            correlation_id: self.correlation_id,
        };

        let mut response = (self.status, Json(payload)).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/problem+json"),
        );

        response
    }
}

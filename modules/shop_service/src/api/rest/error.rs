//! `ShopError` to HTTP problem responses

use crate::contract::ShopError;
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// RFC-9457 problem body, sent as `application/problem+json`
#[derive(Debug, Serialize)]
pub struct Problem {
    #[serde(rename = "type")]
    pub type_uri: String,
    pub title: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Problem {
    /// `kind` becomes the last segment of the problem type URI
    pub fn new(status: StatusCode, kind: &str, title: impl Into<String>) -> Self {
        Self {
            type_uri: format!("{PROBLEM_TYPE_BASE}/{kind}"),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

const PROBLEM_TYPE_BASE: &str = "https://meredith.app/problems/shop";

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, Json(self)).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/problem+json"),
        );
        response
    }
}

// Malformed bodies and path ids keep axum's status but use the problem format.

impl From<JsonRejection> for Problem {
    fn from(rejection: JsonRejection) -> Self {
        Problem::new(rejection.status(), "validation", "Invalid Request Body")
            .with_detail(rejection.body_text())
    }
}

impl From<PathRejection> for Problem {
    fn from(rejection: PathRejection) -> Self {
        Problem::new(rejection.status(), "validation", "Invalid Path Parameter")
            .with_detail(rejection.body_text())
    }
}

/// Storage errors are logged here and reach the client only as a generic 500
pub fn map_domain_error(error: ShopError) -> Problem {
    match error {
        ShopError::NotFound { resource, id } => {
            Problem::new(StatusCode::NOT_FOUND, "not-found", format!("{resource} Not Found"))
                .with_detail(format!("{resource} {id} not found"))
        }

        ShopError::InvalidAction { message } => {
            Problem::new(StatusCode::BAD_REQUEST, "invalid-action", "Invalid Action").with_detail(message)
        }

        ShopError::Validation { message } => {
            Problem::new(StatusCode::BAD_REQUEST, "validation", "Validation Error").with_detail(message)
        }

        ShopError::Storage(source) => {
            tracing::error!(error = ?source, "storage failure");
            Problem::new(StatusCode::INTERNAL_SERVER_ERROR, "internal", "Internal Server Error")
                .with_detail("An unexpected error occurred")
        }
    }
}

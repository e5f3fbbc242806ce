//! Response envelope shared by every endpoint.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use hostelops_shared::AppError;

/// Envelope for successful responses: `{success: true, data, message}`.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    /// Always true here.
    pub success: bool,
    /// The payload.
    pub data: T,
    /// Human-readable summary.
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wraps a payload in the success envelope.
    pub fn ok(data: T, message: impl Into<String>) -> Response {
        (
            StatusCode::OK,
            Json(Self {
                success: true,
                data,
                message: message.into(),
            }),
        )
            .into_response()
    }
}

/// Envelope for failed responses: `{success: false, error}`.
#[derive(Debug, Clone, Serialize)]
pub struct ApiFailure {
    /// Always false here.
    pub success: bool,
    /// Error description.
    pub error: String,
}

impl ApiFailure {
    fn with_status(status: StatusCode, error: impl Into<String>) -> Response {
        (
            status,
            Json(Self {
                success: false,
                error: error.into(),
            }),
        )
            .into_response()
    }

    /// 400 failure envelope.
    pub fn bad_request(error: impl Into<String>) -> Response {
        Self::with_status(StatusCode::BAD_REQUEST, error)
    }

    /// 404 failure envelope.
    pub fn not_found(error: impl Into<String>) -> Response {
        Self::with_status(StatusCode::NOT_FOUND, error)
    }

    /// 500 failure envelope.
    pub fn internal(error: impl Into<String>) -> Response {
        Self::with_status(StatusCode::INTERNAL_SERVER_ERROR, error)
    }

    /// Failure envelope for an application error, using its status mapping.
    pub fn from_app_error(error: &AppError) -> Response {
        let status = StatusCode::from_u16(error.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self::with_status(status, error.to_string())
    }
}

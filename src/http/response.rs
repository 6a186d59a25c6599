//! Error responses
//!
//! Every per-request error becomes a plain-text body with its status code.

use axum::http::header::{CONTENT_TYPE, X_CONTENT_TYPE_OPTIONS};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::SodaError;

/// Body sent when the id path segment does not parse
pub const INVALID_ID_MESSAGE: &str = "\"http://server/{id:[0-9]+}\" is the only valid subpath.";

impl SodaError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            SodaError::Decode(_) => StatusCode::BAD_REQUEST,
            SodaError::InvalidRecordId => StatusCode::BAD_REQUEST,

            // 404 Not Found
            SodaError::RecordNotFound(_) => StatusCode::NOT_FOUND,
            SodaError::RouteNotFound => StatusCode::NOT_FOUND,

            // Startup errors never reach a handler
            SodaError::Io(_) | SodaError::Config(_) | SodaError::Interface { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Text sent to the client for this error
    pub fn client_message(&self) -> String {
        match self {
            SodaError::InvalidRecordId => INVALID_ID_MESSAGE.to_string(),
            SodaError::RecordNotFound(id) => {
                format!("404 page not found; record ID {} doesn't exist.", id)
            }
            SodaError::RouteNotFound => "404 page not found".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for SodaError {
    fn into_response(self) -> Response {
        let headers = [
            (CONTENT_TYPE, "text/plain; charset=utf-8"),
            (X_CONTENT_TYPE_OPTIONS, "nosniff"),
        ];
        let body = format!("{}\n", self.client_message());
        (self.status_code(), headers, body).into_response()
    }
}

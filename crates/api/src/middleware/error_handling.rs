//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the timetable
//! API. It maps domain-specific errors to appropriate HTTP status codes and
//! JSON error responses, ensuring a consistent error handling experience
//! across the entire API.

use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use timetable_core::errors::TimetableError;

/// Application error wrapper that provides HTTP status code mapping.
///
/// `AppError` wraps domain-specific `TimetableError` instances and
/// implements `IntoResponse` to convert them into HTTP responses with
/// appropriate status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub TimetableError);

/// Converts application errors to HTTP responses.
///
/// Each error type maps to one status code; conflict rejections answer 409
/// so callers can distinguish "pick another time" from bad input.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            TimetableError::NotFound(_) => StatusCode::NOT_FOUND,
            TimetableError::Validation(_) => StatusCode::BAD_REQUEST,
            TimetableError::Conflict(_) => StatusCode::CONFLICT,
            TimetableError::Authentication(_) => StatusCode::UNAUTHORIZED,
            TimetableError::Authorization(_) => StatusCode::FORBIDDEN,
            TimetableError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            TimetableError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Allows using the `?` operator with functions returning
/// `Result<T, TimetableError>` in handlers returning `Result<T, AppError>`.
impl From<TimetableError> for AppError {
    fn from(err: TimetableError) -> Self {
        AppError(err)
    }
}

/// Wraps repository-level eyre errors as database errors.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(TimetableError::Database(err))
    }
}

/// JSON body extractor whose rejection is mapped through [`AppError`], so
/// malformed or missing bodies answer the same `{"error": ...}` payload as
/// every other validation failure instead of axum's plain-text default.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError(TimetableError::Validation(rejection.body_text()))
    }
}

//! # Error Handling Middleware
//!
//! Maps `BookingError` values onto HTTP status codes and JSON error bodies so
//! every handler reports failures the same way.
//!
//! | error | status |
//! |---|---|
//! | `Format`, `Reference`, `Validation` | 400 Bad Request |
//! | `NotFound` | 404 Not Found |
//! | `Conflict` | 409 Conflict |
//! | `OutOfAvailability` | 422 Unprocessable Entity |
//! | `Storage` | 500 Internal Server Error |
//!
//! Storage failures are logged in full and reported to the client with a
//! generic message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use gigbook_core::{errors::BookingError, models::TIME_FORMAT};
use serde_json::json;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use gigbook_api::middleware::error_handling::AppError;
/// use gigbook_core::errors::BookingError;
///
/// async fn handler(id: i32) -> Result<Json<i32>, AppError> {
///     if id < 0 {
///         return Err(AppError(BookingError::NotFound(format!("Venue with ID {}", id))));
///     }
///     Ok(Json(id))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub BookingError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self.0 {
            BookingError::Format { .. } | BookingError::Reference { .. } => {
                (StatusCode::BAD_REQUEST, json!({ "error": self.0.to_string() }))
            }
            BookingError::Validation { field, .. } => (
                StatusCode::BAD_REQUEST,
                json!({ "error": self.0.to_string(), "field": field }),
            ),
            BookingError::NotFound(_) => {
                (StatusCode::NOT_FOUND, json!({ "error": self.0.to_string() }))
            }
            BookingError::Conflict { venue_id, start_time } => (
                StatusCode::CONFLICT,
                json!({
                    "error": self.0.to_string(),
                    "venue_id": venue_id,
                    "start_time": start_time.format(TIME_FORMAT).to_string(),
                }),
            ),
            BookingError::OutOfAvailability { window } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "error": self.0.to_string(),
                    "available_start": window.start.format(TIME_FORMAT).to_string(),
                    "available_end": window.end.format(TIME_FORMAT).to_string(),
                }),
            ),
            BookingError::Storage(report) => {
                error!("Storage error: {:?}", report);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "An unexpected error occurred. No changes were made." }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Allows `?` on `BookingResult` values inside handlers.
impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}

/// Store calls fail with `eyre::Report`. A report wrapping a `BookingError`
/// (a name lost to a concurrent write) keeps its meaning; anything else is
/// storage trouble.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        match err.downcast::<BookingError>() {
            Ok(booking_err) => AppError(booking_err),
            Err(report) => AppError(BookingError::Storage(report)),
        }
    }
}

/// Maps a BookingError to an HTTP response
pub fn map_error(err: BookingError) -> Response {
    AppError(err).into_response()
}

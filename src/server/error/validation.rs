use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Field constraint violations for student input.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    /// Age is outside the inclusive range 0..=120.
    #[error("Age out of range: {0} (expected 0 to 120)")]
    AgeOutOfRange(i32),

    /// GPA is outside the inclusive range 0.0..=4.0 or is not a finite number.
    #[error("GPA out of range: {0} (expected 0.0 to 4.0)")]
    GpaOutOfRange(f64),

    /// A row of a bulk request failed validation.
    ///
    /// The whole batch is rejected, `row` is the zero-based index of the first
    /// offending entry.
    #[error("Invalid student at index {row}: {source}")]
    BulkRow {
        row: usize,
        #[source]
        source: Box<ValidationError>,
    },
}

/// Converts validation errors into 400 Bad Request responses.
///
/// The message is safe to show to clients since it only echoes the submitted values.
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

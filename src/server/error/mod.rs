//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;
pub mod validation;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, validation::ValidationError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. `ValidationError` handles its own response mapping, while the
/// remaining variants map onto standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Student input violated a field constraint.
    ///
    /// Delegates to `ValidationError::into_response()`, always 400 Bad Request.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error. The driver message is passed through to
    /// the client body.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Request body was not valid JSON for the expected shape.
    ///
    /// Results in 400 Bad Request regardless of the rejection axum reports
    /// (syntax, data or content type).
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    /// Path parameter could not be parsed, e.g. a non-numeric student id.
    ///
    /// Results in 400 Bad Request.
    #[error(transparent)]
    PathRejection(#[from] PathRejection),

    /// Query string could not be decoded into key/value pairs.
    ///
    /// Results in 400 Bad Request.
    #[error(transparent)]
    QueryRejection(#[from] QueryRejection),

    /// I/O failure while binding or serving the listener.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorDto { error })).into_response()
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `JsonRejection`, `PathRejection`, `QueryRejection` and `ValidationErr`
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For `DbErr` (message passed through) and all other variants
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::ValidationErr(err) => {
                tracing::debug!("Rejected student input: {}", err);
                err.into_response()
            }
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),
            Self::JsonRejection(rejection) => {
                tracing::debug!("Rejected request body: {}", rejection);
                error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Invalid JSON: {}", rejection.body_text()),
                )
            }
            Self::PathRejection(rejection) => {
                tracing::debug!("Rejected path parameter: {}", rejection);
                error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Invalid student ID: {}", rejection.body_text()),
                )
            }
            Self::QueryRejection(rejection) => {
                tracing::debug!("Rejected query string: {}", rejection);
                error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Invalid query string: {}", rejection.body_text()),
                )
            }
            // The frontend shows the driver message as-is; this exposes internal detail.
            Self::DbErr(err) => {
                tracing::error!("Database error: {}", err);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Database error: {}", err),
                )
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client. Used as a fallback for errors that don't have specific HTTP response
/// mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    }
}

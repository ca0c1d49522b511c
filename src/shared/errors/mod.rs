//! Error Types
//!
//! Layered error types with HTTP status code mapping. Every error reaches the
//! client as a flat `{"error": "<message>"}` body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::domain::models::ProductId;

/// Message returned when a rating references a product that does not exist
pub const UNKNOWN_PRODUCT_MESSAGE: &str = "No product with the specified id exists!";

/// Message returned when a request body cannot be decoded
pub const INVALID_PAYLOAD_MESSAGE: &str = "Invalid request payload";

/// Repository-level errors for data access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A referenced row does not exist (carries the constraint name)
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_foreign_key_violation() {
                let constraint = db_err.constraint().unwrap_or("unknown").to_string();
                return Self::ForeignKeyViolation(constraint);
            }
        }
        Self::Database(err)
    }
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Invalid request payload: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("{resource} not found")]
    NotFound { resource: &'static str, id: String },

    #[error("{}", UNKNOWN_PRODUCT_MESSAGE)]
    UnknownProduct(ProductId),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::UnknownProduct(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::UseCase(uc_error) => uc_error.status_code(),
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Error response body structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        match &self {
            ApiError::UseCase(UseCaseError::NotFound { resource, id }) => {
                tracing::debug!(resource = *resource, id = %id, "Resource not found");
            }
            ApiError::UseCase(UseCaseError::UnknownProduct(product_id)) => {
                tracing::debug!(product_id = %product_id, "Rejected reference to unknown product");
            }
            _ if status.is_server_error() => {
                tracing::error!(error = %message, "Request failed");
            }
            _ => {
                tracing::debug!(status = status.as_u16(), error = %message, "Request rejected");
            }
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message.as_ref().map_or("invalid", |m| m.as_ref())
                    )
                })
            })
            .collect();
        messages.sort();
        ApiError::UseCase(UseCaseError::Validation(messages))
    }
}

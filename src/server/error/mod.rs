//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by services and controllers. It wraps the
//! domain-specific errors and implements `IntoResponse`, mapping each variant to a status
//! code and the uniform `{status, message}` body. Request-binding failures are the one
//! exception and render as `{field: message}`.

pub mod config;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        config::ConfigError,
        validation::{field_messages, indexed_field_messages, ValidationError},
    },
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket or listener failure while serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// A business rule rejected the input. Results in 400 Bad Request.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Declarative request-body validation failed.
    ///
    /// Results in 400 Bad Request with a `{field: message}` body.
    #[error(transparent)]
    FieldValidation(#[from] validator::ValidationErrors),

    /// Declarative validation failed for one element of a list body.
    ///
    /// Results in 400 Bad Request with `{"[index].field": message}` keys.
    #[error("Invalid element at index {index}: {errors}")]
    IndexedFieldValidation {
        index: usize,
        errors: validator::ValidationErrors,
    },

    /// Malformed request, such as an unparseable id or body. Results in 400 Bad Request.
    #[error("{0}")]
    BadRequest(String),

    /// Referenced resource does not exist. Results in 404 Not Found.
    #[error("{0}")]
    NotFound(String),

    /// Uniqueness or association violation. Results in 409 Conflict.
    #[error("{0}")]
    Conflict(String),

    /// Unexpected failure with a custom message. Results in 500 Internal Server Error.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationErr(_)
            | Self::FieldValidation(_)
            | Self::IndexedFieldValidation { .. }
            | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::ConfigErr(_) | Self::DbErr(_) | Self::IoErr(_) | Self::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - `ValidationErr`, `BadRequest`, and the field map variants
/// - 404 Not Found - `NotFound`
/// - 409 Conflict - `Conflict`
/// - 500 Internal Server Error - everything else, logged at error level
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            Self::FieldValidation(errors) => {
                (status, Json(field_messages(&errors))).into_response()
            }
            Self::IndexedFieldValidation { index, errors } => {
                (status, Json(indexed_field_messages(index, &errors))).into_response()
            }
            Self::NotFound(_) | Self::Conflict(_) => {
                tracing::debug!("{}", self);
                error_response(status, self.to_string())
            }
            Self::ValidationErr(_) | Self::BadRequest(_) => error_response(status, self.to_string()),
            err => InternalServerError(err).into_response(),
        }
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    (
        status,
        Json(ErrorDto {
            status: status.as_u16(),
            message,
        }),
    )
        .into_response()
}

/// Wrapper converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns it to the client prefixed with "Internal server error".
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Internal server error: {}", self.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_variants_to_status_codes() {
        assert_eq!(
            AppError::ValidationErr(ValidationError::VinEmpty).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("x".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Conflict("x".to_string()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::DbErr(sea_orm::DbErr::Custom("boom".to_string())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn validation_message_is_the_rule_text() {
        let err = AppError::from(ValidationError::VinChangeNotAllowed(
            "JH4KA7561PC008269".to_string(),
        ));

        assert_eq!(err.to_string(), "Changing is not allowed VIN: JH4KA7561PC008269");
    }
}

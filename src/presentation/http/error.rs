// src/presentation/http/error.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
    errors: Option<BTreeMap<String, Vec<String>>>,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(errors) => {
                let fields = errors
                    .fields()
                    .iter()
                    .map(|(field, messages)| ((*field).to_string(), messages.clone()))
                    .collect();
                Self {
                    status: StatusCode::BAD_REQUEST,
                    message: errors.to_string(),
                    errors: Some(fields),
                }
            }
            ApplicationError::NotFound { .. } => Self::new(StatusCode::NOT_FOUND, err.to_string()),
            ApplicationError::Domain(domain_err) => Self::from_domain(domain_err),
        }
    }

    fn from_domain(err: DomainError) -> Self {
        let status = match &err {
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,
            DomainError::Conflict(_) | DomainError::InvariantViolation(_) => StatusCode::CONFLICT,
            DomainError::Persistence(msg) => {
                // storage detail stays in the log
                tracing::error!(error = %msg, "persistence failure");
                return Self::internal();
            }
        };
        Self::new(status, err.to_string())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message.into())
    }

    fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "an internal error occurred".into(),
        )
    }

    pub fn request_timeout() -> Self {
        Self::new(StatusCode::REQUEST_TIMEOUT, "request timed out".into())
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            message,
            errors: None,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
            errors: self.errors,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    /// Per-field validation messages, present on 400 responses from request checks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::ValidationErrors;
    use crate::domain::identity::EntityKind;
    use uuid::Uuid;

    fn status_of(err: ApplicationError) -> StatusCode {
        HttpError::from_error(err).status()
    }

    #[test]
    fn maps_error_kinds_to_status_codes() {
        assert_eq!(
            status_of(ApplicationError::validation("title", "Title is required")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ApplicationError::not_found(EntityKind::Article, Uuid::nil())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(DomainError::not_found("tag missing").into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(DomainError::invariant("already published").into()),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(DomainError::conflict("duplicate tag").into()),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(DomainError::validation("bad title").into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(DomainError::persistence("db down").into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn persistence_detail_is_not_sent_to_clients() {
        let http = HttpError::from_error(
            DomainError::persistence("value too long for type character varying(100)").into(),
        );
        assert_eq!(http.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(http.message, "an internal error occurred");
        assert!(http.errors.is_none());
    }

    #[test]
    fn validation_keeps_field_messages() {
        let mut errors = ValidationErrors::new();
        errors.add("title", "Title is required");
        errors.add("content", "Content is required");

        let http = HttpError::from_error(ApplicationError::Validation(errors));
        let fields = http.errors.unwrap();
        assert_eq!(fields["title"], ["Title is required"]);
        assert_eq!(fields["content"], ["Content is required"]);
    }
}

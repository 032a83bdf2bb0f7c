//! Error Types
//!
//! Domain-specific error types with proper HTTP status code mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::domain::models::EntityKind;
use crate::shared::envelope::Envelope;

/// PostgreSQL SQLSTATE for unique constraint violations
const UNIQUE_VIOLATION: &str = "23505";

/// Domain-level errors representing business rule violations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{0} name must be a string")]
    NameNotString(EntityKind),

    #[error("{0} name is required")]
    NameRequired(EntityKind),

    #[error("{0} name already in use")]
    NameInUse(EntityKind),
}

/// Repository-level errors for data access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{0}")]
    Database(sqlx::Error),

    #[error("{0} name already in use")]
    NameConflict(EntityKind),
}

impl RepositoryError {
    /// Classify a driver error raised while writing to `kind`'s table
    ///
    /// Unique violations become `NameConflict`; everything else stays a
    /// database error.
    #[must_use]
    pub fn from_write(kind: EntityKind, err: sqlx::Error) -> Self {
        let unique_violation = matches!(
            &err,
            sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(UNIQUE_VIOLATION)
        );

        if unique_violation {
            Self::NameConflict(kind)
        } else {
            Self::Database(err)
        }
    }
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err)
    }
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("{0} not found")]
    NotFound(EntityKind),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for UseCaseError {
    fn from(err: RepositoryError) -> Self {
        match err {
            // The storage-level unique index backs up the validator's read
            RepositoryError::NameConflict(kind) => Self::Domain(DomainError::NameInUse(kind)),
            other => Self::Repository(other),
        }
    }
}

impl UseCaseError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Domain(_) => StatusCode::BAD_REQUEST,
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

    #[error("Invalid id: {0}")]
    InvalidId(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::UseCase(UseCaseError::Domain(err))
    }
}

impl ApiError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::UseCase(uc_error) => uc_error.status_code(),
            ApiError::BadRequest(_) | ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        // Unexpected failures are passed through verbatim; keep the detail in the logs too
        if status.is_server_error() {
            tracing::error!(error = %self, "Unexpected error while handling request");
        }

        Envelope::error(status, self.to_string()).into_response()
    }
}

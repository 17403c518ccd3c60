//! Error types for the registry

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pfs_api::{Code, DeleteTargetError, ErrorBody, RepoNameError};

/// Result type for registry operations
pub type PfsResult<T> = Result<T, PfsError>;

/// Error types for registry operations
#[derive(Debug, thiserror::Error)]
pub enum PfsError {
    /// Repository name is not usable
    #[error(transparent)]
    InvalidName(#[from] RepoNameError),

    /// Delete arguments do not select a target
    #[error(transparent)]
    InvalidDelete(#[from] DeleteTargetError),

    /// Request body or query could not be decoded
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Repository already exists
    #[error("repo \"{0}\" already exists")]
    AlreadyExists(String),

    /// Repository not found
    #[error("repo \"{0}\" not found")]
    NotFound(String),

    /// Repository to delete not found
    #[error("cannot delete \"{0}\" as it does not exist")]
    NotDeletable(String),

    /// No endpoint serves the requested path
    #[error("no endpoint for {0}")]
    NoRoute(String),
}

impl PfsError {
    /// Get the error code clients branch on
    pub fn code(&self) -> Code {
        match self {
            PfsError::InvalidName(_)
            | PfsError::InvalidDelete(_)
            | PfsError::InvalidRequest(_) => Code::InvalidArgument,
            PfsError::AlreadyExists(_) => Code::AlreadyExists,
            PfsError::NotFound(_) | PfsError::NotDeletable(_) | PfsError::NoRoute(_) => {
                Code::NotFound
            }
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self.code() {
            Code::InvalidArgument => StatusCode::BAD_REQUEST,
            Code::AlreadyExists => StatusCode::CONFLICT,
            Code::NotFound => StatusCode::NOT_FOUND,
            Code::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for PfsError {
    fn from(rejection: JsonRejection) -> Self {
        PfsError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for PfsError {
    fn from(rejection: QueryRejection) -> Self {
        PfsError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for PfsError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::debug!(%status, error = %self, "request failed");

        let body = ErrorBody {
            code: self.code(),
            message: self.to_string(),
        };

        (status, axum::Json(body)).into_response()
    }
}

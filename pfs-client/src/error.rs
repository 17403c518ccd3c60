//! Error types for the PFS client

use http::StatusCode;
use pfs_api::{Code, DeleteTargetError, ErrorBody};
use thiserror::Error;

use crate::endpoint::EndpointError;
use crate::transport::BoxError;

/// An error from a PFS client call
#[derive(Debug, Error)]
pub enum Error {
    /// The call arguments were rejected before anything was sent
    #[error(transparent)]
    InvalidArgument(#[from] DeleteTargetError),

    /// The server rejected the call
    #[error(transparent)]
    Status(#[from] Status),

    /// The server endpoint could not be resolved
    #[error("Endpoint: {0}")]
    Endpoint(#[from] EndpointError),

    /// The request could not be built
    #[error("Building request: {0}")]
    Http(#[from] http::Error),

    /// An error occurred while sending the request
    #[error("Sending request: {0}")]
    Request(#[source] BoxError),

    /// An error occurred while receiving the response body
    #[error("Receiving body: {0}")]
    Body(#[source] BoxError),

    /// The response body was not the expected model
    #[error("Model: {0}")]
    Serde(#[from] serde_json::Error),
}

impl Error {
    /// Error code for errors raised by validation or by the server.
    pub fn code(&self) -> Option<Code> {
        match self {
            Error::InvalidArgument(_) => Some(Code::InvalidArgument),
            Error::Status(status) => Some(status.code()),
            _ => None,
        }
    }
}

/// A server returned an error response
#[derive(Debug, Clone, Error)]
#[error("{code}: {message}")]
pub struct Status {
    code: Code,
    message: String,
    http: StatusCode,
}

impl Status {
    /// Decode an error response body.
    ///
    /// Bodies that are not an error payload are kept verbatim as an
    /// [`Code::Internal`] message.
    pub fn from_response(http: StatusCode, body: &[u8]) -> Self {
        match serde_json::from_slice::<ErrorBody>(body) {
            Ok(ErrorBody { code, message }) => Self {
                code,
                message,
                http,
            },
            Err(_) => Self {
                code: Code::Internal,
                message: String::from_utf8_lossy(body).into_owned(),
                http,
            },
        }
    }

    /// Error kind
    pub fn code(&self) -> Code {
        self.code
    }

    /// Message sent by the server
    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status of the response
    pub fn http_status(&self) -> StatusCode {
        self.http
    }
}

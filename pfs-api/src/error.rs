//! Error codes carried by failed calls

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of a failed call, so callers can branch without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Code {
    /// The request was malformed
    InvalidArgument,

    /// The repository already exists
    AlreadyExists,

    /// The repository does not exist
    NotFound,

    /// Anything else
    Internal,
}

impl Code {
    /// Wire name of the code
    pub fn as_str(&self) -> &'static str {
        match self {
            Code::InvalidArgument => "INVALID_ARGUMENT",
            Code::AlreadyExists => "ALREADY_EXISTS",
            Code::NotFound => "NOT_FOUND",
            Code::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error payload returned with every non-success response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error kind
    pub code: Code,

    /// Human readable message
    pub message: String,
}

//! Repository records as they appear on the wire.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reference to a repository by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Repo {
    /// Repository name
    pub name: String,
}

impl Repo {
    /// Create a reference to the named repository
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Repo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Metadata for a single repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoInfo {
    /// The repository this record describes
    pub repo: Repo,

    /// Free-text description, empty unless one was given at creation
    #[serde(default)]
    pub description: String,

    /// Total size of the stored content
    #[serde(default)]
    pub size_bytes: u64,

    /// Repositories this one was derived from
    #[serde(default)]
    pub provenance: Vec<Repo>,

    /// When the repository was created
    pub created: DateTime<Utc>,
}

impl RepoInfo {
    /// Record for a freshly created repository: no content, no provenance.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            repo: Repo::new(name),
            description: description.into(),
            size_bytes: 0,
            provenance: Vec::new(),
            created: Utc::now(),
        }
    }

    /// Repository name
    pub fn name(&self) -> &str {
        &self.repo.name
    }
}

/// Body of a `CreateRepo` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRepoRequest {
    /// Name of the new repository
    pub name: String,

    /// Optional description
    #[serde(default)]
    pub description: String,
}

/// Body returned by `ListRepo`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListRepoResponse {
    /// Every registered repository
    #[serde(default)]
    pub repo_info: Vec<RepoInfo>,
}

/// Body returned by `DeleteRepo`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeleteRepoResponse {
    /// Repositories removed by the call
    #[serde(default)]
    pub deleted: Vec<Repo>,
}

/// Query parameters of a `DeleteRepo` call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeleteRepoParams {
    /// Delete every repository
    #[serde(default)]
    pub all: bool,
}

/// A repository name was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepoNameError {
    /// The name was empty
    #[error("repo name cannot be empty")]
    Empty,

    /// The name contained characters outside `[A-Za-z0-9_-]`
    #[error(
        "repo name ({0}) invalid: only alphanumeric characters, underscores, and dashes are allowed"
    )]
    InvalidCharacters(String),
}

/// Check that a repository name is usable.
pub fn validate_repo_name(name: &str) -> Result<(), RepoNameError> {
    if name.is_empty() {
        return Err(RepoNameError::Empty);
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(RepoNameError::InvalidCharacters(name.to_owned()));
    }

    Ok(())
}

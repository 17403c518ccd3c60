//! # PFS wire types
//!
//! Types shared between the repository registry server and its clients:
//! repository records, request and response bodies, the delete target and
//! the error codes carried by failed calls.

mod delete;
mod error;
mod repo;

pub use delete::{DeleteTarget, DeleteTargetError};
pub use error::{Code, ErrorBody};
pub use repo::{
    CreateRepoRequest, DeleteRepoParams, DeleteRepoResponse, ListRepoResponse, Repo, RepoInfo,
    RepoNameError, validate_repo_name,
};

/// Default port a PFS server listens on.
pub const DEFAULT_PORT: u16 = 30650;

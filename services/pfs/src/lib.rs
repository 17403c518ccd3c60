//! # PFS repository registry
//!
//! This crate holds the authoritative metadata for named repositories and
//! serves the repository control API (create, list, inspect, delete) over
//! HTTP with JSON bodies.
//!
//! ## Features
//!
//! - Explicitly constructed [`RepoRegistry`], shared by every request handler
//! - Name uniqueness and strict validation of bulk deletes
//! - Builder pattern for the router
//! - TOML server configuration, and the `pfsd` binary behind the `cli` feature
//!
//! ## Example
//!
//! ```no_run
//! use pfs::{PfsBuilder, RepoRegistry};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = RepoRegistry::new();
//! let app = PfsBuilder::new().registry(registry).build();
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:30650").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

mod api;
mod config;
mod error;
mod registry;
mod repos;

pub use api::PfsBuilder;
pub use config::{ConfigError, ServerConfig};
pub use error::{PfsError, PfsResult};
pub use registry::RepoRegistry;

#[doc(no_inline)]
pub use pfs_api::{Code, DeleteTarget, DeleteTargetError, Repo, RepoInfo};

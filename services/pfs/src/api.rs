//! API server builder and router

use axum::Router;
use axum::http::{StatusCode, Uri};
use axum::response::Json;
use axum::routing::get;
use serde::Serialize;

use crate::error::PfsError;
use crate::registry::RepoRegistry;

/// Builder for configuring and creating the PFS service
#[derive(Debug, Default)]
pub struct PfsBuilder {
    registry: Option<RepoRegistry>,
}

impl PfsBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve an existing registry
    ///
    /// Without one, the service starts from an empty registry.
    pub fn registry(mut self, registry: RepoRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Build the PFS service
    ///
    /// Returns a Router that can be served with any tower-compatible server
    pub fn build(self) -> Router {
        let registry = self.registry.unwrap_or_default();

        Router::new()
            .route("/v1/", get(api_version_check))
            .merge(crate::repos::router())
            .fallback(no_route)
            .with_state(registry)
    }
}

#[derive(Debug, Serialize)]
struct Empty {}

/// API version check endpoint
///
/// Returns 200 OK to indicate the service is available
async fn api_version_check() -> (StatusCode, Json<Empty>) {
    (StatusCode::OK, Json(Empty {}))
}

/// Unmatched paths answer with an error body like every other failure
async fn no_route(uri: Uri) -> PfsError {
    PfsError::NoRoute(uri.path().to_owned())
}

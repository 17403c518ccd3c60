//! Repository operations for the registry

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use pfs_api::{
    CreateRepoRequest, DeleteRepoParams, DeleteRepoResponse, DeleteTarget, ListRepoResponse,
    RepoInfo,
};

use crate::error::PfsResult;
use crate::registry::RepoRegistry;

/// Router for repository operations
pub fn router() -> Router<RepoRegistry> {
    Router::new()
        .route(
            "/v1/repos",
            post(create_repo).get(list_repo).delete(delete_repos),
        )
        .route("/v1/repos/{name}", get(inspect_repo).delete(delete_repo))
}

/// Create a repository
async fn create_repo(
    State(registry): State<RepoRegistry>,
    payload: Result<Json<CreateRepoRequest>, JsonRejection>,
) -> PfsResult<(StatusCode, Json<RepoInfo>)> {
    let Json(request) = payload?;
    let info = registry.create(&request.name, &request.description)?;
    Ok((StatusCode::CREATED, Json(info)))
}

/// List all repositories
async fn list_repo(State(registry): State<RepoRegistry>) -> Json<ListRepoResponse> {
    Json(ListRepoResponse {
        repo_info: registry.list(),
    })
}

/// Inspect a single repository
async fn inspect_repo(
    State(registry): State<RepoRegistry>,
    Path(name): Path<String>,
) -> PfsResult<Json<RepoInfo>> {
    Ok(Json(registry.inspect(&name)?))
}

/// Delete a named repository
///
/// Passing `all=true` alongside a name is rejected.
async fn delete_repo(
    State(registry): State<RepoRegistry>,
    Path(name): Path<String>,
    params: Result<Query<DeleteRepoParams>, QueryRejection>,
) -> PfsResult<Json<DeleteRepoResponse>> {
    let Query(params) = params?;
    let target = DeleteTarget::from_parts(Some(name), params.all)?;
    delete(&registry, &target)
}

/// Delete every repository, requires `all=true`
async fn delete_repos(
    State(registry): State<RepoRegistry>,
    params: Result<Query<DeleteRepoParams>, QueryRejection>,
) -> PfsResult<Json<DeleteRepoResponse>> {
    let Query(params) = params?;
    let target = DeleteTarget::from_parts(None, params.all)?;
    delete(&registry, &target)
}

fn delete(registry: &RepoRegistry, target: &DeleteTarget) -> PfsResult<Json<DeleteRepoResponse>> {
    let deleted = registry.delete(target)?;
    Ok(Json(DeleteRepoResponse { deleted }))
}

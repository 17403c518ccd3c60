//! # PFS client
//!
//! A thin client for the PFS repository control API. Arguments are
//! marshalled into HTTP requests with JSON bodies, and error responses are
//! turned back into typed [`Error`]s which carry a [`Code`].
//!
//! ```no_run
//! use pfs_client::PfsClient;
//!
//! # async fn example() -> Result<(), pfs_client::Error> {
//! // Resolves PACHD_SERVICE_HOST / PACHD_SERVICE_PORT_API_GRPC_PORT,
//! // falling back to localhost:30650.
//! let client = PfsClient::connect(None, None)?;
//!
//! client.create_repo("images", Some("raw input images")).await?;
//! for info in client.list_repo().await? {
//!     println!("{} ({} bytes)", info.repo, info.size_bytes);
//! }
//! client.delete_repo(Some("images"), false).await?;
//! # Ok(())
//! # }
//! ```

use std::fmt;

use bytes::Bytes;
use http::Method;
use http_body_util::BodyExt as _;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tower::ServiceExt as _;

mod endpoint;
mod error;
pub mod transport;

pub use self::endpoint::{DEFAULT_HOST, Endpoint, EndpointError, HOST_ENV, PORT_ENV};
pub use self::error::{Error, Status};
pub use self::transport::Transport;

#[doc(no_inline)]
pub use pfs_api::{Code, DeleteTarget, DeleteTargetError, Repo, RepoInfo};

use pfs_api::{CreateRepoRequest, DeleteRepoResponse, ListRepoResponse};

/// Characters escaped in a repository name used as a path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// Client for the PFS repository API
#[derive(Clone)]
pub struct PfsClient {
    endpoint: Endpoint,
    transport: Transport,
}

impl fmt::Debug for PfsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PfsClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl PfsClient {
    /// Create a client talking HTTP to `endpoint`
    pub fn new(endpoint: Endpoint) -> Self {
        Self::with_transport(endpoint, transport::http_transport())
    }

    /// Resolve the endpoint from arguments and the environment, then create a client.
    ///
    /// See [`Endpoint::resolve`].
    pub fn connect(host: Option<&str>, port: Option<u16>) -> Result<Self, Error> {
        Ok(Self::new(Endpoint::resolve(host, port)?))
    }

    /// Create a client which sends requests over a custom transport
    pub fn with_transport(endpoint: Endpoint, transport: Transport) -> Self {
        Self {
            endpoint,
            transport,
        }
    }

    /// The endpoint this client talks to
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Create a repository. The description defaults to empty.
    #[tracing::instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn create_repo(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<RepoInfo, Error> {
        let request = CreateRepoRequest {
            name: name.to_owned(),
            description: description.unwrap_or_default().to_owned(),
        };

        self.execute(Method::POST, "/v1/repos".to_owned(), Some(&request))
            .await
    }

    /// List every repository
    #[tracing::instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn list_repo(&self) -> Result<Vec<RepoInfo>, Error> {
        let response: ListRepoResponse = self
            .execute(Method::GET, "/v1/repos".to_owned(), None::<&()>)
            .await?;
        Ok(response.repo_info)
    }

    /// Inspect a single repository
    #[tracing::instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn inspect_repo(&self, name: &str) -> Result<RepoInfo, Error> {
        self.execute(Method::GET, repo_path(name), None::<&()>)
            .await
    }

    /// Delete a repository by name, or every repository with `all`.
    ///
    /// Exactly one of `name` and `all` must be given; otherwise this fails
    /// with [`Error::InvalidArgument`] without contacting the server.
    #[tracing::instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn delete_repo(&self, name: Option<&str>, all: bool) -> Result<Vec<Repo>, Error> {
        let target = DeleteTarget::from_parts(name.map(str::to_owned), all)?;
        self.delete(&target).await
    }

    /// Delete every repository, returning the server to its initial state
    pub async fn delete_all(&self) -> Result<Vec<Repo>, Error> {
        self.delete(&DeleteTarget::All).await
    }

    async fn delete(&self, target: &DeleteTarget) -> Result<Vec<Repo>, Error> {
        let path = match target {
            DeleteTarget::Single(name) => repo_path(name),
            DeleteTarget::All => "/v1/repos?all=true".to_owned(),
        };

        let response: DeleteRepoResponse =
            self.execute(Method::DELETE, path, None::<&()>).await?;
        Ok(response.deleted)
    }

    async fn execute<B, T>(&self, method: Method, path: String, body: Option<&B>) -> Result<T, Error>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let mut builder = http::Request::builder()
            .method(method)
            .version(http::Version::HTTP_11)
            .uri(format!("http://{}{}", self.endpoint, path))
            .header(http::header::ACCEPT, "application/json");

        let body = match body {
            Some(body) => {
                builder = builder.header(http::header::CONTENT_TYPE, "application/json");
                Bytes::from(serde_json::to_vec(body)?)
            }
            None => Bytes::new(),
        };

        let request = builder.body(body)?;
        tracing::trace!(method = %request.method(), uri = %request.uri(), "sending request");

        let response = self
            .transport
            .clone()
            .oneshot(request)
            .await
            .map_err(Error::Request)?;

        let status = response.status();
        let body = response
            .into_body()
            .collect()
            .await
            .map_err(Error::Body)?
            .to_bytes();

        if !status.is_success() {
            let status = Status::from_response(status, &body);
            tracing::debug!(code = %status.code(), message = status.message(), "request failed");
            return Err(status.into());
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

fn repo_path(name: &str) -> String {
    format!("/v1/repos/{}", utf8_percent_encode(name, PATH_SEGMENT))
}

//! Transports carrying requests to a PFS server.

use std::time::Duration;

use bytes::Bytes;
use http_body_util::BodyExt as _;
use http_body_util::combinators::UnsyncBoxBody;
use tower::util::BoxCloneSyncService;

/// Boxed error used by transports
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Response body produced by a [`Transport`]
pub type ResponseBody = UnsyncBoxBody<Bytes, BoxError>;

/// A cloneable service which sends a request and returns the response.
pub type Transport =
    BoxCloneSyncService<http::Request<Bytes>, http::Response<ResponseBody>, BoxError>;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
const TIMEOUT: Duration = Duration::from_secs(60);

/// Plain HTTP over TCP, with connect and request timeouts.
pub fn http_transport() -> Transport {
    let mut builder = hyperdriver::Client::build_tcp_http();
    let tcp = builder.transport();

    tcp.config_mut().connect_timeout = Some(CONNECT_TIMEOUT);

    let client = builder.with_timeout(TIMEOUT).build_service();

    service_transport(
        tower::ServiceBuilder::new()
            .map_request(|request: http::Request<Bytes>| request.map(hyperdriver::Body::from))
            .service(client),
    )
}

/// Wrap any HTTP service as a transport.
///
/// Useful for serving requests in-process, e.g. straight into a router.
pub fn service_transport<S, B>(service: S) -> Transport
where
    S: tower::Service<http::Request<Bytes>, Response = http::Response<B>>
        + Clone
        + Send
        + Sync
        + 'static,
    S::Error: Into<BoxError>,
    S::Future: Send + 'static,
    B: http_body::Body<Data = Bytes> + Send + 'static,
    B::Error: Into<BoxError>,
{
    let service = tower::ServiceBuilder::new()
        .map_err(|err: S::Error| -> BoxError { err.into() })
        .map_response(|response: http::Response<B>| {
            response.map(|body| body.map_err(|err| -> BoxError { err.into() }).boxed_unsync())
        })
        .service(service);

    BoxCloneSyncService::new(service)
}

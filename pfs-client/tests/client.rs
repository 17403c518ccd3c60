//! Client calls against an in-process PFS service

use bytes::Bytes;
use pfs::{PfsBuilder, RepoRegistry};
use pfs_client::transport::service_transport;
use pfs_client::{Code, Endpoint, Error, PfsClient};

/// A client wired straight into a fresh router, plus the registry behind it
fn client() -> (PfsClient, RepoRegistry) {
    let registry = RepoRegistry::new();
    let router = PfsBuilder::new().registry(registry.clone()).build();

    let service = tower::ServiceBuilder::new()
        .map_request(|request: http::Request<Bytes>| request.map(axum::body::Body::from))
        .service(router);

    let client = PfsClient::with_transport(Endpoint::default(), service_transport(service));
    (client, registry)
}

/// A client with one repository, for each of the repos used by the fixtures
async fn client_with_repo(name: &str, description: &str) -> PfsClient {
    let (client, _) = client();
    client.create_repo(name, Some(description)).await.unwrap();
    client
}

const REPOS: [(&str, &str); 2] = [("test", "This is a test repository"), ("test2", "")];

#[tokio::test]
async fn list_repo_empty() {
    let (client, _) = client();
    assert!(client.list_repo().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_repo() {
    let (client, _) = client();
    client.create_repo("test", None).await.unwrap();

    let repo_info = client.list_repo().await.unwrap();
    assert_eq!(repo_info.len(), 1);
    assert_eq!(repo_info[0].repo.name, "test");
    assert_eq!(repo_info[0].description, "");
    assert_eq!(repo_info[0].size_bytes, 0);
    assert!(repo_info[0].provenance.is_empty());
}

#[tokio::test]
async fn create_repo_with_description() {
    let (client, _) = client();
    client
        .create_repo("test", Some("This is a test repository"))
        .await
        .unwrap();

    let repo_info = client.list_repo().await.unwrap();
    assert_eq!(repo_info.len(), 1);
    assert_eq!(repo_info[0].repo.name, "test");
    assert_eq!(repo_info[0].description, "This is a test repository");
    assert_eq!(repo_info[0].size_bytes, 0);
    assert!(repo_info[0].provenance.is_empty());
}

#[tokio::test]
async fn create_repo_twice() {
    let (client, registry) = client();
    client.create_repo("test", Some("first")).await.unwrap();

    let err = client.create_repo("test", Some("second")).await.unwrap_err();
    assert_eq!(err.code(), Some(Code::AlreadyExists));
    assert_eq!(registry.len(), 1);
    assert_eq!(
        client.inspect_repo("test").await.unwrap().description,
        "first"
    );
}

#[tokio::test]
async fn inspect_repo() {
    for (name, description) in REPOS {
        let client = client_with_repo(name, description).await;

        let info = client.inspect_repo(name).await.unwrap();
        assert_eq!(info.repo.name, name);
        assert_eq!(info.description, description);

        let repo_info = client.list_repo().await.unwrap();
        assert_eq!(repo_info.len(), 1);
        assert_eq!(repo_info[0].repo.name, name);
        assert_eq!(repo_info[0].description, description);
        assert_eq!(repo_info[0].size_bytes, 0);
        assert!(repo_info[0].provenance.is_empty());
    }
}

#[tokio::test]
async fn inspect_missing_repo() {
    let (client, _) = client();
    let err = client.inspect_repo("nonexistent").await.unwrap_err();
    assert_eq!(err.code(), Some(Code::NotFound));
}

#[tokio::test]
async fn inspect_empty_name() {
    let (client, _) = client();
    client.create_repo("test", None).await.unwrap();

    let err = client.inspect_repo("").await.unwrap_err();
    assert_eq!(err.code(), Some(Code::NotFound));
}

#[tokio::test]
async fn delete_repo() {
    for (name, description) in REPOS {
        let client = client_with_repo(name, description).await;
        assert_eq!(client.list_repo().await.unwrap().len(), 1);

        client.delete_repo(Some(name), false).await.unwrap();
        assert!(client.list_repo().await.unwrap().is_empty());
    }
}

#[tokio::test]
async fn delete_repo_without_target() {
    for (name, description) in REPOS {
        let client = client_with_repo(name, description).await;

        let err = client.delete_repo(None, false).await.unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert_eq!(
            err.to_string(),
            "Either a repo_name or all=True needs to be provided"
        );
        assert_eq!(client.list_repo().await.unwrap().len(), 1);
    }
}

#[tokio::test]
async fn delete_nonexistent_repo() {
    for (name, description) in REPOS {
        let client = client_with_repo(name, description).await;

        let err = client
            .delete_repo(Some("BOGUS_NAME"), false)
            .await
            .unwrap_err();

        let Error::Status(status) = &err else {
            panic!("expected a server error, got {err:?}");
        };
        assert_eq!(status.code(), Code::NotFound);
        assert!(
            err.to_string()
                .contains("cannot delete \"BOGUS_NAME\" as it does not exist")
        );
        assert_eq!(client.list_repo().await.unwrap().len(), 1);
    }
}

#[tokio::test]
async fn delete_all_repos() {
    let (client, _) = client();
    client.create_repo("test-repo-1", None).await.unwrap();
    client.create_repo("test-repo-2", None).await.unwrap();
    assert_eq!(client.list_repo().await.unwrap().len(), 2);

    let deleted = client.delete_repo(None, true).await.unwrap();
    assert_eq!(deleted.len(), 2);
    assert!(client.list_repo().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_all_repos_with_name() {
    let (client, registry) = client();
    client.create_repo("test-repo-1", None).await.unwrap();
    client.create_repo("test-repo-2", None).await.unwrap();

    let err = client
        .delete_repo(Some("test-repo-1"), true)
        .await
        .unwrap_err();
    assert_eq!(err.code(), Some(Code::InvalidArgument));
    assert_eq!(err.to_string(), "Cannot specify a repo_name if all=True");
    assert_eq!(registry.len(), 2);
}

#[tokio::test]
async fn delete_all_resets_server() {
    let (client, registry) = client();
    client.create_repo("test", None).await.unwrap();
    client.create_repo("test2", None).await.unwrap();

    client.delete_all().await.unwrap();
    assert!(registry.is_empty());

    // Deleting everything from an empty server is not an error
    assert!(client.delete_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_repo_is_stable() {
    let (client, _) = client();
    client.create_repo("test", None).await.unwrap();
    client.create_repo("test2", None).await.unwrap();

    assert_eq!(
        client.list_repo().await.unwrap(),
        client.list_repo().await.unwrap()
    );
}

//! Integration tests for the Atlas API client
//!
//! The real client is pointed at a mockito server, so the request shapes
//! (paths, versioned media types, digest handshake) are exercised end to end.

use atlasctl::atlas::{AtlasClient, ATLAS_MEDIA_TYPE};
use atlasctl::config::Credentials;
use atlasctl::error::AtlasctlError;
use mockito::Matcher;

fn test_client(base_url: &str) -> AtlasClient {
    let credentials = Credentials {
        public_key: "test-public".to_string(),
        private_key: "test-private".to_string(),
    };
    AtlasClient::new(base_url, "64abc0123456789000000000", credentials).unwrap()
}

const CLUSTERS_BODY: &str = r#"{
    "results": [
        {
            "name": "prod-cluster",
            "paused": false,
            "stateName": "IDLE",
            "replicationSpecs": [{
                "regionConfigs": [{
                    "electableSpecs": {"instanceSize": "M10", "nodeCount": 3}
                }]
            }]
        },
        {
            "name": "sandbox",
            "paused": false,
            "replicationSpecs": [{
                "regionConfigs": [{
                    "electableSpecs": {"instanceSize": "M0", "nodeCount": 3}
                }]
            }]
        }
    ],
    "totalCount": 2
}"#;

#[tokio::test]
async fn test_list_clusters_success() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock(
            "GET",
            "/api/atlas/v2/groups/64abc0123456789000000000/clusters",
        )
        .match_header("accept", ATLAS_MEDIA_TYPE)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(CLUSTERS_BODY)
        .create_async()
        .await;

    let client = test_client(&server.url());
    let clusters = client.list_clusters().await.unwrap();

    assert_eq!(clusters.len(), 2);
    assert_eq!(clusters[0].name, "prod-cluster");
    assert_eq!(clusters[0].tier(), Some("M10"));
    assert_eq!(clusters[1].tier(), Some("M0"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_clusters_empty_results() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock(
            "GET",
            "/api/atlas/v2/groups/64abc0123456789000000000/clusters",
        )
        .with_status(200)
        .with_body(r#"{"results": [], "totalCount": 0}"#)
        .create_async()
        .await;

    let client = test_client(&server.url());
    let clusters = client.list_clusters().await.unwrap();
    assert!(clusters.is_empty());
}

#[tokio::test]
async fn test_list_clusters_non_200_is_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock(
            "GET",
            "/api/atlas/v2/groups/64abc0123456789000000000/clusters",
        )
        .with_status(500)
        .with_body(r#"{"detail": "internal error"}"#)
        .create_async()
        .await;

    let client = test_client(&server.url());
    let err = client.list_clusters().await.unwrap_err();

    match err {
        AtlasctlError::Api { status, body } => {
            assert_eq!(status, 500);
            assert!(body.contains("internal error"));
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_pause_cluster_sends_patch() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock(
            "PATCH",
            "/api/atlas/v2/groups/64abc0123456789000000000/clusters/prod-cluster",
        )
        .match_header("content-type", ATLAS_MEDIA_TYPE)
        .match_header("accept", ATLAS_MEDIA_TYPE)
        .match_body(Matcher::Json(serde_json::json!({"paused": true})))
        .with_status(200)
        .with_body(r#"{"name": "prod-cluster", "paused": true}"#)
        .create_async()
        .await;

    let client = test_client(&server.url());
    client.pause_cluster("prod-cluster").await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_pause_cluster_non_200_is_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock(
            "PATCH",
            "/api/atlas/v2/groups/64abc0123456789000000000/clusters/prod-cluster",
        )
        .with_status(409)
        .with_body(r#"{"errorCode": "CANNOT_PAUSE_RECENTLY_RESUMED_CLUSTER"}"#)
        .create_async()
        .await;

    let client = test_client(&server.url());
    let err = client.pause_cluster("prod-cluster").await.unwrap_err();

    match err {
        AtlasctlError::Api { status, body } => {
            assert_eq!(status, 409);
            assert!(body.contains("CANNOT_PAUSE_RECENTLY_RESUMED_CLUSTER"));
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_digest_challenge_roundtrip() {
    let mut server = mockito::Server::new_async().await;

    // First request carries no Authorization header and gets challenged
    let challenge = server
        .mock(
            "GET",
            "/api/atlas/v2/groups/64abc0123456789000000000/clusters",
        )
        .match_header("authorization", Matcher::Missing)
        .with_status(401)
        .with_header(
            "www-authenticate",
            r#"Digest realm="MMS Public API", domain="", nonce="dcd98b7102dd2f0e8b11d0f600bfb0c093", algorithm=MD5, qop="auth", stale=false"#,
        )
        .create_async()
        .await;

    // The retry must answer the challenge
    let answered = server
        .mock(
            "GET",
            "/api/atlas/v2/groups/64abc0123456789000000000/clusters",
        )
        .match_header("authorization", Matcher::Regex("^Digest .*".to_string()))
        .with_status(200)
        .with_body(r#"{"results": [], "totalCount": 0}"#)
        .create_async()
        .await;

    let client = test_client(&server.url());
    let clusters = client.list_clusters().await.unwrap();

    assert!(clusters.is_empty());
    challenge.assert_async().await;
    answered.assert_async().await;
}

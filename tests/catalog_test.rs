//! Catalog client tests
//!
//! Tests catalog fetch, parse, and transport error handling.

use mockito::Server;

use castgate::api::{CatalogClient, TransportError};

// =============================================================================
// Mock Response Fixtures
// =============================================================================

fn mock_catalog_response() -> &'static str {
    r#"{
        "bbb": {
            "title": "Big Buck Bunny",
            "author": "Blender Foundation",
            "description": "A giant rabbit takes revenge on three rodents",
            "poster": "http://cdn.example/bbb.jpg",
            "stream": {
                "dash": "http://cdn.example/bbb.mpd",
                "hls": "http://cdn.example/bbb.m3u8"
            }
        },
        "sintel": {
            "title": "Sintel",
            "author": "Blender Foundation",
            "description": "A girl searches for a baby dragon",
            "poster": "http://cdn.example/sintel.jpg",
            "stream": {
                "dash": "http://cdn.example/sintel.mpd",
                "hls": "http://cdn.example/sintel.m3u8"
            }
        }
    }"#
}

// =============================================================================
// Fetch Tests
// =============================================================================

#[tokio::test]
async fn test_fetch_parses_catalog() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/content.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(mock_catalog_response())
        .create_async()
        .await;

    let client = CatalogClient::with_url(format!("{}/content.json", server.url()));
    let catalog = client.fetch().await.unwrap();

    mock.assert_async().await;

    assert_eq!(catalog.len(), 2);
    let entry = catalog.get("bbb").unwrap();
    assert_eq!(entry.title, "Big Buck Bunny");
    assert_eq!(entry.author.as_deref(), Some("Blender Foundation"));
    assert_eq!(entry.stream.dash, "http://cdn.example/bbb.mpd");
    assert_eq!(entry.stream.hls, "http://cdn.example/bbb.m3u8");

    // Absent ids are a valid, expected outcome
    assert!(catalog.get("missing").is_none());
}

#[tokio::test]
async fn test_fetch_parses_empty_catalog() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/content.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create_async()
        .await;

    let client = CatalogClient::with_url(format!("{}/content.json", server.url()));
    let catalog = client.fetch().await.unwrap();

    mock.assert_async().await;
    assert!(catalog.is_empty());
}

#[tokio::test]
async fn test_fetch_repeats_on_every_call() {
    let mut server = Server::new_async().await;

    // No caching: two fetches must hit the endpoint twice
    let mock = server
        .mock("GET", "/content.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(mock_catalog_response())
        .expect(2)
        .create_async()
        .await;

    let client = CatalogClient::with_url(format!("{}/content.json", server.url()));
    client.fetch().await.unwrap();
    client.fetch().await.unwrap();

    mock.assert_async().await;
}

// =============================================================================
// Error Handling Tests
// =============================================================================

#[tokio::test]
async fn test_fetch_surfaces_http_status() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/content.json")
        .with_status(404)
        .with_body("not here")
        .create_async()
        .await;

    let client = CatalogClient::with_url(format!("{}/content.json", server.url()));
    let err = client.fetch().await.unwrap_err();

    mock.assert_async().await;

    match err {
        TransportError::Status {
            status,
            status_text,
        } => {
            assert_eq!(status, 404);
            assert_eq!(status_text, "Not Found");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_surfaces_server_error() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/content.json")
        .with_status(500)
        .create_async()
        .await;

    let client = CatalogClient::with_url(format!("{}/content.json", server.url()));
    let err = client.fetch().await.unwrap_err();

    mock.assert_async().await;
    assert!(matches!(err, TransportError::Status { status: 500, .. }));
}

#[tokio::test]
async fn test_fetch_fails_before_any_status() {
    // Nothing listens on this port; the request errors at the transport
    // level before an HTTP status exists
    let client = CatalogClient::with_url("http://127.0.0.1:1/content.json");
    let err = client.fetch().await.unwrap_err();

    assert!(matches!(err, TransportError::Request(_)));
}

#[tokio::test]
async fn test_fetch_rejects_invalid_json() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/content.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("not valid json {{{")
        .create_async()
        .await;

    let client = CatalogClient::with_url(format!("{}/content.json", server.url()));
    let err = client.fetch().await.unwrap_err();

    mock.assert_async().await;
    assert!(matches!(err, TransportError::InvalidBody(_)));
}

//! Integration tests for the gist queue client
//!
//! These tests simulate the remote document with wiremock; nothing here
//! touches the network.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wqsource::GistQueueClient;

async fn client_for(server: &MockServer) -> GistQueueClient {
    GistQueueClient::builder()
        .document_url(format!("{}/queue.json", server.uri()))
        .build()
        .await
        .expect("failed to build client")
}

#[tokio::test]
async fn test_fetch_queue_returns_urls_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/queue.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "queue": [
                "https://youtu.be/abc",
                "not-a-video-url",
                "https://youtube.com/watch?v=def"
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let urls = client.fetch_queue().await.unwrap();

    // Le client renvoie la liste brute ; le filtrage appartient à l'appelant
    assert_eq!(
        urls,
        vec![
            "https://youtu.be/abc",
            "not-a-video-url",
            "https://youtube.com/watch?v=def"
        ]
    );
}

#[tokio::test]
async fn test_missing_queue_field_yields_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/queue.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "some other document"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let urls = client.fetch_queue().await.unwrap();
    assert!(urls.is_empty());
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/queue.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.fetch_queue().await.unwrap_err();
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn test_malformed_body_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/queue.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("definitely not json"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert!(client.fetch_queue().await.is_err());
}

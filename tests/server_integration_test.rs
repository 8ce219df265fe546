//! Server integration tests that test the actual server behavior.
//!
//! These tests start a real TCP server and verify behavior that can only
//! be tested with actual network connections.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use utoipa::OpenApi;

use colorcop::models::AppConfig;
use colorcop::server::{build_router, create_app_state, ApiDoc};

/// Start a test server on an available port and return the port number.
async fn start_test_server() -> u16 {
    let state = create_app_state(AppConfig::default());
    let app = build_router(state);

    // Bind to port 0 to get an available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let port = listener.local_addr().unwrap().port();

    // Spawn the server in the background
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    // Give the server a moment to start
    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

    port
}

/// Send one raw HTTP/1.1 request and read until the server closes.
async fn send_raw(port: u16, request: &str) -> String {
    let mut stream = TcpStream::connect(format!("127.0.0.1:{}", port))
        .await
        .expect("Failed to connect");

    stream
        .write_all(request.as_bytes())
        .await
        .expect("Failed to write request");

    let mut response = Vec::new();
    tokio::time::timeout(
        tokio::time::Duration::from_secs(5),
        stream.read_to_end(&mut response),
    )
    .await
    .expect("Timed out waiting for response")
    .expect("Failed to read response");

    String::from_utf8_lossy(&response).to_string()
}

#[tokio::test]
async fn test_health_over_tcp() {
    let port = start_test_server().await;

    let response = send_raw(
        port,
        "GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
    )
    .await;

    assert!(response.starts_with("HTTP/1.1 200"), "{response}");
    assert!(response.ends_with("OK"), "{response}");
}

#[tokio::test]
async fn test_cluster_over_tcp() {
    let port = start_test_server().await;

    let body = r##"{"colors":["#FF0000","#FE0101","#0000FF"],"threshold":5}"##;
    let request = format!(
        "POST /api/cluster HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    );
    let response = send_raw(port, &request).await;

    assert!(response.starts_with("HTTP/1.1 200"), "{response}");
    let json_start = response.find("\r\n\r\n").expect("No header terminator") + 4;
    let json: serde_json::Value =
        serde_json::from_str(&response[json_start..]).expect("Body is not JSON");
    assert_eq!(json["clusters"].as_array().unwrap().len(), 2);
    assert_eq!(json["clusters"][0]["count"], 2);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let port = start_test_server().await;

    let response = send_raw(
        port,
        "GET /api/unknown HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
    )
    .await;

    assert!(response.starts_with("HTTP/1.1 404"), "{response}");
}

#[test]
fn test_openapi_document_lists_all_endpoints() {
    let doc = ApiDoc::openapi();
    let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

    for expected in [
        "/api/cluster",
        "/api/nearest",
        "/api/lab/{hex}",
        "/api/contrast",
        "/api/analyze",
    ] {
        assert!(paths.contains(&expected), "missing {expected} in {paths:?}");
    }
}

//! End-to-end tests against a real listener.

use std::time::Duration;

use encoding_showcase::{Encoding, MESSAGE};
use encoding_showcase::http::{report, HttpServer, ServerError, X_REQUEST_ID};
use encoding_showcase::ServiceConfig;

mod common;

#[tokio::test]
async fn test_root_returns_thirteen_lines() {
    let server = common::start_server().await;

    let res = common::client()
        .get(server.url("/"))
        .send()
        .await
        .expect("server unreachable");

    assert_eq!(res.status(), 200);
    assert!(res.headers().contains_key(X_REQUEST_ID));
    let content_type = res.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/plain"), "got {}", content_type);

    let body = res.text().await.unwrap();
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines.len(), 13);
    assert_eq!(lines[0], format!("Original: {}", MESSAGE));
    for (line, encoding) in lines[1..].iter().zip(Encoding::ALL) {
        assert!(
            line.starts_with(&format!("Encoded ({}): ", encoding.label())),
            "unexpected line {:?}",
            line
        );
    }
    assert_eq!(body, report(MESSAGE).unwrap());

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_every_path_and_method_is_served() {
    let server = common::start_server().await;
    let client = common::client();

    let res = client.get(server.url("/favicon.ico")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap().lines().count(), 13);

    let res = client.delete(server.url("/")).send().await.unwrap();
    assert_eq!(res.status(), 200);

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_graceful_shutdown_stops_server() {
    let server = common::start_server().await;
    let res = common::client().get(server.url("/")).send().await.unwrap();
    assert_eq!(res.status(), 200);

    server.shutdown.trigger();
    tokio::time::timeout(Duration::from_secs(5), server.handle)
        .await
        .expect("server did not stop")
        .unwrap();
}

#[tokio::test]
async fn test_bind_conflict_is_reported() {
    let occupied = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = occupied.local_addr().unwrap().port();

    let mut config = ServiceConfig::default();
    config.listener.host = "127.0.0.1".into();
    config.listener.port = port;

    let err = HttpServer::new(config).bind().await.unwrap_err();
    assert!(matches!(err, ServerError::Bind { .. }));
    assert!(err.to_string().contains(&port.to_string()));
}
